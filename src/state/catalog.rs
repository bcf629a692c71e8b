use std::collections::HashMap;

use crate::models::{Category, ItemMacros, MenuItem};

/// Immutable menu catalog with id lookup.
///
/// Shared read-only across planning sessions; plan entries reference
/// items by id and never duplicate them. Construction deduplicates by id
/// (last occurrence wins) while preserving first-seen order.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut ordered: Vec<MenuItem> = Vec::with_capacity(items.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for item in items {
            match index.get(&item.id) {
                Some(&at) => ordered[at] = item,
                None => {
                    index.insert(item.id.clone(), ordered.len());
                    ordered.push(item);
                }
            }
        }

        Self { items: ordered }
    }

    /// The builtin Kiwi Natural menu.
    pub fn builtin() -> Self {
        Self::new(builtin_items())
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Exact name lookup, case-insensitive.
    pub fn get_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: u32,
    category: Category,
    is_popular: bool,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        is_popular,
        calories: Some(calories),
        macros: Some(ItemMacros {
            protein,
            carbs,
            fat,
        }),
    }
}

/// The Kiwi Natural storefront menu, embedded so the planner works with
/// no external files.
fn builtin_items() -> Vec<MenuItem> {
    vec![
        entry(
            "e1",
            "Manzana Nuez",
            "Lechuga fresca acompañada con el sabor especial del queso de cabra, nuez, dulces cubitos de manzana, ajonjolí y aderezo balsámico.",
            125,
            Category::Ensaladas,
            true,
            320.0,
            8.0,
            25.0,
            22.0,
        ),
        entry(
            "e2",
            "Frutos Rojos",
            "Mezcla de lechuga con fresa, arándanos, cuadritos de queso panela, cacahuates garapiñados y aderezo balsámico.",
            130,
            Category::Ensaladas,
            false,
            290.0,
            12.0,
            30.0,
            15.0,
        ),
        entry(
            "e3",
            "Ensalada Verde",
            "Lechuga, panela, pepino, espinaca, jugosos tomates cherry, semillas de girasol, aguacate y germinado.",
            110,
            Category::Ensaladas,
            false,
            210.0,
            10.0,
            12.0,
            14.0,
        ),
        entry(
            "e4",
            "Del Chef",
            "Lechuga fresca, pollo a la plancha, pepino, jamón, queso panela, tostadas horneadas y germinado de alfalfa.",
            130,
            Category::Ensaladas,
            false,
            450.0,
            45.0,
            20.0,
            20.0,
        ),
        entry(
            "c1",
            "Combo Premium",
            "Media ensalada premium y medio baguette de pollo, pollo BBQ o atún.",
            185,
            Category::Combos,
            true,
            650.0,
            35.0,
            65.0,
            25.0,
        ),
        entry(
            "c2",
            "Combo Kiwi",
            "Media ensalada y medio baguette de pollo, pollo BBQ o atún.",
            170,
            Category::Combos,
            false,
            580.0,
            30.0,
            60.0,
            22.0,
        ),
        entry(
            "s1",
            "Baguette de Pollo",
            "Pan artesanal crujiente con pechuga de pollo a la plancha, vegetales frescos y aderezo de la casa.",
            120,
            Category::Emparedados,
            false,
            420.0,
            35.0,
            45.0,
            10.0,
        ),
        entry(
            "s2",
            "Cuernito Jamón",
            "Pan tradicional danés hecho con mantequilla, relleno de jamón de pavo y queso crema.",
            95,
            Category::Emparedados,
            false,
            380.0,
            18.0,
            35.0,
            20.0,
        ),
        entry(
            "s3",
            "Focaccia Quesos",
            "Pan italiano horneado con romero y aceite de oliva, relleno de selección de quesos.",
            95,
            Category::Emparedados,
            false,
            410.0,
            15.0,
            40.0,
            22.0,
        ),
        entry(
            "o1",
            "Omelette de Pollo",
            "Con queso y espinaca acompañado de verdura fresca, rebanada de pan y aderezo.",
            140,
            Category::Omelettes,
            false,
            350.0,
            32.0,
            15.0,
            18.0,
        ),
        entry(
            "j1",
            "Jugo Verde",
            "Mezcla de pepino, apio, espinaca verde, jugo de limón y acidita manzana verde.",
            68,
            Category::Jugos,
            true,
            120.0,
            2.0,
            28.0,
            0.0,
        ),
        entry(
            "j2",
            "Anti-Anemia",
            "Jugo de naranja fresca con zanahoria y todo el color del betabel.",
            65,
            Category::Jugos,
            false,
            140.0,
            2.0,
            32.0,
            0.0,
        ),
        entry(
            "j3",
            "Shot Jengibre-Piña",
            "Energizante mezcla de extracto de jengibre y rico jugo de piña (118ml).",
            45,
            Category::Jugos,
            false,
            60.0,
            0.0,
            15.0,
            0.0,
        ),
        entry(
            "sm1",
            "Smoothie Cacao",
            "Plátano mezclado con leche de almendra, miel de abeja, cacao, chía y espinaca verde.",
            90,
            Category::Smoothies,
            false,
            280.0,
            8.0,
            35.0,
            12.0,
        ),
        entry(
            "sm2",
            "Licuado Choco-Plátano",
            "El clásico favorito con leche de tu elección.",
            55,
            Category::Smoothies,
            false,
            320.0,
            12.0,
            45.0,
            10.0,
        ),
        entry(
            "p1",
            "Yogurt con Fruta",
            "Frutas de temporada bañadas con yogurt natural, miel y cereales.",
            95,
            Category::Postres,
            false,
            220.0,
            8.0,
            40.0,
            4.0,
        ),
        entry(
            "p2",
            "Escamocha",
            "Mezcla de frutas frescas con jugo de naranja, lechera y cereales.",
            95,
            Category::Postres,
            false,
            280.0,
            5.0,
            55.0,
            6.0,
        ),
    ]
}
