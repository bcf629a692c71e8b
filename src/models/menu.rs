use serde::{Deserialize, Serialize};

use crate::models::plan::Macros;

/// Menu category. Serialized by its storefront display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Ensaladas")]
    Ensaladas,

    #[serde(rename = "Combos")]
    Combos,

    #[serde(rename = "Emparedados")]
    Emparedados,

    #[serde(rename = "Omelettes")]
    Omelettes,

    #[serde(rename = "Jugoterapia")]
    Jugos,

    #[serde(rename = "Smoothies")]
    Smoothies,

    #[serde(rename = "Frutas & Postres")]
    Postres,
}

impl Category {
    /// Storefront display name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Ensaladas => "Ensaladas",
            Category::Combos => "Combos",
            Category::Emparedados => "Emparedados",
            Category::Omelettes => "Omelettes",
            Category::Jugos => "Jugoterapia",
            Category::Smoothies => "Smoothies",
            Category::Postres => "Frutas & Postres",
        }
    }
}

/// Macro breakdown of one menu item, grams per serving.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A catalog item. Loaded once at startup and never mutated.
///
/// `calories` and `macros` are optional; items missing macro data are
/// invisible to the substitute matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: u32,

    pub category: Category,

    #[serde(rename = "isPopular", default)]
    pub is_popular: bool,

    #[serde(default)]
    pub calories: Option<f64>,

    #[serde(default)]
    pub macros: Option<ItemMacros>,
}

impl MenuItem {
    /// Whether the matcher may consider this item.
    pub fn matchable(&self) -> bool {
        self.macros.is_some()
    }

    /// Calories for scoring; missing data counts as zero.
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    /// Full quadruple for plan entries committed from this item.
    pub fn estimate(&self) -> Macros {
        let macros = self.macros.unwrap_or(ItemMacros {
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
        });
        Macros::new(
            self.calories_or_zero(),
            macros.protein,
            macros.carbs,
            macros.fat,
        )
    }

    /// Basic validation: positive price, non-negative nutrition data.
    pub fn is_valid(&self) -> bool {
        self.price > 0
            && !self.id.is_empty()
            && self.calories.unwrap_or(0.0) >= 0.0
            && self
                .macros
                .map(|m| m.protein >= 0.0 && m.carbs >= 0.0 && m.fat >= 0.0)
                .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: "e1".to_string(),
            name: "Manzana Nuez".to_string(),
            description: "Lechuga con queso de cabra y nuez".to_string(),
            price: 125,
            category: Category::Ensaladas,
            is_popular: true,
            calories: Some(320.0),
            macros: Some(ItemMacros {
                protein: 8.0,
                carbs: 25.0,
                fat: 22.0,
            }),
        }
    }

    #[test]
    fn test_estimate_copies_item_data() {
        let item = sample_item();
        let est = item.estimate();
        assert_eq!(est.calories, 320.0);
        assert_eq!(est.protein, 8.0);
        assert_eq!(est.carbs, 25.0);
        assert_eq!(est.fat, 22.0);
    }

    #[test]
    fn test_matchable_requires_macros() {
        let mut item = sample_item();
        assert!(item.matchable());

        item.macros = None;
        assert!(!item.matchable());
    }

    #[test]
    fn test_missing_calories_count_as_zero() {
        let mut item = sample_item();
        item.calories = None;
        assert_eq!(item.calories_or_zero(), 0.0);
        assert_eq!(item.estimate().calories, 0.0);
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.price = 0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_category_roundtrip_by_display_name() {
        let json = serde_json::to_string(&Category::Postres).unwrap();
        assert_eq!(json, "\"Frutas & Postres\"");

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Postres);
    }
}
