use serde::{Deserialize, Serialize};

use crate::models::menu::{Category, MenuItem};

/// Calorie/macro quadruple used for estimates, targets, and totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Elementwise accumulation.
    pub fn add(&mut self, other: &Macros) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }

    /// Elementwise scaling, e.g. by a portion multiplier or slot share.
    pub fn scale(&self, factor: f64) -> Macros {
        Macros {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Round every field to the nearest whole unit.
    pub fn rounded(&self) -> Macros {
        Macros {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fat: self.fat.round(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.calories == 0.0 && self.protein == 0.0 && self.carbs == 0.0 && self.fat == 0.0
    }
}

/// The four meal slots of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Share of the daily goals targeted by this slot when it has no
    /// usable manual estimate.
    ///
    /// Each meal is targeted against its own share independently; the
    /// shares are never renormalized across slots.
    pub fn ideal_share(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Snack => 0.15,
            MealSlot::Dinner => 0.25,
        }
    }

    /// Categories the matcher may draw from for this slot.
    pub fn allowed_categories(&self) -> &'static [Category] {
        match self {
            MealSlot::Breakfast => &[
                Category::Omelettes,
                Category::Smoothies,
                Category::Postres,
                Category::Emparedados,
                Category::Jugos,
            ],
            MealSlot::Lunch => &[Category::Ensaladas, Category::Combos, Category::Emparedados],
            MealSlot::Snack => &[Category::Jugos, Category::Smoothies, Category::Postres],
            MealSlot::Dinner => &[Category::Ensaladas, Category::Emparedados, Category::Jugos],
        }
    }

    /// Whether an item's category is admissible for this slot.
    pub fn admits(&self, category: Category) -> bool {
        self.allowed_categories().contains(&category)
    }
}

/// One slot of a day plan.
///
/// `Assigned` always carries the catalog id of the committed item and a
/// macro snapshot equal to that item's data; the planner is the only
/// writer, so the invariant cannot drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MealEntry {
    #[default]
    Empty,

    /// Free-text entry with the estimator's output.
    Manual { text: String, macros: Macros },

    /// A committed catalog selection.
    Assigned {
        item_id: String,
        text: String,
        macros: Macros,
    },
}

impl MealEntry {
    pub fn manual(text: impl Into<String>, macros: Macros) -> Self {
        MealEntry::Manual {
            text: text.into(),
            macros,
        }
    }

    /// Entry committed from a catalog item: text is the item's display
    /// name, macros are copied from its nutrition data.
    pub fn assigned(item: &MenuItem) -> Self {
        MealEntry::Assigned {
            item_id: item.id.clone(),
            text: item.name.clone(),
            macros: item.estimate(),
        }
    }

    pub fn macros(&self) -> Macros {
        match self {
            MealEntry::Empty => Macros::ZERO,
            MealEntry::Manual { macros, .. } | MealEntry::Assigned { macros, .. } => *macros,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            MealEntry::Empty => "",
            MealEntry::Manual { text, .. } | MealEntry::Assigned { text, .. } => text,
        }
    }

    /// Catalog id when this entry is a committed selection.
    pub fn assigned_id(&self) -> Option<&str> {
        match self {
            MealEntry::Assigned { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MealEntry::Empty)
    }
}

/// Four meal entries, indexed by slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlan {
    entries: [MealEntry; 4],
}

impl DayPlan {
    pub fn entry(&self, slot: MealSlot) -> &MealEntry {
        &self.entries[slot.index()]
    }

    pub fn entry_mut(&mut self, slot: MealSlot) -> &mut MealEntry {
        &mut self.entries[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &MealEntry)> {
        MealSlot::ALL.iter().map(|slot| (*slot, self.entry(*slot)))
    }

    /// Elementwise sum of the four entries' macros.
    pub fn totals(&self) -> Macros {
        let mut total = Macros::ZERO;
        for entry in &self.entries {
            total.add(&entry.macros());
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::ItemMacros;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: "j1".to_string(),
            name: "Jugo Verde".to_string(),
            description: String::new(),
            price: 68,
            category: Category::Jugos,
            is_popular: true,
            calories: Some(120.0),
            macros: Some(ItemMacros {
                protein: 2.0,
                carbs: 28.0,
                fat: 0.0,
            }),
        }
    }

    #[test]
    fn test_empty_entry_has_zero_macros() {
        let entry = MealEntry::Empty;
        assert!(entry.macros().is_zero());
        assert_eq!(entry.text(), "");
        assert!(entry.assigned_id().is_none());
    }

    #[test]
    fn test_assigned_entry_mirrors_item() {
        let item = sample_item();
        let entry = MealEntry::assigned(&item);

        assert_eq!(entry.assigned_id(), Some("j1"));
        assert_eq!(entry.text(), "Jugo Verde");
        assert_eq!(entry.macros(), item.estimate());
    }

    #[test]
    fn test_day_totals_sum_entries() {
        let mut day = DayPlan::default();
        *day.entry_mut(MealSlot::Breakfast) =
            MealEntry::manual("avena", Macros::new(300.0, 12.0, 50.0, 5.0));
        *day.entry_mut(MealSlot::Dinner) = MealEntry::assigned(&sample_item());

        let totals = day.totals();
        assert_eq!(totals.calories, 420.0);
        assert_eq!(totals.protein, 14.0);
        assert_eq!(totals.carbs, 78.0);
        assert_eq!(totals.fat, 5.0);
    }

    #[test]
    fn test_slot_shares() {
        assert_eq!(MealSlot::Breakfast.ideal_share(), 0.25);
        assert_eq!(MealSlot::Lunch.ideal_share(), 0.35);
        assert_eq!(MealSlot::Snack.ideal_share(), 0.15);
        assert_eq!(MealSlot::Dinner.ideal_share(), 0.25);
    }

    #[test]
    fn test_slot_whitelists() {
        assert!(MealSlot::Lunch.admits(Category::Ensaladas));
        assert!(!MealSlot::Lunch.admits(Category::Smoothies));
        assert!(MealSlot::Snack.admits(Category::Jugos));
        assert!(!MealSlot::Snack.admits(Category::Combos));
    }

    #[test]
    fn test_macros_scale_and_round() {
        let base = Macros::new(165.0, 31.0, 0.0, 3.6);
        let doubled = base.scale(2.0).rounded();
        assert_eq!(doubled, Macros::new(330.0, 62.0, 0.0, 7.0));
    }
}
