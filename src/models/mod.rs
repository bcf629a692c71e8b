mod menu;
mod plan;
mod profile;

pub use menu::{Category, ItemMacros, MenuItem};
pub use plan::{DayPlan, Macros, MealEntry, MealSlot};
pub use profile::{ActivityLevel, Gender, Goal, MacroGoals, UserProfile};
