mod catalog;
mod manager;
mod persistence;

pub use catalog::Catalog;
pub use manager::{DayProgress, MacroProgress, PlannedItem, ProgressBand, WeeklyPlanner};
pub use persistence::{export_week_csv, load_menu, save_plan};
