use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, MacroGoals, MenuItem};
use crate::state::WeeklyPlanner;

/// Load a menu from a JSON file.
///
/// Rows must pass basic validation; duplicate ids are resolved later by
/// `Catalog::new` (last occurrence wins).
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;

    if let Some(bad) = items.iter().find(|item| !item.is_valid()) {
        return Err(PlannerError::InvalidInput(format!(
            "menu item '{}' has invalid data",
            bad.id
        )));
    }

    Ok(items)
}

#[derive(Serialize)]
struct PlanSnapshot<'a> {
    goals: MacroGoals,
    days: &'a [DayPlan],
}

/// Write the current plan (goals plus all seven days) as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, planner: &WeeklyPlanner) -> Result<()> {
    let snapshot = PlanSnapshot {
        goals: planner.goals(),
        days: planner.days(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Export the weekly report as CSV: one row per slot with the entry's
/// macros and, for assigned slots, the menu price; a trailing total row
/// carries the weekly sums.
pub fn export_week_csv<P: AsRef<Path>>(path: P, planner: &WeeklyPlanner) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "day", "slot", "entry", "calories", "protein", "carbs", "fat", "price",
    ])?;

    for (day, plan) in planner.days().iter().enumerate() {
        for (slot, entry) in plan.iter() {
            let macros = entry.macros();
            let price = entry
                .assigned_id()
                .and_then(|id| planner.catalog().get(id))
                .map(|item| item.price.to_string())
                .unwrap_or_default();

            writer.write_record([
                (day + 1).to_string(),
                slot.label().to_string(),
                entry.text().to_string(),
                format!("{:.0}", macros.calories),
                format!("{:.0}", macros.protein),
                format!("{:.0}", macros.carbs),
                format!("{:.0}", macros.fat),
                price,
            ])?;
        }
    }

    let totals = planner.weekly_totals();
    writer.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        format!("{:.0}", totals.calories),
        format!("{:.0}", totals.protein),
        format!("{:.0}", totals.carbs),
        format!("{:.0}", totals.fat),
        planner.weekly_price_total().to_string(),
    ])?;

    writer.flush()?;
    Ok(())
}
