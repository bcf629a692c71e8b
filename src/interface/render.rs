use crate::models::{MacroGoals, MenuItem};
use crate::state::{MacroProgress, WeeklyPlanner};

use crate::interface::prompts::DAY_NAMES;

/// Width of the text progress bars, in cells.
const BAR_WIDTH: usize = 20;

/// Display the calculated daily targets.
pub fn display_goals(goals: &MacroGoals) {
    println!();
    println!("=== Daily targets ===");
    println!("Calories: {} kcal", goals.calories);
    println!("Protein:  {} g", goals.protein);
    println!("Carbs:    {} g", goals.carbs);
    println!("Fat:      {} g", goals.fat);
    println!();
}

fn bar(progress: &MacroProgress) -> String {
    let pct = progress.percent().clamp(0.0, 100.0);
    let filled = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn progress_line(name: &str, progress: &MacroProgress, unit: &str) {
    println!(
        "  {:<8} {:>5.0}{} / {:>5.0}{} {} {}",
        name,
        progress.total,
        unit,
        progress.target,
        unit,
        bar(progress),
        progress.band.label()
    );
}

/// Display one day's slots and macro progress.
pub fn display_day(day: usize, planner: &WeeklyPlanner) {
    let Ok(plan) = planner.day(day) else {
        return;
    };
    let Ok(progress) = planner.day_progress(day) else {
        return;
    };

    println!();
    println!("=== Day {} ({}) ===", day + 1, DAY_NAMES[day]);
    println!();

    for (slot, entry) in plan.iter() {
        let text = if entry.is_empty() {
            "(empty)"
        } else {
            entry.text()
        };
        let kiwi_tag = if entry.assigned_id().is_some() {
            "  [Kiwi]"
        } else {
            ""
        };

        println!(
            "  {:<10} {:<40} {:>5.0} kcal{}",
            slot.label(),
            text,
            entry.macros().calories,
            kiwi_tag
        );
    }

    println!();
    progress_line("calories", &progress.calories, " kcal");
    progress_line("protein", &progress.protein, " g");
    progress_line("carbs", &progress.carbs, " g");
    progress_line("fat", &progress.fat, " g");
    println!();
}

/// Display a one-line-per-day overview of the week.
pub fn display_week(planner: &WeeklyPlanner) {
    println!();
    println!("=== Weekly plan ===");
    println!();

    for (day, plan) in planner.days().iter().enumerate() {
        let totals = plan.totals();
        let assigned = plan
            .iter()
            .filter(|(_, e)| e.assigned_id().is_some())
            .count();
        let filled = plan.iter().filter(|(_, e)| !e.is_empty()).count();

        println!(
            "  Day {} ({:<9}) {:>5.0} kcal  {}/4 meals, {} from the menu",
            day + 1,
            DAY_NAMES[day],
            totals.calories,
            filled,
            assigned
        );
    }

    let week = planner.weekly_totals();
    println!();
    println!(
        "  Week: {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
        week.calories, week.protein, week.carbs, week.fat
    );
    println!();
}

/// Display the weekly budget: every assigned dish with its price, the
/// aggregated order list, and the weekly total.
pub fn display_budget(planner: &WeeklyPlanner) {
    let planned = planner.planned_items();

    if planned.is_empty() {
        println!("No menu dishes assigned yet; the budget is empty.");
        return;
    }

    println!();
    println!("=== Weekly budget ===");
    println!();

    let max_name_len = planned
        .iter()
        .map(|p| p.item.name.len())
        .max()
        .unwrap_or(10);

    for p in &planned {
        println!(
            "  Day {} {:<10} {:<width$} ${}",
            p.day + 1,
            p.slot.label(),
            p.item.name,
            p.item.price,
            width = max_name_len
        );
    }

    println!();
    println!("--- Order list ---");
    for (item, qty) in planner.cart_quantities() {
        println!("  {}x {} (${} each)", qty, item.name, item.price);
    }

    println!();
    println!("Total dishes: {}", planned.len());
    println!("Weekly total: ${}", planner.weekly_price_total());
    println!();
}

/// Display a list of menu items with their details.
pub fn display_menu(items: &[&MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        let popular = if item.is_popular { " *" } else { "" };
        println!(
            "  [{}] {} - ${} ({}){}",
            item.id,
            item.name,
            item.price,
            item.category.label(),
            popular
        );

        let macros = item.estimate();
        println!(
            "      {:.0} kcal, P:{:.0} C:{:.0} F:{:.0}",
            macros.calories, macros.protein, macros.carbs, macros.fat
        );

        if !item.description.is_empty() {
            println!("      {}", item.description);
        }
    }

    println!();
}
