use clap::Parser;
use rand::thread_rng;

use kiwi_planner_rs::cli::{Cli, Command};
use kiwi_planner_rs::error::Result;
use kiwi_planner_rs::interface::{
    display_budget, display_day, display_goals, display_menu, display_week, fuzzy_matches,
    prompt_action, prompt_assign_item, prompt_day, prompt_meal_text, prompt_profile, prompt_slot,
    prompt_yes_no, SessionAction,
};
use kiwi_planner_rs::models::{ActivityLevel, Gender, Goal, UserProfile};
use kiwi_planner_rs::planner::{calculate_goals, parse_food_text};
use kiwi_planner_rs::state::{export_week_csv, load_menu, save_plan, Catalog, WeeklyPlanner};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.menu {
        Some(path) => Catalog::new(load_menu(path)?),
        None => Catalog::builtin(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog),
        Command::Goals {
            gender,
            age,
            height,
            weight,
            activity,
            goal,
        } => cmd_goals(gender, age, height, weight, activity, goal),
        Command::Estimate { text } => cmd_estimate(&text),
        Command::Menu { search } => cmd_menu(&catalog, search.as_deref()),
    }
}

/// Interactive weekly planning session.
fn cmd_plan(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        println!("The menu is empty; nothing to plan against.");
        return Ok(());
    }

    println!("Loaded {} menu items", catalog.len());
    println!();

    let profile = prompt_profile()?;
    let goals = calculate_goals(&profile);
    display_goals(&goals);

    let mut planner = WeeklyPlanner::new(catalog, goals);
    let mut rng = thread_rng();
    let mut day = prompt_day()?;

    loop {
        display_day(day, &planner);

        match prompt_action()? {
            SessionAction::EditMeal => {
                let slot = prompt_slot()?;
                let text = prompt_meal_text()?;
                planner.edit_slot(day, slot, &text)?;
            }
            SessionAction::Suggest => {
                let slot = prompt_slot()?;
                match planner.suggest_slot(day, slot, &mut rng)? {
                    Some(item) => println!("Suggested: {} (${})", item.name, item.price),
                    None => println!("No suggestion available."),
                }
            }
            SessionAction::Swap => {
                let slot = prompt_slot()?;
                match planner.swap_slot(day, slot, &mut rng)? {
                    Some(item) => println!("Swapped to: {} (${})", item.name, item.price),
                    None => println!("No alternative available."),
                }
            }
            SessionAction::Assign => {
                let slot = prompt_slot()?;
                if let Some(item) = prompt_assign_item(catalog)? {
                    planner.assign_item(day, slot, &item.id)?;
                    println!("Assigned: {} (${})", item.name, item.price);
                }
            }
            SessionAction::ClearMeal => {
                let slot = prompt_slot()?;
                planner.clear_slot(day, slot)?;
            }
            SessionAction::OptimizeDay => {
                let chosen = planner.optimize_day(day, &mut rng)?;
                println!("Assigned {} dishes from the menu.", chosen.len());
            }
            SessionAction::ShowWeek => display_week(&planner),
            SessionAction::ShowBudget => display_budget(&planner),
            SessionAction::SwitchDay => day = prompt_day()?,
            SessionAction::EditProfile => {
                let profile = prompt_profile()?;
                let goals = calculate_goals(&profile);
                planner.set_goals(goals);
                display_goals(&goals);
            }
            SessionAction::Finish => break,
        }
    }

    display_week(&planner);
    display_budget(&planner);

    if prompt_yes_no("Save the plan as JSON?", false)? {
        save_plan("kiwi_plan.json", &planner)?;
        println!("Plan saved to kiwi_plan.json");
    }

    if prompt_yes_no("Export the weekly report as CSV?", false)? {
        export_week_csv("kiwi_week.csv", &planner)?;
        println!("Report saved to kiwi_week.csv");
    }

    Ok(())
}

/// One-shot goal calculation from flags.
fn cmd_goals(
    gender: Gender,
    age: u32,
    height: f64,
    weight: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> Result<()> {
    let profile = UserProfile {
        gender,
        age,
        height_cm: height,
        weight_kg: weight,
        activity,
        goal,
        meals_per_day: 4,
    };

    println!("Goal: {}", profile.goal.label());
    display_goals(&calculate_goals(&profile));
    Ok(())
}

/// One-shot free-text estimation.
fn cmd_estimate(text: &str) -> Result<()> {
    let estimate = parse_food_text(text);

    println!("Estimate for '{}':", text);
    println!("  Calories: {:.0} kcal", estimate.calories);
    println!("  Protein:  {:.0} g", estimate.protein);
    println!("  Carbs:    {:.0} g", estimate.carbs);
    println!("  Fat:      {:.0} g", estimate.fat);
    Ok(())
}

/// List or search the menu.
fn cmd_menu(catalog: &Catalog, search: Option<&str>) -> Result<()> {
    match search {
        Some(query) => {
            let matches: Vec<&_> = fuzzy_matches(catalog, query)
                .into_iter()
                .map(|(item, _)| item)
                .collect();
            display_menu(&matches, &format!("Matches for '{}'", query));
        }
        None => {
            let items: Vec<&_> = catalog.items().iter().collect();
            display_menu(&items, "Kiwi Natural menu");
        }
    }
    Ok(())
}
