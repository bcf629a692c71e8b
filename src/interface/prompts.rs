use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Goal, MealSlot, MenuItem, UserProfile};
use crate::state::Catalog;

/// Minimum Jaro-Winkler similarity for a fuzzy dish-name candidate.
const FUZZY_THRESHOLD: f64 = 0.7;

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("invalid number: {}", input)))
}

/// Collect a full biometric profile.
///
/// The one validation the engine pushes to its caller happens here:
/// age, height, and weight must be positive.
pub fn prompt_profile() -> Result<UserProfile> {
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    let gender = if gender_idx == 0 {
        Gender::Male
    } else {
        Gender::Female
    };

    let age: u32 = prompt_number("Age (years)", "30")?;
    let height_cm: f64 = prompt_number("Height (cm)", "175")?;
    let weight_kg: f64 = prompt_number("Weight (kg)", "75")?;

    if age == 0 || height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "age, height, and weight must be positive".to_string(),
        ));
    }

    let activity_idx = Select::new()
        .with_prompt("Activity level")
        .items(&[
            "Sedentary (office work, little exercise)",
            "Moderate (training 3-4 days a week)",
            "Active (intense or daily sport)",
        ])
        .default(1)
        .interact()?;
    let activity = [
        ActivityLevel::Sedentary,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ][activity_idx];

    let goal_idx = Select::new()
        .with_prompt("Main goal")
        .items(&["Lose fat", "Maintain", "Gain muscle"])
        .default(1)
        .interact()?;
    let goal = [Goal::LoseFat, Goal::Maintain, Goal::MuscleGain][goal_idx];

    let meals_per_day: u32 = prompt_number("Meals per day", "4")?;

    Ok(UserProfile {
        gender,
        age,
        height_cm,
        weight_kg,
        activity,
        goal,
        meals_per_day,
    })
}

/// Pick a day of the week; returns the 0-based day index.
pub fn prompt_day() -> Result<usize> {
    let idx = Select::new()
        .with_prompt("Which day?")
        .items(&DAY_NAMES)
        .default(0)
        .interact()?;
    Ok(idx)
}

/// Pick one of the four meal slots.
pub fn prompt_slot() -> Result<MealSlot> {
    let labels: Vec<&str> = MealSlot::ALL.iter().map(|s| s.label()).collect();
    let idx = Select::new()
        .with_prompt("Which meal?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealSlot::ALL[idx])
}

/// Actions available inside the per-day editing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    EditMeal,
    Suggest,
    Swap,
    Assign,
    ClearMeal,
    OptimizeDay,
    ShowWeek,
    ShowBudget,
    SwitchDay,
    EditProfile,
    Finish,
}

pub fn prompt_action() -> Result<SessionAction> {
    const ACTIONS: [(&str, SessionAction); 11] = [
        ("Edit a meal (free text)", SessionAction::EditMeal),
        ("Suggest a dish from the Kiwi menu", SessionAction::Suggest),
        ("Swap a suggested dish", SessionAction::Swap),
        ("Assign a specific dish by name", SessionAction::Assign),
        ("Clear a meal", SessionAction::ClearMeal),
        ("Optimize the whole day", SessionAction::OptimizeDay),
        ("Show the week", SessionAction::ShowWeek),
        ("Show the budget", SessionAction::ShowBudget),
        ("Switch day", SessionAction::SwitchDay),
        ("Re-enter profile (recalculate goals)", SessionAction::EditProfile),
        ("Finish planning", SessionAction::Finish),
    ];

    let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
    let idx = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ACTIONS[idx].1)
}

/// Free-text meal description; empty input clears the slot.
pub fn prompt_meal_text() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Describe the meal (e.g. '2 huevos con jamon'; empty clears)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Rank menu items against a query by name similarity, best first.
pub fn fuzzy_matches<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a MenuItem, f64)> {
    let query = query.to_lowercase();
    let mut candidates: Vec<(&MenuItem, f64)> = catalog
        .items()
        .iter()
        .map(|item| (item, jaro_winkler(&item.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a user-typed dish name against the catalog.
///
/// Exact match first (case-insensitive), then fuzzy candidates above the
/// similarity threshold: a single candidate asks for confirmation, more
/// than one offers a pick list.
pub fn resolve_menu_item<'a>(catalog: &'a Catalog, input: &str) -> Result<Option<&'a MenuItem>> {
    if let Some(item) = catalog.get_by_name(input) {
        return Ok(Some(item));
    }

    let candidates = fuzzy_matches(catalog, input);

    if candidates.is_empty() {
        println!("No matching dish found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(item) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(item, _)| item.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(candidates.get(selection).map(|(item, _)| *item))
    } else {
        Ok(None)
    }
}

/// Prompt for a dish name and resolve it; empty input selects nothing.
pub fn prompt_assign_item<'a>(catalog: &'a Catalog) -> Result<Option<&'a MenuItem>> {
    let input: String = Input::new()
        .with_prompt("Dish name (empty to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    resolve_menu_item(catalog, input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
