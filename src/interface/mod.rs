pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_matches, prompt_action, prompt_assign_item, prompt_day, prompt_meal_text,
    prompt_profile, prompt_slot, prompt_yes_no, resolve_menu_item, SessionAction,
};
pub use render::{display_budget, display_day, display_goals, display_menu, display_week};
