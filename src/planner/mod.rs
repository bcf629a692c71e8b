pub mod constants;
pub mod estimator;
pub mod goals;
pub mod matcher;

pub use constants::*;
pub use estimator::parse_food_text;
pub use goals::{activity_multiplier, calculate_goals};
pub use matcher::{find_substitute, Match, MatchConfig};
