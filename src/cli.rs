use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, Gender, Goal};

/// Kiwi Natural nutrition planner: macro goals, meal estimation, and
/// smart menu substitution.
#[derive(Parser, Debug)]
#[command(name = "kiwi_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a menu JSON file (defaults to the builtin Kiwi menu).
    #[arg(short, long)]
    pub menu: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive weekly planning session.
    Plan,

    /// Calculate daily macro goals from profile flags.
    Goals {
        #[arg(long, value_enum)]
        gender: Gender,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Height in centimeters.
        #[arg(long)]
        height: f64,

        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,

        #[arg(long, value_enum, default_value = "moderate")]
        activity: ActivityLevel,

        #[arg(long, value_enum, default_value = "maintain")]
        goal: Goal,
    },

    /// Estimate macros for a free-text meal description.
    Estimate {
        /// Meal description, e.g. "200g pollo con arroz".
        text: String,
    },

    /// List the menu, optionally fuzzy-searching by name.
    Menu {
        /// Dish name to search for.
        #[arg(short, long)]
        search: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
