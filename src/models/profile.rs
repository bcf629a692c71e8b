use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::plan::Macros;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,

    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Office work, little exercise.
    Sedentary,

    /// Training 3-4 days a week.
    Moderate,

    /// Intense or daily sport.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    MuscleGain,
    Maintain,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::LoseFat => "lose fat",
            Goal::MuscleGain => "muscle gain",
            Goal::Maintain => "maintain",
        }
    }
}

/// Biometric profile consumed by the goal calculator.
///
/// Numeric range validation is the caller's job; the calculator does not
/// guard against zero or negative inputs and will happily propagate
/// nonsensical targets derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,

    /// Informational only; the planner always works with four fixed slots.
    pub meals_per_day: u32,
}

/// Daily targets derived from a profile.
///
/// Recomputed wholesale whenever the profile changes, never edited field
/// by field. Fields are signed so out-of-range profiles propagate instead
/// of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGoals {
    pub calories: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
}

impl MacroGoals {
    pub fn as_macros(&self) -> Macros {
        Macros::new(
            self.calories as f64,
            self.protein as f64,
            self.carbs as f64,
            self.fat as f64,
        )
    }

    /// Target quadruple for one slot's share of the day.
    pub fn share(&self, ratio: f64) -> Macros {
        self.as_macros().scale(ratio)
    }
}
