use crate::models::{ActivityLevel, Gender, Goal, MacroGoals, UserProfile};
use crate::planner::constants::*;

/// TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::Moderate => MODERATE_MULT,
        ActivityLevel::Active => ACTIVE_MULT,
    }
}

/// Derive daily macro targets from a biometric profile.
///
/// Mifflin-St Jeor BMR, scaled by activity, shifted by the goal, then
/// split 30/30/40 (35/30/35 for muscle gain) into grams at 4/9/4 kcal
/// per gram. Each output is rounded independently; rounding error is
/// accepted, not redistributed.
pub fn calculate_goals(profile: &UserProfile) -> MacroGoals {
    let mut bmr =
        10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
    bmr += match profile.gender {
        Gender::Male => MALE_BMR_OFFSET,
        Gender::Female => FEMALE_BMR_OFFSET,
    };

    let mut tdee = bmr * activity_multiplier(profile.activity);

    tdee += match profile.goal {
        Goal::LoseFat => -LOSE_FAT_DEFICIT,
        Goal::MuscleGain => MUSCLE_GAIN_SURPLUS,
        Goal::Maintain => 0.0,
    };

    let protein_ratio = match profile.goal {
        Goal::MuscleGain => PROTEIN_RATIO_MUSCLE_GAIN,
        _ => PROTEIN_RATIO_DEFAULT,
    };
    let carb_ratio = 1.0 - protein_ratio - FAT_RATIO;

    MacroGoals {
        calories: tdee.round() as i32,
        protein: (tdee * protein_ratio / KCAL_PER_G_PROTEIN).round() as i32,
        carbs: (tdee * carb_ratio / KCAL_PER_G_CARB).round() as i32,
        fat: (tdee * FAT_RATIO / KCAL_PER_G_FAT).round() as i32,
    }
}
