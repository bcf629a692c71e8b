use crate::models::Macros;
use crate::planner::constants::{
    FALLBACK_MIN_TEXT_LEN, FOOD_KEYWORDS, GENERIC_MEAL_ESTIMATE, GRAM_COUNT_THRESHOLD,
    REFERENCE_PORTION_GRAMS,
};

/// Estimate macros for a free-text meal description.
///
/// Every keyword-table row whose key appears in the case-folded text
/// contributes its per-100 g values, scaled by the portion multiplier.
/// A non-trivial text that matches nothing gets the generic-meal
/// estimate; empty or very short unmatched text reads as zero. Never
/// fails.
pub fn parse_food_text(text: &str) -> Macros {
    let folded = text.to_lowercase();
    let multiplier = portion_multiplier(&folded);

    let mut total = Macros::ZERO;
    let mut found = false;
    for (keyword, per_portion) in FOOD_KEYWORDS {
        if folded.contains(keyword) {
            found = true;
            total.add(&per_portion.scale(multiplier));
        }
    }

    if !found {
        if text.chars().count() > FALLBACK_MIN_TEXT_LEN {
            return GENERIC_MEAL_ESTIMATE;
        }
        return Macros::ZERO;
    }

    total.rounded()
}

/// Portion multiplier from the first run of digits in the text.
///
/// Values above the unit-count threshold read as grams against the 100 g
/// reference portion; smaller values ("2 huevos") leave the multiplier
/// at one portion.
fn portion_multiplier(folded: &str) -> f64 {
    match first_number(folded) {
        Some(qty) if qty > GRAM_COUNT_THRESHOLD => qty / REFERENCE_PORTION_GRAMS,
        _ => 1.0,
    }
}

fn first_number(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
