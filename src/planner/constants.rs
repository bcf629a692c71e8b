use crate::models::Macros;

// ─────────────────────────────────────────────────────────────────────────────
// Goal calculator (Mifflin-St Jeor)
// ─────────────────────────────────────────────────────────────────────────────

/// BMR offset added for men.
pub const MALE_BMR_OFFSET: f64 = 5.0;

/// BMR offset added for women.
pub const FEMALE_BMR_OFFSET: f64 = -161.0;

/// TDEE multipliers per activity level.
pub const SEDENTARY_MULT: f64 = 1.20;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;

/// Daily calorie deficit applied for the fat-loss goal.
pub const LOSE_FAT_DEFICIT: f64 = 500.0;

/// Daily calorie surplus applied for the muscle-gain goal.
pub const MUSCLE_GAIN_SURPLUS: f64 = 300.0;

/// Protein share of calories; raised for muscle gain.
pub const PROTEIN_RATIO_DEFAULT: f64 = 0.30;
pub const PROTEIN_RATIO_MUSCLE_GAIN: f64 = 0.35;

/// Fat share of calories. Carbs take whatever remains.
pub const FAT_RATIO: f64 = 0.30;

/// Energy density per gram of macro.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Free-text estimator
// ─────────────────────────────────────────────────────────────────────────────

/// Keyword values are per this many grams; a text without a usable
/// quantity is read as one reference portion.
pub const REFERENCE_PORTION_GRAMS: f64 = 100.0;

/// Numbers at or below this read as unit counts ("2 huevos"), not grams.
pub const GRAM_COUNT_THRESHOLD: f64 = 10.0;

/// Texts longer than this with no keyword match get the generic estimate.
pub const FALLBACK_MIN_TEXT_LEN: usize = 3;

/// Estimate used when a non-trivial entry matches no keyword.
pub const GENERIC_MEAL_ESTIMATE: Macros = Macros::new(350.0, 20.0, 30.0, 12.0);

/// Keyword lookup table, values per 100 g. Keys are matched as substrings
/// of the case-folded text; every matching row contributes.
pub const FOOD_KEYWORDS: &[(&str, Macros)] = &[
    ("pollo", Macros::new(165.0, 31.0, 0.0, 3.6)),
    ("pechuga", Macros::new(165.0, 31.0, 0.0, 3.6)),
    ("huevo", Macros::new(155.0, 13.0, 1.1, 11.0)),
    ("claras", Macros::new(52.0, 11.0, 0.7, 0.2)),
    ("atun", Macros::new(130.0, 28.0, 0.0, 1.0)),
    ("salmon", Macros::new(208.0, 20.0, 0.0, 13.0)),
    ("arroz", Macros::new(130.0, 2.7, 28.0, 0.3)),
    ("avena", Macros::new(389.0, 16.9, 66.0, 6.9)),
    ("tortilla", Macros::new(218.0, 5.7, 45.0, 2.9)),
    ("pan", Macros::new(265.0, 9.0, 49.0, 3.2)),
    ("pasta", Macros::new(131.0, 5.0, 25.0, 1.1)),
    ("manzana", Macros::new(52.0, 0.3, 14.0, 0.2)),
    ("platano", Macros::new(89.0, 1.1, 23.0, 0.3)),
    ("aguacate", Macros::new(160.0, 2.0, 9.0, 15.0)),
    ("nuez", Macros::new(654.0, 15.0, 14.0, 65.0)),
    ("yogurt", Macros::new(59.0, 10.0, 3.6, 0.4)),
];

// ─────────────────────────────────────────────────────────────────────────────
// Substitute matcher
// ─────────────────────────────────────────────────────────────────────────────

/// Distance weights: protein heaviest, calories next, carbs and fat
/// least.
pub const DEFAULT_PROTEIN_WEIGHT: f64 = 2.0;
pub const DEFAULT_CALORIE_WEIGHT: f64 = 1.0;
pub const DEFAULT_CARB_WEIGHT: f64 = 0.8;
pub const DEFAULT_FAT_WEIGHT: f64 = 0.8;

/// Width of the random pick among the best-scoring candidates.
pub const DEFAULT_TOP_PICKS: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Plan aggregation
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_WEEK: usize = 7;

/// Day totals below this percentage of the goal read as under target.
pub const UNDER_TARGET_PCT: f64 = 85.0;

/// Day totals above this percentage of the goal read as over target.
pub const OVER_TARGET_PCT: f64 = 115.0;
