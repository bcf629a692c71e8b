use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Macros, MealSlot, MenuItem};
use crate::planner::constants::{
    DEFAULT_CALORIE_WEIGHT, DEFAULT_CARB_WEIGHT, DEFAULT_FAT_WEIGHT, DEFAULT_PROTEIN_WEIGHT,
    DEFAULT_TOP_PICKS,
};
use crate::state::Catalog;

/// Scoring weights and selection width for the substitute matcher.
///
/// Lower score = closer match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub protein_weight: f64,
    pub calorie_weight: f64,
    pub carb_weight: f64,
    pub fat_weight: f64,

    /// How many of the best-scoring candidates the random pick draws
    /// from.
    pub top_picks: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            protein_weight: DEFAULT_PROTEIN_WEIGHT,
            calorie_weight: DEFAULT_CALORIE_WEIGHT,
            carb_weight: DEFAULT_CARB_WEIGHT,
            fat_weight: DEFAULT_FAT_WEIGHT,
            top_picks: DEFAULT_TOP_PICKS,
        }
    }
}

/// A matched catalog item with its weighted distance to the target.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub item: &'a MenuItem,
    pub score: f64,
}

/// Weighted absolute distance between an item and the target macros.
fn match_score(item: &MenuItem, target: &Macros, config: &MatchConfig) -> f64 {
    let Some(macros) = item.macros else {
        return f64::INFINITY;
    };

    config.protein_weight * (macros.protein - target.protein).abs()
        + config.calorie_weight * (item.calories_or_zero() - target.calories).abs()
        + config.carb_weight * (macros.carbs - target.carbs).abs()
        + config.fat_weight * (macros.fat - target.fat).abs()
}

/// Find the closest menu item to the target for a meal slot.
///
/// Candidates are items with macro data in one of the slot's admissible
/// categories, ranked by weighted distance. Excluded ids are dropped
/// unless that empties the pool, in which case the exclusion is ignored
/// rather than failing. The final pick is uniform among the best
/// `top_picks` so repeated calls stay varied.
///
/// Returns `None` only for an empty catalog. When no item is eligible
/// for the slot at all, the catalog's first item is returned with an
/// infinite score; callers can treat that as a "no good match" signal.
pub fn find_substitute<'a, R: Rng>(
    catalog: &'a Catalog,
    target: &Macros,
    slot: MealSlot,
    exclude_ids: &[String],
    config: &MatchConfig,
    rng: &mut R,
) -> Option<Match<'a>> {
    let mut candidates: Vec<Match<'a>> = catalog
        .items()
        .iter()
        .filter(|item| item.matchable() && slot.admits(item.category))
        .map(|item| Match {
            score: match_score(item, target, config),
            item,
        })
        .collect();

    if candidates.is_empty() {
        return catalog.items().first().map(|item| Match {
            item,
            score: f64::INFINITY,
        });
    }

    candidates.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut remaining: Vec<Match<'a>> = candidates
        .iter()
        .filter(|c| !exclude_ids.contains(&c.item.id))
        .cloned()
        .collect();
    if remaining.is_empty() {
        remaining = candidates;
    }

    let top = &remaining[..remaining.len().min(config.top_picks.max(1))];
    top.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::models::{Category, ItemMacros};

    fn item(id: &str, category: Category, calories: f64, p: f64, c: f64, f: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 100,
            category,
            is_popular: false,
            calories: Some(calories),
            macros: Some(ItemMacros {
                protein: p,
                carbs: c,
                fat: f,
            }),
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            item("salad-1", Category::Ensaladas, 320.0, 8.0, 25.0, 22.0),
            item("salad-2", Category::Ensaladas, 450.0, 45.0, 20.0, 20.0),
            item("combo-1", Category::Combos, 650.0, 35.0, 65.0, 25.0),
            item("sandwich-1", Category::Emparedados, 420.0, 35.0, 45.0, 10.0),
            item("juice-1", Category::Jugos, 120.0, 2.0, 28.0, 0.0),
            item("smoothie-1", Category::Smoothies, 280.0, 8.0, 35.0, 12.0),
        ])
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_respects_slot_whitelist() {
        let catalog = test_catalog();
        let config = MatchConfig::default();
        let target = Macros::new(400.0, 30.0, 40.0, 15.0);
        let mut rng = rng();

        for _ in 0..50 {
            let matched =
                find_substitute(&catalog, &target, MealSlot::Lunch, &[], &config, &mut rng)
                    .unwrap();
            assert!(MealSlot::Lunch.admits(matched.item.category));
        }
    }

    #[test]
    fn test_exact_target_wins_with_single_pick() {
        let catalog = test_catalog();
        let config = MatchConfig {
            top_picks: 1,
            ..Default::default()
        };
        // Exact macros of salad-2: distance zero, deterministic winner.
        let target = Macros::new(450.0, 45.0, 20.0, 20.0);

        let matched =
            find_substitute(&catalog, &target, MealSlot::Lunch, &[], &config, &mut rng()).unwrap();
        assert_eq!(matched.item.id, "salad-2");
        assert_eq!(matched.score, 0.0);
    }

    #[test]
    fn test_exclusion_skips_current_item() {
        let catalog = test_catalog();
        let config = MatchConfig {
            top_picks: 1,
            ..Default::default()
        };
        let target = Macros::new(450.0, 45.0, 20.0, 20.0);

        let matched = find_substitute(
            &catalog,
            &target,
            MealSlot::Lunch,
            &["salad-2".to_string()],
            &config,
            &mut rng(),
        )
        .unwrap();
        assert_ne!(matched.item.id, "salad-2");
    }

    #[test]
    fn test_exhausted_exclusion_falls_back_to_full_pool() {
        let catalog = test_catalog();
        let config = MatchConfig::default();
        let target = Macros::new(400.0, 30.0, 40.0, 15.0);
        let all_ids: Vec<String> = catalog.items().iter().map(|i| i.id.clone()).collect();

        let matched = find_substitute(
            &catalog,
            &target,
            MealSlot::Lunch,
            &all_ids,
            &config,
            &mut rng(),
        );
        assert!(matched.is_some());
    }

    #[test]
    fn test_no_eligible_candidate_returns_first_item_fallback() {
        // Snack admits juices, smoothies, and desserts only.
        let catalog = Catalog::new(vec![item(
            "salad-1",
            Category::Ensaladas,
            320.0,
            8.0,
            25.0,
            22.0,
        )]);
        let config = MatchConfig::default();
        let target = Macros::new(200.0, 10.0, 20.0, 5.0);

        let matched =
            find_substitute(&catalog, &target, MealSlot::Snack, &[], &config, &mut rng()).unwrap();
        assert_eq!(matched.item.id, "salad-1");
        assert!(matched.score.is_infinite());
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let catalog = Catalog::new(Vec::new());
        let config = MatchConfig::default();
        let target = Macros::new(200.0, 10.0, 20.0, 5.0);

        assert!(
            find_substitute(&catalog, &target, MealSlot::Lunch, &[], &config, &mut rng()).is_none()
        );
    }

    #[test]
    fn test_items_without_macros_are_never_candidates() {
        let mut bare = item("bare", Category::Ensaladas, 300.0, 0.0, 0.0, 0.0);
        bare.macros = None;
        let catalog = Catalog::new(vec![
            bare,
            item("salad-1", Category::Ensaladas, 320.0, 8.0, 25.0, 22.0),
        ]);
        let config = MatchConfig::default();
        let target = Macros::new(300.0, 5.0, 20.0, 20.0);
        let mut rng = rng();

        for _ in 0..20 {
            let matched =
                find_substitute(&catalog, &target, MealSlot::Lunch, &[], &config, &mut rng)
                    .unwrap();
            assert_eq!(matched.item.id, "salad-1");
        }
    }

    #[test]
    fn test_top_picks_sampling_varies() {
        let catalog = test_catalog();
        let config = MatchConfig::default();
        let target = Macros::new(400.0, 30.0, 40.0, 15.0);

        let mut seen = std::collections::HashSet::new();
        let mut sampler = StdRng::seed_from_u64(42);
        for _ in 0..60 {
            let matched =
                find_substitute(&catalog, &target, MealSlot::Lunch, &[], &config, &mut sampler)
                    .unwrap();
            seen.insert(matched.item.id.clone());
        }
        // Three eligible lunch items, top-3 sampling: all should appear.
        assert_eq!(seen.len(), 3);
    }
}
