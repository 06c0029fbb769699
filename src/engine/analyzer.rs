use tracing::debug;

use crate::engine::constants::*;
use crate::engine::known_meals;
use crate::engine::rules::apply_rules;
use crate::models::{
    ComparisonResult, CookingMethod, Direction, IngredientSwap, MealRecord, Metric,
    NutrientProfile, NutritionDelta,
};

/// Anything that can turn a meal query into a comparison.
pub trait MealAnalyzer {
    fn analyze(&self, query: &str) -> ComparisonResult;
}

/// Keyword lookup with rule-based fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupEngine;

impl MealAnalyzer for LookupEngine {
    fn analyze(&self, query: &str) -> ComparisonResult {
        analyze(query)
    }
}

/// Analyze a free-text meal description.
///
/// Never fails: a query that matches no known meal (including an empty one)
/// gets a comparison synthesised from the default profile.
pub fn analyze(query: &str) -> ComparisonResult {
    if let Some((key, result)) = known_meals::lookup(query) {
        debug!(query, key, "matched known meal");
        return result.clone();
    }

    debug!(query, "no known meal matched, synthesising comparison");
    synthesize(query)
}

fn synthesize(query: &str) -> ComparisonResult {
    let query = query.trim();
    let outcome = apply_rules(&DEFAULT_PROFILE);

    let concerns = outcome.concerns();
    let concerns = if concerns.is_empty() {
        GENERIC_CONCERNS.to_vec()
    } else {
        concerns
    };

    let (original_name, improved_name) = if query.is_empty() {
        (
            DEFAULT_MEAL_NAME.to_string(),
            format!("Healthier {}", DEFAULT_IMPROVED_SUFFIX),
        )
    } else {
        (query.to_string(), format!("Healthier {}", query))
    };

    let original = MealRecord::new(original_name, DEFAULT_PROFILE)
        .with_image(UNHEALTHY_IMAGE)
        .with_concerns(concerns);
    let improved = MealRecord::new(improved_name, outcome.improved).with_image(HEALTHY_BOWL_IMAGE);

    ComparisonResult {
        deltas: compute_deltas(&original.profile, &improved.profile),
        original,
        improved,
        swaps: vec![
            IngredientSwap::new(
                "Processed ingredients",
                "Whole food alternatives",
                "More nutrients, less additives",
            ),
            IngredientSwap::new("Refined grains", "Whole grains", "Better blood sugar control"),
            IngredientSwap::new(
                "Heavy sauces",
                "Herbs and spices",
                "Flavor without extra calories",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Fried or processed",
            "Grilled or baked",
            "Reduces unhealthy fats",
        ),
        portion_tip: FALLBACK_PORTION_TIP.to_string(),
    }
}

/// Percentage change from `original` to `improved`, rounded.
///
/// A zero original reports 0 when nothing changed and 100 otherwise.
pub fn percent_change(original: u32, improved: u32) -> u32 {
    if original == 0 {
        return if improved == 0 { 0 } else { 100 };
    }
    let diff = original.abs_diff(improved) as f64;
    (diff / original as f64 * 100.0).round() as u32
}

/// Direction of a change as reported for `metric`.
///
/// An unchanged value reports the direction that is not an improvement.
pub fn direction_for(metric: Metric, original: u32, improved: u32) -> Direction {
    if metric.lower_is_better() {
        if improved < original {
            Direction::Decreased
        } else {
            Direction::Increased
        }
    } else if improved > original {
        Direction::Increased
    } else {
        Direction::Decreased
    }
}

/// One delta per profile metric, in profile order.
pub fn compute_deltas(original: &NutrientProfile, improved: &NutrientProfile) -> Vec<NutritionDelta> {
    Metric::PROFILE
        .iter()
        .filter_map(|&metric| {
            let before = original.get(metric)?;
            let after = improved.get(metric)?;
            Some(NutritionDelta::new(
                metric,
                direction_for(metric, before, after),
                percent_change(before, after),
            ))
        })
        .collect()
}
