use serde::{Deserialize, Serialize};

use crate::models::{MealRecord, Metric};

/// Which way a metric moved between the original and improved meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increased,
    Decreased,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Increased => "↑",
            Direction::Decreased => "↓",
        }
    }
}

/// Percentage change of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionDelta {
    pub metric: Metric,
    pub direction: Direction,
    pub percent: u32,
}

impl NutritionDelta {
    pub const fn new(metric: Metric, direction: Direction, percent: u32) -> Self {
        Self {
            metric,
            direction,
            percent,
        }
    }

    /// True when the change moves the metric the healthy way.
    pub fn is_improvement(&self) -> bool {
        match self.direction {
            Direction::Decreased => self.metric.lower_is_better(),
            Direction::Increased => !self.metric.lower_is_better(),
        }
    }
}

/// One ingredient replaced by a healthier alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSwap {
    pub original: String,
    pub replacement: String,
    pub benefit: String,
}

impl IngredientSwap {
    pub fn new(original: &str, replacement: &str, benefit: &str) -> Self {
        Self {
            original: original.to_string(),
            replacement: replacement.to_string(),
            benefit: benefit.to_string(),
        }
    }
}

/// How the meal is cooked before and after the makeover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingMethod {
    pub original: String,
    pub improved: String,
    pub benefit: String,
}

impl CookingMethod {
    pub fn new(original: &str, improved: &str, benefit: &str) -> Self {
        Self {
            original: original.to_string(),
            improved: improved.to_string(),
            benefit: benefit.to_string(),
        }
    }
}

/// Before/after comparison produced for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub original: MealRecord,
    pub improved: MealRecord,
    pub deltas: Vec<NutritionDelta>,
    pub swaps: Vec<IngredientSwap>,
    pub cooking_method: CookingMethod,
    pub portion_tip: String,
}

impl ComparisonResult {
    /// Delta for a metric, if the comparison reports one.
    pub fn delta(&self, metric: Metric) -> Option<&NutritionDelta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }

    /// Calories saved by switching to the improved meal.
    pub fn calories_saved(&self) -> u32 {
        self.original
            .profile
            .calories
            .saturating_sub(self.improved.profile.calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_improvement_follows_polarity() {
        assert!(NutritionDelta::new(Metric::Fat, Direction::Decreased, 50).is_improvement());
        assert!(NutritionDelta::new(Metric::Fiber, Direction::Increased, 10).is_improvement());
        assert!(!NutritionDelta::new(Metric::Protein, Direction::Decreased, 8).is_improvement());
        assert!(!NutritionDelta::new(Metric::Sugar, Direction::Increased, 0).is_improvement());
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let delta = NutritionDelta::new(Metric::Calories, Direction::Decreased, 41);
        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(
            json,
            r#"{"metric":"Calories","direction":"decreased","percent":41}"#
        );
    }
}
