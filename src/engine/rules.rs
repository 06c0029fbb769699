use std::fmt;

use serde::Serialize;

use crate::engine::constants::*;
use crate::models::NutrientProfile;

/// Identifier of a rule that fired with a mandatory change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    CalorieReduction,
    ProteinBoost,
    FatReduction,
    CarbSwap,
    FiberBoost,
    SugarReduction,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::CalorieReduction => "calorie_reduction",
            RuleId::ProteinBoost => "protein_boost",
            RuleId::FatReduction => "fat_reduction",
            RuleId::CarbSwap => "carb_swap",
            RuleId::FiberBoost => "fiber_boost",
            RuleId::SugarReduction => "sugar_reduction",
        }
    }

    /// Human-readable concern attached to the original meal.
    ///
    /// Carb swaps are suggested silently.
    pub fn concern(self) -> Option<&'static str> {
        match self {
            RuleId::CalorieReduction => Some("High calories (needs reduction)"),
            RuleId::ProteinBoost => Some("Low protein (needs boost)"),
            RuleId::FatReduction => Some("High fat (needs reduction)"),
            RuleId::CarbSwap => None,
            RuleId::FiberBoost => Some("Low fiber (needs increase)"),
            RuleId::SugarReduction => Some("High sugar (needs reduction)"),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running the threshold rules over a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub improved: NutrientProfile,
    /// Rules that fired, in evaluation order.
    pub triggered: Vec<RuleId>,
}

impl RuleOutcome {
    pub fn concerns(&self) -> Vec<&'static str> {
        self.triggered.iter().filter_map(|r| r.concern()).collect()
    }
}

/// Scale and round half away from zero.
fn scale(value: u32, factor: f64) -> u32 {
    (value as f64 * factor).round() as u32
}

/// Derive an improved profile from `original`.
///
/// Each metric is judged on its own; rules run once with no feedback.
pub fn apply_rules(original: &NutrientProfile) -> RuleOutcome {
    let mut triggered = Vec::new();

    let calories = if original.calories > CALORIES_MAX {
        triggered.push(RuleId::CalorieReduction);
        scale(original.calories, CALORIES_HARD_CUT)
    } else if original.calories > CALORIES_TARGET {
        scale(original.calories, CALORIES_SOFT_CUT)
    } else {
        original.calories
    };

    let protein = if original.protein < PROTEIN_MIN {
        triggered.push(RuleId::ProteinBoost);
        PROTEIN_TARGET
    } else if original.protein < PROTEIN_TARGET {
        scale(original.protein, PROTEIN_BOOST)
    } else {
        original.protein
    };

    let fat = if original.fat > FAT_MAX {
        triggered.push(RuleId::FatReduction);
        scale(original.fat, FAT_CUT)
    } else {
        original.fat
    };

    let carbs = if original.carbs > CARBS_MAX {
        triggered.push(RuleId::CarbSwap);
        scale(original.carbs, CARBS_CUT)
    } else {
        original.carbs
    };

    let fiber = if original.fiber < FIBER_MIN {
        triggered.push(RuleId::FiberBoost);
        FIBER_TARGET
    } else {
        original.fiber
    };

    let sugar = if original.sugar > SUGAR_MAX {
        triggered.push(RuleId::SugarReduction);
        scale(original.sugar, SUGAR_CUT)
    } else {
        original.sugar
    };

    RuleOutcome {
        improved: NutrientProfile {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
        },
        triggered,
    }
}
