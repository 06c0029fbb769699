use std::time::Duration;

use crate::models::NutrientProfile;

// ─────────────────────────────────────────────────────────────────────────────
// Threshold rules
// ─────────────────────────────────────────────────────────────────────────────

/// Calories above this are cut hard.
pub const CALORIES_MAX: u32 = 800;

/// Calories above this (and at most CALORIES_MAX) are trimmed.
pub const CALORIES_TARGET: u32 = 500;

/// Multiplier for meals above CALORIES_MAX (35% reduction).
pub const CALORIES_HARD_CUT: f64 = 0.65;

/// Multiplier for meals between CALORIES_TARGET and CALORIES_MAX.
pub const CALORIES_SOFT_CUT: f64 = 0.8;

/// Protein below this is replaced with PROTEIN_TARGET.
pub const PROTEIN_MIN: u32 = 20;

/// Protein below this (and at least PROTEIN_MIN) is boosted.
pub const PROTEIN_TARGET: u32 = 30;

pub const PROTEIN_BOOST: f64 = 1.3;

/// Total fat above this is halved.
pub const FAT_MAX: u32 = 25;

pub const FAT_CUT: f64 = 0.5;

/// Carbs above this are swapped for lower-carb alternatives.
pub const CARBS_MAX: u32 = 70;

pub const CARBS_CUT: f64 = 0.65;

/// Fiber below this is replaced with FIBER_TARGET.
pub const FIBER_MIN: u32 = 5;

pub const FIBER_TARGET: u32 = 8;

/// Sugar above this is halved.
pub const SUGAR_MAX: u32 = 12;

pub const SUGAR_CUT: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Fallback synthesis
// ─────────────────────────────────────────────────────────────────────────────

/// Profile assumed for a meal that matches no known key.
pub const DEFAULT_PROFILE: NutrientProfile = NutrientProfile::new(600, 20, 65, 28, 3, 10);

/// Name of the original meal when the query is blank.
pub const DEFAULT_MEAL_NAME: &str = "Your Meal";

/// Suffix of the improved meal name when the query is blank.
pub const DEFAULT_IMPROVED_SUFFIX: &str = "Meal";

/// Concerns used when no rule produced one.
pub const GENERIC_CONCERNS: [&str; 3] = ["Processed ingredients", "High sodium", "Low nutrients"];

pub const UNHEALTHY_IMAGE: &str =
    "https://images.unsplash.com/photo-1766589221522-d5beae155124?w=1080";

pub const HEALTHY_BOWL_IMAGE: &str =
    "https://images.unsplash.com/photo-1661257711676-79a0fc533569?w=1080";

pub const FALLBACK_PORTION_TIP: &str = "Add a colorful salad to increase nutrients and satiety";

// ─────────────────────────────────────────────────────────────────────────────
// Calling layer
// ─────────────────────────────────────────────────────────────────────────────

/// Artificial pause before an analysis is shown.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2500);
