pub mod analyzer;
pub mod constants;
pub mod delay;
pub mod known_meals;
pub mod rules;

pub use analyzer::{analyze, compute_deltas, percent_change, LookupEngine, MealAnalyzer};
pub use constants::*;
pub use delay::Delayed;
pub use known_meals::{known_meal_keys, lookup, KNOWN_MEALS};
pub use rules::{apply_rules, RuleId, RuleOutcome};
