pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod library;
pub mod models;
pub mod request;

pub use engine::{analyze, LookupEngine, MealAnalyzer};
pub use error::{MealError, Result};
pub use models::{ComparisonResult, MealRecord, NutrientProfile, NutritionDelta};
