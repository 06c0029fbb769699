mod analysis;
mod meal;
mod nutrients;

pub use analysis::{ComparisonResult, CookingMethod, Direction, IngredientSwap, NutritionDelta};
pub use meal::MealRecord;
pub use nutrients::{MacroSplit, Metric, NutrientProfile};
