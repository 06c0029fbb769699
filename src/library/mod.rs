pub mod catalog;
pub mod export;
pub mod recommendations;

pub use catalog::{search, LibraryTag, MealCard, LIBRARY};
pub use export::write_library_csv;
pub use recommendations::{recommend, DietPreference, Goal, Recommendation};
