pub mod prompts;
pub mod render;

pub use prompts::{
    closest_known_meal, prompt_diet, prompt_goal, prompt_image_path, prompt_meal, prompt_yes_no,
    QUICK_SUGGESTIONS,
};
pub use render::{display_comparison, display_library, display_nutrition, display_recommendation};
