use std::path::PathBuf;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::known_meal_keys;
use crate::error::Result;
use crate::library::{DietPreference, Goal};

/// Meals offered as one-keystroke picks.
pub const QUICK_SUGGESTIONS: [&str; 10] = [
    "Butter chicken",
    "Instant noodles",
    "Fried rice",
    "Pizza",
    "Biryani",
    "Samosa",
    "Paneer masala",
    "Chole bhature",
    "Dosa",
    "Burger & fries",
];

/// Minimum similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Prompt for a meal, offering quick picks before free text.
pub fn prompt_meal() -> Result<String> {
    let mut options: Vec<&str> = QUICK_SUGGESTIONS.to_vec();
    options.push("Type my own...");

    let selection = Select::new()
        .with_prompt("What did you eat?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < QUICK_SUGGESTIONS.len() {
        return Ok(QUICK_SUGGESTIONS[selection].to_string());
    }

    let input: String = Input::new()
        .with_prompt("Type your meal (e.g. 'butter chicken with naan')")
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for an optional photo path.
pub fn prompt_image_path() -> Result<Option<PathBuf>> {
    let input: String = Input::new()
        .with_prompt("Path to a photo of the meal (or press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| PathBuf::from(input)))
}

/// Prompt for a health goal.
pub fn prompt_goal() -> Result<Goal> {
    let labels: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("What's your goal?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Goal::ALL[selection])
}

/// Prompt for a diet preference.
pub fn prompt_diet() -> Result<DietPreference> {
    let labels: Vec<&str> = DietPreference::ALL.iter().map(|d| d.label()).collect();
    let selection = Select::new()
        .with_prompt("Dietary preference?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(DietPreference::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Known meal key most similar to `query`, if any is close enough.
pub fn closest_known_meal(query: &str) -> Option<(&'static str, f64)> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    known_meal_keys()
        .map(|key| (key, jaro_winkler(key, &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lookup;

    #[test]
    fn test_closest_known_meal_typo() {
        let (key, score) = closest_known_meal("biriyani").unwrap();
        assert_eq!(key, "biryani");
        assert!(score > SUGGESTION_THRESHOLD);
    }

    #[test]
    fn test_closest_known_meal_none_for_unrelated() {
        assert!(closest_known_meal("xyz").is_none());
        assert!(closest_known_meal("  ").is_none());
    }

    #[test]
    fn test_quick_suggestions_hit_known_meals() {
        for suggestion in QUICK_SUGGESTIONS {
            assert!(lookup(suggestion).is_some(), "{suggestion} misses the table");
        }
    }
}
