use std::fmt;

use serde::{Deserialize, Serialize};

/// Six-metric nutritional snapshot of a meal.
///
/// Grams for everything except calories. Values are unsigned, so a negative
/// profile cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
}

impl NutrientProfile {
    pub const fn new(calories: u32, protein: u32, carbs: u32, fat: u32, fiber: u32, sugar: u32) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
        }
    }

    /// Value for a metric, or `None` when the profile does not track it.
    pub fn get(&self, metric: Metric) -> Option<u32> {
        match metric {
            Metric::Calories => Some(self.calories),
            Metric::Protein => Some(self.protein),
            Metric::Carbs => Some(self.carbs),
            Metric::Fat => Some(self.fat),
            Metric::Fiber => Some(self.fiber),
            Metric::Sugar => Some(self.sugar),
            Metric::Sodium => None,
        }
    }

    /// Share of protein, carbs and fat by weight.
    pub fn macro_split(&self) -> MacroSplit {
        let total = (self.protein + self.carbs + self.fat) as f64;
        if total == 0.0 {
            return MacroSplit::default();
        }

        MacroSplit {
            protein: self.protein as f64 / total * 100.0,
            carbs: self.carbs as f64 / total * 100.0,
            fat: self.fat as f64 / total * 100.0,
        }
    }
}

/// Percentage breakdown of the three macronutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A nutrition metric a delta can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    Sodium,
}

impl Metric {
    /// Metrics carried by [`NutrientProfile`], in field order.
    pub const PROFILE: [Metric; 6] = [
        Metric::Calories,
        Metric::Protein,
        Metric::Carbs,
        Metric::Fat,
        Metric::Fiber,
        Metric::Sugar,
    ];

    /// Whether a reduction of this metric counts as an improvement.
    pub fn lower_is_better(self) -> bool {
        !matches!(self, Metric::Protein | Metric::Fiber)
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Calories => "Calories",
            Metric::Protein => "Protein",
            Metric::Carbs => "Carbs",
            Metric::Fat => "Fat",
            Metric::Fiber => "Fiber",
            Metric::Sugar => "Sugar",
            Metric::Sodium => "Sodium",
        }
    }

    /// Display unit ("" for calories).
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Calories => "",
            Metric::Sodium => "mg",
            _ => "g",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn test_get_covers_profile_metrics() {
        let profile = NutrientProfile::new(600, 20, 65, 28, 3, 10);
        let values: Vec<u32> = Metric::PROFILE
            .iter()
            .filter_map(|m| profile.get(*m))
            .collect();
        assert_eq!(values, vec![600, 20, 65, 28, 3, 10]);
        assert_eq!(profile.get(Metric::Sodium), None);
    }

    #[test]
    fn test_polarity() {
        assert!(Metric::Calories.lower_is_better());
        assert!(Metric::Sugar.lower_is_better());
        assert!(Metric::Sodium.lower_is_better());
        assert!(!Metric::Protein.lower_is_better());
        assert!(!Metric::Fiber.lower_is_better());
    }

    #[test]
    fn test_macro_split() {
        let profile = NutrientProfile::new(480, 42, 45, 16, 7, 4);
        let split = profile.macro_split();
        assert_float_absolute_eq!(split.protein, 40.777, 0.001);
        assert_float_absolute_eq!(split.carbs, 43.689, 0.001);
        assert_float_absolute_eq!(split.fat, 15.534, 0.001);
        assert_float_absolute_eq!(split.protein + split.carbs + split.fat, 100.0, 1e-9);
    }

    #[test]
    fn test_macro_split_empty_profile() {
        let split = NutrientProfile::default().macro_split();
        assert_eq!(split, MacroSplit::default());
    }
}
