use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::MealError;

/// What the user is trying to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Goal {
    LoseFat,
    GainMuscle,
    HealthyLifestyle,
}

/// How the user prefers to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DietPreference {
    Vegetarian,
    Keto,
    HighProtein,
    Balanced,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseFat, Goal::GainMuscle, Goal::HealthyLifestyle];

    pub fn slug(self) -> &'static str {
        match self {
            Goal::LoseFat => "lose-fat",
            Goal::GainMuscle => "gain-muscle",
            Goal::HealthyLifestyle => "healthy-lifestyle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseFat => "Lose Fat",
            Goal::GainMuscle => "Gain Muscle",
            Goal::HealthyLifestyle => "Healthy Lifestyle",
        }
    }
}

impl DietPreference {
    pub const ALL: [DietPreference; 4] = [
        DietPreference::Vegetarian,
        DietPreference::Keto,
        DietPreference::HighProtein,
        DietPreference::Balanced,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::Keto => "keto",
            DietPreference::HighProtein => "high-protein",
            DietPreference::Balanced => "balanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Keto => "Keto",
            DietPreference::HighProtein => "High Protein",
            DietPreference::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Goal {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|g| g.slug() == wanted)
            .ok_or_else(|| MealError::InvalidInput(format!("unknown goal '{}'", s)))
    }
}

impl FromStr for DietPreference {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DietPreference::ALL
            .into_iter()
            .find(|d| d.slug() == wanted)
            .ok_or_else(|| MealError::InvalidInput(format!("unknown diet preference '{}'", s)))
    }
}

/// A meal plan suggestion for one goal and diet combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub meals: [&'static str; 4],
    pub benefits: [&'static str; 4],
}

/// Curated recommendations. Combinations without an entry have none.
pub static RECOMMENDATIONS: LazyLock<HashMap<(Goal, DietPreference), Recommendation>> =
    LazyLock::new(|| {
        use DietPreference as D;

        let mut m = HashMap::new();
        m.insert(
            (Goal::LoseFat, D::Vegetarian),
            Recommendation {
                title: "Plant-Powered Fat Loss",
                description: "High-fiber, nutrient-dense vegetarian meals to support healthy weight loss",
                meals: [
                    "Quinoa Buddha Bowl with Roasted Vegetables",
                    "Lentil & Spinach Curry with Cauliflower Rice",
                    "Greek Salad with Chickpeas & Feta",
                    "Vegetable Stir-Fry with Tofu",
                ],
                benefits: [
                    "High in fiber",
                    "Low calorie density",
                    "Rich in plant protein",
                    "Keeps you full longer",
                ],
            },
        );
        m.insert(
            (Goal::LoseFat, D::Keto),
            Recommendation {
                title: "Keto Fat Burning",
                description: "Low-carb, high-fat meals optimized for ketosis and fat loss",
                meals: [
                    "Grilled Salmon with Asparagus",
                    "Zucchini Noodles with Avocado Pesto",
                    "Cauliflower Fried Rice with Egg",
                    "Chicken Breast with Brussels Sprouts",
                ],
                benefits: [
                    "Very low carbs",
                    "High healthy fats",
                    "Promotes ketosis",
                    "Stable energy",
                ],
            },
        );
        m.insert(
            (Goal::LoseFat, D::HighProtein),
            Recommendation {
                title: "High-Protein Lean Diet",
                description: "Protein-rich meals to preserve muscle while losing fat",
                meals: [
                    "Grilled Chicken Breast with Vegetables",
                    "Egg White Omelet with Spinach",
                    "Tuna Salad Bowl",
                    "Greek Yogurt Parfait with Berries",
                ],
                benefits: [
                    "High protein",
                    "Preserves muscle",
                    "Increases satiety",
                    "Boosts metabolism",
                ],
            },
        );
        m.insert(
            (Goal::LoseFat, D::Balanced),
            Recommendation {
                title: "Balanced Weight Loss",
                description: "Moderate approach with balanced macros for sustainable fat loss",
                meals: [
                    "Grilled Fish with Sweet Potato & Greens",
                    "Turkey & Avocado Whole Grain Wrap",
                    "Vegetable Soup with Lean Protein",
                    "Overnight Oats with Nuts & Berries",
                ],
                benefits: [
                    "Balanced macros",
                    "Sustainable",
                    "Nutrient-rich",
                    "Easy to maintain",
                ],
            },
        );
        m.insert(
            (Goal::GainMuscle, D::Vegetarian),
            Recommendation {
                title: "Plant-Based Muscle Building",
                description: "Protein-rich vegetarian meals to support muscle growth",
                meals: [
                    "Tempeh & Quinoa Power Bowl",
                    "Chickpea Curry with Brown Rice",
                    "Tofu Scramble with Vegetables",
                    "Lentil Pasta with Nutritional Yeast",
                ],
                benefits: [
                    "High plant protein",
                    "Complete amino acids",
                    "Anti-inflammatory",
                    "Supports recovery",
                ],
            },
        );
        m.insert(
            (Goal::GainMuscle, D::HighProtein),
            Recommendation {
                title: "Maximum Muscle Gain",
                description: "High-protein, calorie-dense meals for serious muscle building",
                meals: [
                    "Grilled Steak with Sweet Potato",
                    "Salmon with Quinoa & Avocado",
                    "Chicken & Rice Bowl",
                    "Protein Smoothie with Banana & Oats",
                ],
                benefits: [
                    "Very high protein",
                    "Calorie surplus",
                    "Optimal for growth",
                    "Fast recovery",
                ],
            },
        );
        m.insert(
            (Goal::HealthyLifestyle, D::Vegetarian),
            Recommendation {
                title: "Balanced Vegetarian Living",
                description: "Well-rounded plant-based meals for overall health",
                meals: [
                    "Mediterranean Vegetable Bowl",
                    "Spinach & Feta Frittata",
                    "Veggie Buddha Bowl",
                    "Roasted Vegetable Quinoa",
                ],
                benefits: [
                    "Nutrient-dense",
                    "Heart-healthy",
                    "Anti-oxidant rich",
                    "Sustainable",
                ],
            },
        );
        m.insert(
            (Goal::HealthyLifestyle, D::Balanced),
            Recommendation {
                title: "Holistic Wellness",
                description: "Diverse, balanced meals for long-term health",
                meals: [
                    "Grilled Fish with Mixed Vegetables",
                    "Whole Grain Salad Bowl",
                    "Lean Protein with Roasted Veggies",
                    "Smoothie Bowl with Fresh Fruit",
                ],
                benefits: [
                    "Variety of nutrients",
                    "Sustainable habits",
                    "Boosts immunity",
                    "Promotes longevity",
                ],
            },
        );
        m
    });

/// Recommendation for a goal and diet, if one is curated.
pub fn recommend(goal: Goal, diet: DietPreference) -> Option<&'static Recommendation> {
    RECOMMENDATIONS.get(&(goal, diet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_combination() {
        let rec = recommend(Goal::LoseFat, DietPreference::Keto).unwrap();
        assert_eq!(rec.title, "Keto Fat Burning");
        assert_eq!(rec.meals.len(), 4);
    }

    #[test]
    fn test_uncurated_combination() {
        assert!(recommend(Goal::GainMuscle, DietPreference::Keto).is_none());
        assert!(recommend(Goal::HealthyLifestyle, DietPreference::HighProtein).is_none());
    }

    #[test]
    fn test_eight_combinations_curated() {
        let count = Goal::ALL
            .iter()
            .flat_map(|g| DietPreference::ALL.iter().map(move |d| (*g, *d)))
            .filter(|(g, d)| recommend(*g, *d).is_some())
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_parse_slugs() {
        assert_eq!("gain-muscle".parse::<Goal>().unwrap(), Goal::GainMuscle);
        assert_eq!(
            " High-Protein ".parse::<DietPreference>().unwrap(),
            DietPreference::HighProtein
        );
        assert!("bulk".parse::<Goal>().is_err());
    }
}
