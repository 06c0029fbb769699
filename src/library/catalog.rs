use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MealError;

/// Health label attached to a library meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LibraryTag {
    HighProtein,
    WeightLoss,
    LowCarb,
    HeartHealthy,
    DiabeticFriendly,
}

impl LibraryTag {
    pub const ALL: [LibraryTag; 5] = [
        LibraryTag::HighProtein,
        LibraryTag::WeightLoss,
        LibraryTag::LowCarb,
        LibraryTag::HeartHealthy,
        LibraryTag::DiabeticFriendly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LibraryTag::HighProtein => "High Protein",
            LibraryTag::WeightLoss => "Weight Loss",
            LibraryTag::LowCarb => "Low Carb",
            LibraryTag::HeartHealthy => "Heart Healthy",
            LibraryTag::DiabeticFriendly => "Diabetic Friendly",
        }
    }

    /// Short id used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            LibraryTag::HighProtein => "high-protein",
            LibraryTag::WeightLoss => "weight-loss",
            LibraryTag::LowCarb => "low-carb",
            LibraryTag::HeartHealthy => "heart",
            LibraryTag::DiabeticFriendly => "diabetic",
        }
    }
}

impl fmt::Display for LibraryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LibraryTag {
    type Err = MealError;

    /// Accepts either the slug or the label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LibraryTag::ALL
            .into_iter()
            .find(|t| t.slug() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| MealError::InvalidInput(format!("unknown library tag '{}'", s)))
    }
}

/// A showcase entry for an already-improved meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCard {
    pub id: u32,
    pub name: &'static str,
    pub original_name: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub tags: &'static [LibraryTag],
    pub nutrition_score: u32,
    pub calories_reduced: u32,
}

impl MealCard {
    pub fn has_tag(&self, tag: LibraryTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Case-insensitive match against the card or the meal it replaces.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.original_name.to_lowercase().contains(&query)
    }
}

use LibraryTag::*;

/// Library contents in display order.
pub static LIBRARY: [MealCard; 14] = [
    MealCard {
        id: 1,
        name: "Grilled Tandoori Chicken",
        original_name: "Butter Chicken",
        calories: 480,
        protein: 42,
        tags: &[HighProtein, WeightLoss],
        nutrition_score: 92,
        calories_reduced: 340,
    },
    MealCard {
        id: 2,
        name: "Cauliflower Fried Rice",
        original_name: "Fried Rice",
        calories: 240,
        protein: 16,
        tags: &[WeightLoss, LowCarb],
        nutrition_score: 88,
        calories_reduced: 280,
    },
    MealCard {
        id: 3,
        name: "Quinoa Buddha Bowl",
        original_name: "Burrito Bowl",
        calories: 420,
        protein: 24,
        tags: &[HeartHealthy, HighProtein],
        nutrition_score: 95,
        calories_reduced: 180,
    },
    MealCard {
        id: 4,
        name: "Avocado Toast with Eggs",
        original_name: "Bacon & Eggs Toast",
        calories: 380,
        protein: 18,
        tags: &[HeartHealthy, WeightLoss],
        nutrition_score: 90,
        calories_reduced: 220,
    },
    MealCard {
        id: 5,
        name: "Grilled Salmon Bowl",
        original_name: "Fish & Chips",
        calories: 520,
        protein: 38,
        tags: &[HighProtein, HeartHealthy, DiabeticFriendly],
        nutrition_score: 94,
        calories_reduced: 360,
    },
    MealCard {
        id: 6,
        name: "Berry Protein Smoothie Bowl",
        original_name: "Ice Cream Sundae",
        calories: 280,
        protein: 22,
        tags: &[WeightLoss, HighProtein],
        nutrition_score: 86,
        calories_reduced: 320,
    },
    MealCard {
        id: 7,
        name: "Greek Yogurt Parfait",
        original_name: "Dessert Parfait",
        calories: 240,
        protein: 20,
        tags: &[DiabeticFriendly, HighProtein],
        nutrition_score: 89,
        calories_reduced: 240,
    },
    MealCard {
        id: 8,
        name: "Overnight Oats Bowl",
        original_name: "Sugary Cereal",
        calories: 320,
        protein: 14,
        tags: &[HeartHealthy, DiabeticFriendly],
        nutrition_score: 87,
        calories_reduced: 180,
    },
    MealCard {
        id: 9,
        name: "Vegetable Noodle Bowl",
        original_name: "Instant Noodles",
        calories: 320,
        protein: 18,
        tags: &[WeightLoss, HeartHealthy],
        nutrition_score: 85,
        calories_reduced: 60,
    },
    MealCard {
        id: 10,
        name: "Brown Rice Chicken Biryani",
        original_name: "Chicken Biryani",
        calories: 520,
        protein: 38,
        tags: &[HighProtein, HeartHealthy],
        nutrition_score: 91,
        calories_reduced: 330,
    },
    MealCard {
        id: 11,
        name: "Baked Whole Wheat Samosas",
        original_name: "Fried Samosas",
        calories: 380,
        protein: 18,
        tags: &[WeightLoss, DiabeticFriendly],
        nutrition_score: 86,
        calories_reduced: 340,
    },
    MealCard {
        id: 12,
        name: "Paneer Tikka with Whole Wheat Roti",
        original_name: "Paneer Butter Masala",
        calories: 540,
        protein: 32,
        tags: &[HighProtein, HeartHealthy],
        nutrition_score: 89,
        calories_reduced: 380,
    },
    MealCard {
        id: 13,
        name: "Oats and Ragi Dosa",
        original_name: "Masala Dosa",
        calories: 380,
        protein: 24,
        tags: &[HighProtein, WeightLoss, DiabeticFriendly],
        nutrition_score: 93,
        calories_reduced: 240,
    },
    MealCard {
        id: 14,
        name: "Grilled Chicken Burger",
        original_name: "Burger with Fries",
        calories: 520,
        protein: 42,
        tags: &[HighProtein, WeightLoss],
        nutrition_score: 87,
        calories_reduced: 530,
    },
];

/// Cards matching `query` and, if given, carrying `tag`.
///
/// An empty query matches every card. Library order is preserved.
pub fn search(query: &str, tag: Option<LibraryTag>) -> Vec<&'static MealCard> {
    LIBRARY
        .iter()
        .filter(|card| card.matches(query))
        .filter(|card| tag.is_none_or(|t| card.has_tag(t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        for (i, card) in LIBRARY.iter().enumerate() {
            assert_eq!(card.id as usize, i + 1);
        }
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!("high-protein".parse::<LibraryTag>().unwrap(), HighProtein);
        assert_eq!("Heart Healthy".parse::<LibraryTag>().unwrap(), HeartHealthy);
        assert_eq!("DIABETIC".parse::<LibraryTag>().unwrap(), DiabeticFriendly);
        assert!("vegan".parse::<LibraryTag>().is_err());
    }

    #[test]
    fn test_matches_original_name() {
        let card = &LIBRARY[0];
        assert!(card.matches("butter"));
        assert!(card.matches("TANDOORI"));
        assert!(!card.matches("pizza"));
    }
}
