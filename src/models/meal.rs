use serde::{Deserialize, Serialize};

use crate::models::NutrientProfile;

/// A named meal with its nutrient profile and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub name: String,

    #[serde(flatten)]
    pub profile: NutrientProfile,

    /// Image URL shown next to the meal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Why the meal is considered unhealthy. Empty for improved meals.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concerns: Vec<String>,
}

impl MealRecord {
    pub fn new(name: impl Into<String>, profile: NutrientProfile) -> Self {
        Self {
            name: name.into(),
            profile,
            image: None,
            concerns: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns = concerns.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let meal = MealRecord::new("Dosa", NutrientProfile::new(620, 16, 88, 22, 4, 4))
            .with_image("https://example.com/dosa.jpg")
            .with_concerns(["Low protein"]);

        assert_eq!(meal.name, "Dosa");
        assert_eq!(meal.image.as_deref(), Some("https://example.com/dosa.jpg"));
        assert_eq!(meal.concerns, vec!["Low protein".to_string()]);
    }

    #[test]
    fn test_json_flattens_profile() {
        let meal = MealRecord::new("Dosa", NutrientProfile::new(620, 16, 88, 22, 4, 4));
        let json = serde_json::to_value(&meal).unwrap();

        assert_eq!(json["name"], "Dosa");
        assert_eq!(json["calories"], 620);
        assert_eq!(json["fiber"], 4);
        assert!(json.get("image").is_none());
        assert!(json.get("concerns").is_none());
    }
}
