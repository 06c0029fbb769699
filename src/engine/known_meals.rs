use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::models::{
    ComparisonResult, CookingMethod, Direction, IngredientSwap, MealRecord, Metric,
    NutrientProfile, NutritionDelta,
};

/// Precomputed comparisons keyed by lowercase meal keyword.
///
/// Insertion order is the match order: when a query contains several keys,
/// the one declared first wins.
pub static KNOWN_MEALS: LazyLock<IndexMap<&'static str, ComparisonResult>> =
    LazyLock::new(|| {
        let mut m = IndexMap::new();
        m.insert("butter chicken", butter_chicken());
        m.insert("instant noodles", instant_noodles());
        m.insert("fried rice", fried_rice());
        m.insert("pizza", pizza());
        m.insert("biryani", biryani());
        m.insert("samosa", samosa());
        m.insert("paneer", paneer());
        m.insert("chole bhature", chole_bhature());
        m.insert("dosa", dosa());
        m.insert("burger", burger());
        m
    });

/// Known meal keys in match order.
pub fn known_meal_keys() -> impl Iterator<Item = &'static str> {
    KNOWN_MEALS.keys().copied()
}

/// First known meal whose key appears in `query` (case-insensitive).
pub fn lookup(query: &str) -> Option<(&'static str, &'static ComparisonResult)> {
    let query = query.to_lowercase();
    KNOWN_MEALS
        .iter()
        .find(|(key, _)| query.contains(**key))
        .map(|(key, result)| (*key, result))
}

fn photo(id: &str) -> String {
    format!("https://images.unsplash.com/photo-{}?w=1080", id)
}

fn up(metric: Metric, percent: u32) -> NutritionDelta {
    NutritionDelta::new(metric, Direction::Increased, percent)
}

fn down(metric: Metric, percent: u32) -> NutritionDelta {
    NutritionDelta::new(metric, Direction::Decreased, percent)
}

const GENERIC_UNHEALTHY_PHOTO: &str = "1766589221522-d5beae155124";

fn butter_chicken() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new(
            "Butter Chicken with Naan",
            NutrientProfile::new(820, 35, 68, 48, 3, 12),
        )
        .with_image(photo(GENERIC_UNHEALTHY_PHOTO))
        .with_concerns(["High in saturated fat", "Heavy cream", "Refined flour naan"]),
        improved: MealRecord::new(
            "Grilled Tandoori Chicken with Roti",
            NutrientProfile::new(480, 42, 45, 16, 7, 4),
        )
        .with_image(photo("1735353783227-80b22ef618d9")),
        deltas: vec![
            down(Metric::Calories, 41),
            up(Metric::Protein, 20),
            down(Metric::Fat, 67),
            up(Metric::Fiber, 133),
            down(Metric::Sugar, 67),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Heavy cream & butter",
                "Greek yogurt",
                "Cuts fat by 60%, adds probiotics",
            ),
            IngredientSwap::new(
                "Refined flour naan",
                "Whole wheat roti",
                "More fiber, slower digestion",
            ),
            IngredientSwap::new(
                "Fried chicken",
                "Tandoori grilled chicken",
                "Less oil, retains protein",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Pan-fried with butter",
            "Grilled/Tandoori",
            "Eliminates excess oil while maintaining flavor through spices",
        ),
        portion_tip: "Pair with a side salad to increase volume without extra calories".into(),
    }
}

fn instant_noodles() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new("Instant Noodles", NutrientProfile::new(380, 10, 52, 14, 2, 3))
            .with_image(photo(GENERIC_UNHEALTHY_PHOTO))
            .with_concerns(["High sodium (1800mg)", "Refined carbs", "Low nutrients"]),
        improved: MealRecord::new(
            "Vegetable Noodle Bowl",
            NutrientProfile::new(320, 18, 42, 8, 9, 5),
        )
        .with_image(photo("1661257711676-79a0fc533569")),
        deltas: vec![
            down(Metric::Calories, 16),
            up(Metric::Protein, 80),
            down(Metric::Fat, 43),
            up(Metric::Fiber, 350),
            down(Metric::Sodium, 75),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Instant noodles",
                "Rice noodles or zucchini noodles",
                "Lower sodium, more nutrients",
            ),
            IngredientSwap::new(
                "Flavor packet",
                "Low-sodium broth + fresh herbs",
                "Reduces sodium by 75%",
            ),
            IngredientSwap::new(
                "No vegetables",
                "Add bok choy, carrots, mushrooms",
                "Boosts vitamins and fiber",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Boiled with flavor packet",
            "Fresh ingredients in homemade broth",
            "Control sodium and add real nutrition",
        ),
        portion_tip: "Fill half the bowl with vegetables to increase satiety".into(),
    }
}

fn fried_rice() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new("Fried Rice", NutrientProfile::new(520, 12, 78, 18, 2, 4))
            .with_image(photo(GENERIC_UNHEALTHY_PHOTO))
            .with_concerns(["High in oil", "White rice", "Low vegetables"]),
        improved: MealRecord::new(
            "Cauliflower Fried \"Rice\"",
            NutrientProfile::new(240, 16, 28, 8, 8, 6),
        )
        .with_image(photo("1543352632-5a4b24e4d2a6")),
        deltas: vec![
            down(Metric::Calories, 54),
            up(Metric::Protein, 33),
            down(Metric::Fat, 56),
            up(Metric::Fiber, 300),
            down(Metric::Carbs, 64),
        ],
        swaps: vec![
            IngredientSwap::new(
                "White rice",
                "Cauliflower rice",
                "Cuts carbs by 75%, adds vitamins",
            ),
            IngredientSwap::new(
                "Vegetable oil",
                "Spray olive oil",
                "Reduces fat while maintaining flavor",
            ),
            IngredientSwap::new(
                "Minimal vegetables",
                "Mixed vegetables & edamame",
                "Increases protein and nutrients",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Deep fried in oil",
            "Stir-fried with minimal oil",
            "Reduces oil absorption significantly",
        ),
        portion_tip: "Use a smaller bowl and eat slowly to feel satisfied with less".into(),
    }
}

fn pizza() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new("Pizza Margherita", NutrientProfile::new(680, 24, 82, 28, 4, 8))
            .with_image(photo(GENERIC_UNHEALTHY_PHOTO))
            .with_concerns(["Refined flour crust", "High cheese", "Low vegetables"]),
        improved: MealRecord::new(
            "Thin Crust Veggie Pizza",
            NutrientProfile::new(420, 22, 52, 14, 9, 6),
        )
        .with_image(photo("1661257711676-79a0fc533569")),
        deltas: vec![
            down(Metric::Calories, 38),
            down(Metric::Fat, 50),
            up(Metric::Fiber, 125),
            down(Metric::Carbs, 37),
            down(Metric::Protein, 8),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Thick white flour crust",
                "Thin whole wheat crust",
                "More fiber, fewer calories",
            ),
            IngredientSwap::new(
                "Heavy cheese",
                "Light mozzarella + nutritional yeast",
                "Cuts fat while keeping flavor",
            ),
            IngredientSwap::new(
                "Few toppings",
                "Loaded with vegetables",
                "Adds nutrients and volume",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Baked with excess cheese",
            "Baked with balanced toppings",
            "Better nutritional balance",
        ),
        portion_tip: "Start with a salad to reduce pizza consumption".into(),
    }
}

fn biryani() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new("Chicken Biryani", NutrientProfile::new(850, 32, 95, 38, 3, 6))
            .with_image(photo("1563379091339-03b21ab4a4f8"))
            .with_concerns([
                "High calories",
                "Excess oil/ghee",
                "White basmati rice",
                "High sodium",
            ]),
        improved: MealRecord::new(
            "Brown Rice Chicken Biryani",
            NutrientProfile::new(520, 38, 62, 14, 9, 4),
        )
        .with_image(photo("1589302168068-964664d93dc0")),
        deltas: vec![
            down(Metric::Calories, 39),
            up(Metric::Protein, 19),
            down(Metric::Fat, 63),
            up(Metric::Fiber, 200),
            down(Metric::Carbs, 35),
        ],
        swaps: vec![
            IngredientSwap::new(
                "White basmati rice",
                "Brown rice or quinoa blend",
                "Triple the fiber, better blood sugar control",
            ),
            IngredientSwap::new(
                "Excess ghee/oil",
                "Minimal oil with yogurt marinade",
                "Cuts fat by 60%, adds probiotics",
            ),
            IngredientSwap::new(
                "Deep fried onions",
                "Air-fried or caramelized onions",
                "Same flavor, 70% less oil",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Dum cooked with excess ghee",
            "Pressure cooked with minimal oil",
            "Retains flavor while drastically reducing fat",
        ),
        portion_tip: "Fill half your plate with raita and salad before serving biryani".into(),
    }
}

fn samosa() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new(
            "Fried Samosas (3 pieces)",
            NutrientProfile::new(720, 14, 76, 42, 4, 3),
        )
        .with_image(photo("1601050690597-df0568f70950"))
        .with_concerns([
            "Deep fried",
            "Refined flour",
            "High in saturated fat",
            "Low protein",
        ]),
        improved: MealRecord::new(
            "Baked Whole Wheat Samosas (3 pieces)",
            NutrientProfile::new(380, 18, 52, 12, 8, 3),
        )
        .with_image(photo("1626132647523-66f2bf18ba8c")),
        deltas: vec![
            down(Metric::Calories, 47),
            up(Metric::Protein, 29),
            down(Metric::Fat, 71),
            up(Metric::Fiber, 100),
            down(Metric::Carbs, 32),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Refined flour (maida)",
                "Whole wheat flour",
                "Doubles fiber, more nutrients",
            ),
            IngredientSwap::new("Deep fried in oil", "Baked with oil spray", "Cuts fat by 70%"),
            IngredientSwap::new(
                "Potato filling only",
                "Potato + peas + paneer",
                "Adds protein and nutrients",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Deep fried at high temperature",
            "Baked at 200°C until golden",
            "Crispy exterior without oil absorption",
        ),
        portion_tip: "Limit to 2 pieces and pair with mint chutney and salad".into(),
    }
}

fn paneer() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new(
            "Paneer Butter Masala with Naan",
            NutrientProfile::new(920, 28, 78, 56, 4, 14),
        )
        .with_image(photo("1631452180519-c014fe946bc7"))
        .with_concerns([
            "High fat from cream",
            "Heavy butter",
            "Refined naan",
            "High calories",
        ]),
        improved: MealRecord::new(
            "Paneer Tikka with Whole Wheat Roti",
            NutrientProfile::new(540, 32, 48, 24, 8, 6),
        )
        .with_image(photo("1567188040759-fb8a883dc6d8")),
        deltas: vec![
            down(Metric::Calories, 41),
            up(Metric::Protein, 14),
            down(Metric::Fat, 57),
            up(Metric::Fiber, 100),
            down(Metric::Sugar, 57),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Cream-based gravy",
                "Yogurt and tomato-based gravy",
                "Cuts fat by 60%, adds probiotics",
            ),
            IngredientSwap::new(
                "Butter (makhani)",
                "Olive oil + spices",
                "Healthier fats, same richness",
            ),
            IngredientSwap::new(
                "Refined flour naan",
                "Whole wheat roti",
                "Double the fiber, slower digestion",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Paneer fried, gravy with heavy cream",
            "Grilled paneer, lighter gravy",
            "Maintains protein, eliminates excess fat",
        ),
        portion_tip: "Use paneer as a protein source with more vegetables on the side".into(),
    }
}

fn chole_bhature() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new("Chole Bhature", NutrientProfile::new(950, 24, 98, 52, 12, 8))
            .with_image(photo("1626132647523-66f2bf18ba8c"))
            .with_concerns([
                "Deep fried bhature",
                "High calories",
                "Excess oil",
                "Very heavy meal",
            ]),
        improved: MealRecord::new(
            "Chole with Whole Wheat Kulcha",
            NutrientProfile::new(480, 22, 64, 14, 14, 6),
        )
        .with_image(photo("1585937421612-70a008356fbe")),
        deltas: vec![
            down(Metric::Calories, 49),
            down(Metric::Fat, 73),
            up(Metric::Fiber, 17),
            down(Metric::Carbs, 35),
            down(Metric::Protein, 8),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Deep fried bhature",
                "Baked whole wheat kulcha",
                "Eliminates 75% of fat",
            ),
            IngredientSwap::new(
                "Oil-rich chole",
                "Chole with minimal oil",
                "Keeps protein and fiber, reduces fat",
            ),
            IngredientSwap::new(
                "Large portion",
                "Moderate portion with salad",
                "Better portion control",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Bhature deep fried, chole in excess oil",
            "Kulcha baked, chole simmered",
            "Maintains authentic taste with minimal oil",
        ),
        portion_tip: "Have 1 kulcha instead of 2 bhature, add onion-tomato salad".into(),
    }
}

fn dosa() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new(
            "Masala Dosa with Butter",
            NutrientProfile::new(620, 16, 88, 22, 4, 4),
        )
        .with_image(photo("1668236543090-82eba5ee5976"))
        .with_concerns([
            "Excess butter/oil",
            "White rice batter",
            "Large portion",
            "Low protein",
        ]),
        improved: MealRecord::new("Oats and Ragi Dosa", NutrientProfile::new(380, 24, 54, 9, 10, 3))
            .with_image(photo("1694170269221-ea3df8c27f87")),
        deltas: vec![
            down(Metric::Calories, 39),
            up(Metric::Protein, 50),
            down(Metric::Fat, 59),
            up(Metric::Fiber, 150),
            down(Metric::Carbs, 39),
        ],
        swaps: vec![
            IngredientSwap::new(
                "White rice batter",
                "Oats + ragi + lentils batter",
                "More protein, fiber, and minerals",
            ),
            IngredientSwap::new("Excess butter on dosa", "Light oil spray", "Cuts fat by 60%"),
            IngredientSwap::new(
                "Potato masala filling",
                "Mixed vegetable + paneer filling",
                "Higher protein and nutrients",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Made with butter on high heat",
            "Non-stick pan with minimal oil",
            "Same crispy texture, far less fat",
        ),
        portion_tip: "One medium dosa with sambar and chutney is sufficient".into(),
    }
}

fn burger() -> ComparisonResult {
    ComparisonResult {
        original: MealRecord::new(
            "Burger with Fries",
            NutrientProfile::new(1050, 32, 98, 58, 4, 12),
        )
        .with_image(photo("1561758033-d89a9ad46330"))
        .with_concerns([
            "Deep fried fries",
            "Processed meat patty",
            "Refined bun",
            "High sodium",
        ]),
        improved: MealRecord::new(
            "Grilled Chicken Burger with Sweet Potato",
            NutrientProfile::new(520, 42, 54, 16, 9, 8),
        )
        .with_image(photo("1619221882010-23e5b72bc561")),
        deltas: vec![
            down(Metric::Calories, 50),
            up(Metric::Protein, 31),
            down(Metric::Fat, 72),
            up(Metric::Fiber, 125),
            down(Metric::Carbs, 45),
        ],
        swaps: vec![
            IngredientSwap::new(
                "Fried beef patty",
                "Grilled chicken or chickpea patty",
                "Lean protein, less saturated fat",
            ),
            IngredientSwap::new(
                "White refined bun",
                "Whole grain bun",
                "More fiber and nutrients",
            ),
            IngredientSwap::new(
                "Deep fried french fries",
                "Baked sweet potato wedges",
                "Rich in vitamin A, 70% less fat",
            ),
        ],
        cooking_method: CookingMethod::new(
            "Fried patty and fries",
            "Grilled patty, baked sides",
            "Maintains taste while cutting unhealthy fats",
        ),
        portion_tip: "Skip the cheese or use a thin slice, load up on vegetables".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_order_is_declaration_order() {
        let keys: Vec<&str> = known_meal_keys().collect();
        assert_eq!(
            keys,
            vec![
                "butter chicken",
                "instant noodles",
                "fried rice",
                "pizza",
                "biryani",
                "samosa",
                "paneer",
                "chole bhature",
                "dosa",
                "burger",
            ]
        );
    }

    #[test]
    fn test_keys_are_lowercase() {
        for key in known_meal_keys() {
            assert_eq!(key, key.to_lowercase());
        }
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("quinoa salad").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_every_record_has_supporting_content() {
        for (key, result) in KNOWN_MEALS.iter() {
            assert!(!result.original.concerns.is_empty(), "{key} has no concerns");
            assert_eq!(result.swaps.len(), 3, "{key} swaps");
            assert!(!result.deltas.is_empty(), "{key} deltas");
            assert!(!result.portion_tip.is_empty(), "{key} portion tip");
        }
    }
}
