use meal_makeover_rs::engine::{analyze, known_meal_keys, KNOWN_MEALS, DEFAULT_PROFILE};
use meal_makeover_rs::models::{Direction, Metric, NutrientProfile};

#[test]
fn test_every_key_matches_inside_text_any_case() {
    for key in known_meal_keys() {
        let expected = &KNOWN_MEALS[key];

        let shouted = format!("I had {} FOR dinner", key.to_uppercase());
        assert_eq!(&analyze(&shouted), expected, "query: {shouted}");

        let bare = key.to_string();
        assert_eq!(&analyze(&bare), expected, "query: {bare}");
    }
}

#[test]
fn test_first_declared_key_wins() {
    // "pizza" is declared before "burger"
    let result = analyze("burger or pizza tonight");
    assert_eq!(result, KNOWN_MEALS["pizza"]);

    // "paneer" is declared before "dosa"
    let result = analyze("Paneer Dosa");
    assert_eq!(result.original.name, "Paneer Butter Masala with Naan");

    // "butter chicken" is declared before "biryani"
    let result = analyze("butter chicken biryani");
    assert_eq!(result.original.name, "Butter Chicken with Naan");
}

#[test]
fn test_butter_chicken() {
    let result = analyze("butter chicken");
    assert_eq!(result.original.profile.calories, 820);
    assert_eq!(result.improved.profile.calories, 480);

    let calories = result.delta(Metric::Calories).unwrap();
    assert_eq!(calories.direction, Direction::Decreased);
    assert_eq!(calories.percent, 41);
}

#[test]
fn test_table_deltas_are_returned_verbatim() {
    // Precomputed records may report sodium and skip profile metrics.
    let noodles = analyze("instant noodles");
    let sodium = noodles.delta(Metric::Sodium).unwrap();
    assert_eq!(sodium.direction, Direction::Decreased);
    assert_eq!(sodium.percent, 75);
    assert!(noodles.delta(Metric::Sugar).is_none());

    let pizza = analyze("pizza");
    let protein = pizza.delta(Metric::Protein).unwrap();
    assert_eq!(protein.direction, Direction::Decreased);
    assert_eq!(protein.percent, 8);
}

#[test]
fn test_fallback_profile() {
    let result = analyze("unknown xyz food");

    assert_eq!(result.original.profile, DEFAULT_PROFILE);
    assert_eq!(
        result.original.profile,
        NutrientProfile::new(600, 20, 65, 28, 3, 10)
    );

    let improved = result.improved.profile;
    assert_eq!(improved.calories, 480);
    // 20 is not below 20, so protein lands in the x1.3 band
    assert_eq!(improved.protein, 26);
    assert_eq!(improved.carbs, 65);
    assert_eq!(improved.fat, 14);
    assert_eq!(improved.fiber, 8);
    assert_eq!(improved.sugar, 10);
}

#[test]
fn test_fallback_deltas() {
    let result = analyze("unknown xyz food");
    let summary: Vec<(Metric, Direction, u32)> = result
        .deltas
        .iter()
        .map(|d| (d.metric, d.direction, d.percent))
        .collect();

    assert_eq!(
        summary,
        vec![
            (Metric::Calories, Direction::Decreased, 20),
            (Metric::Protein, Direction::Increased, 30),
            (Metric::Carbs, Direction::Increased, 0),
            (Metric::Fat, Direction::Decreased, 50),
            (Metric::Fiber, Direction::Increased, 167),
            (Metric::Sugar, Direction::Increased, 0),
        ]
    );
}

#[test]
fn test_fallback_names_and_concerns() {
    let result = analyze("  grilled cheese  ");
    assert_eq!(result.original.name, "grilled cheese");
    assert_eq!(result.improved.name, "Healthier grilled cheese");
    assert_eq!(
        result.original.concerns,
        vec!["High fat (needs reduction)", "Low fiber (needs increase)"]
    );
    assert!(result.improved.concerns.is_empty());
    assert_eq!(result.swaps.len(), 3);
}

#[test]
fn test_blank_query() {
    for query in ["", "   "] {
        let result = analyze(query);
        assert_eq!(result.improved.name, "Healthier Meal");
        assert_eq!(result.original.name, "Your Meal");
        assert_eq!(result.original.profile, DEFAULT_PROFILE);
    }
}

#[test]
fn test_idempotent() {
    for query in ["butter chicken", "unknown xyz food", ""] {
        assert_eq!(analyze(query), analyze(query));
    }
}

#[test]
fn test_json_shape() {
    let json = serde_json::to_value(analyze("dosa")).unwrap();
    assert_eq!(json["original"]["name"], "Masala Dosa with Butter");
    assert_eq!(json["improved"]["calories"], 380);
    assert_eq!(json["deltas"][0]["direction"], "decreased");
    assert_eq!(json["cookingMethod"]["improved"], "Non-stick pan with minimal oil");
    assert!(json["portionTip"].is_string());
}
