use crate::library::{DietPreference, Goal, MealCard, Recommendation};
use crate::models::{ComparisonResult, MealRecord, Metric};

fn display_meal(label: &str, meal: &MealRecord) {
    let p = &meal.profile;
    println!("{}: {}", label, meal.name);
    println!(
        "  {} cal | P:{}g C:{}g F:{}g Fiber:{}g Sugar:{}g",
        p.calories, p.protein, p.carbs, p.fat, p.fiber, p.sugar
    );
    for concern in &meal.concerns {
        println!("  ! {}", concern);
    }
}

/// Display a before/after comparison.
pub fn display_comparison(result: &ComparisonResult) {
    println!();
    println!("=== Meal Makeover ===");
    println!();

    display_meal("Before", &result.original);
    println!();
    display_meal("After ", &result.improved);
    println!();

    println!("--- Changes ---");
    for delta in &result.deltas {
        let marker = if delta.is_improvement() { "+" } else { " " };
        println!(
            " {} {:<9} {} {}%",
            marker,
            delta.metric.label(),
            delta.direction.arrow(),
            delta.percent
        );
    }
    println!();

    println!("--- Smart Swaps ---");
    for swap in &result.swaps {
        println!("  {} -> {}", swap.original, swap.replacement);
        println!("      {}", swap.benefit);
    }
    println!();

    let method = &result.cooking_method;
    println!("--- Cooking Method ---");
    println!("  {} -> {}", method.original, method.improved);
    println!("      {}", method.benefit);
    println!();

    println!("Portion tip: {}", result.portion_tip);
    println!("Calories saved: {}", result.calories_saved());
    println!();
}

/// Display a metric-by-metric table and the macro split of the improved meal.
pub fn display_nutrition(result: &ComparisonResult) {
    println!();
    println!("=== {} ===", result.improved.name);
    println!();
    println!("{:<10} {:>9} {:>9}", "Metric", "Original", "Improved");

    for metric in Metric::PROFILE {
        let (Some(before), Some(after)) = (
            result.original.profile.get(metric),
            result.improved.profile.get(metric),
        ) else {
            continue;
        };
        let unit = metric.unit();
        println!(
            "{:<10} {:>9} {:>9}",
            metric.label(),
            format!("{}{}", before, unit),
            format!("{}{}", after, unit)
        );
    }

    let split = result.improved.profile.macro_split();
    println!();
    println!("--- Macro Distribution ---");
    println!("  Protein: {:.1}%", split.protein);
    println!("  Carbs:   {:.1}%", split.carbs);
    println!("  Fat:     {:.1}%", split.fat);
    println!();
}

/// Display library cards.
pub fn display_library(cards: &[&MealCard]) {
    if cards.is_empty() {
        println!("No meals found. Try a different search or filter.");
        return;
    }

    println!();
    println!("=== Smart Meal Library ({} meals) ===", cards.len());
    println!();

    let max_name_len = cards.iter().map(|c| c.name.len()).max().unwrap_or(10);

    for card in cards {
        let tags: Vec<&str> = card.tags.iter().map(|t| t.label()).collect();
        println!(
            "{:>3}. {:<width$} - {:>4} cal | {:>2}g protein | score {} | ↓ {} cal vs {}  [{}]",
            card.id,
            card.name,
            card.calories,
            card.protein,
            card.nutrition_score,
            card.calories_reduced,
            card.original_name,
            tags.join(", "),
            width = max_name_len
        );
    }
    println!();
}

/// Display a recommendation, or a note that none is curated.
pub fn display_recommendation(
    goal: Goal,
    diet: DietPreference,
    recommendation: Option<&Recommendation>,
) {
    println!();
    let Some(rec) = recommendation else {
        println!(
            "No curated plan for {} + {} yet. Try another combination.",
            goal, diet
        );
        println!();
        return;
    };

    println!("=== {} ===", rec.title);
    println!("{}", rec.description);
    println!();
    println!("Meals:");
    for meal in rec.meals {
        println!("  - {}", meal);
    }
    println!();
    println!("Benefits:");
    for benefit in rec.benefits {
        println!("  - {}", benefit);
    }
    println!();
}
