use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meal_makeover_rs::cli::{Cli, Command};
use meal_makeover_rs::engine::{lookup, Delayed, LookupEngine, MealAnalyzer};
use meal_makeover_rs::error::Result;
use meal_makeover_rs::interface::{
    closest_known_meal, display_comparison, display_library, display_nutrition,
    display_recommendation, prompt_diet, prompt_goal, prompt_image_path, prompt_meal,
    prompt_yes_no,
};
use meal_makeover_rs::library::{recommend, search, write_library_csv, DietPreference, Goal, LibraryTag};
use meal_makeover_rs::request::{ImageRef, MealRequest};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so `--json` output stays clean. `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Analyze {
            query,
            image,
            json,
            delay_ms,
        } => cmd_analyze(&query.join(" "), image, json, Duration::from_millis(delay_ms)),
        Command::Nutrition { query } => cmd_nutrition(&query.join(" ")),
        Command::Library { search, tag, csv } => cmd_library(&search, tag.as_deref(), csv),
        Command::Recommend { goal, diet } => cmd_recommend(goal.as_deref(), diet.as_deref()),
        Command::Interactive => cmd_interactive(),
    }
}

fn build_request(text: &str, image: Option<PathBuf>) -> Result<MealRequest> {
    let image = image.map(ImageRef::from_path).transpose()?;
    if let Some(image) = &image {
        info!(
            path = %image.path().display(),
            mime = image.mime_type(),
            bytes = image.size(),
            "image attached"
        );
    }
    MealRequest::new(text, image)
}

/// Point the user at a known meal when their query fell through to the fallback.
fn print_hint(query: &str) {
    if lookup(query).is_some() {
        return;
    }
    if let Some((key, _)) = closest_known_meal(query) {
        println!("Tip: did you mean '{}'? Try: meal_makeover analyze {}", key, key);
        println!();
    }
}

/// Analyze a meal given on the command line.
fn cmd_analyze(text: &str, image: Option<PathBuf>, json: bool, delay: Duration) -> Result<()> {
    let request = build_request(text, image)?;
    let analyzer = Delayed::new(LookupEngine, delay);

    if !json {
        println!("Analyzing your meal...");
    }
    let result = analyzer.analyze(request.query());
    info!(
        original = %result.original.name,
        improved = %result.improved.name,
        "analysis complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    display_comparison(&result);
    print_hint(request.query());
    Ok(())
}

/// Show the nutrition breakdown for a meal.
fn cmd_nutrition(text: &str) -> Result<()> {
    let request = MealRequest::new(text, None)?;
    let result = LookupEngine.analyze(request.query());
    display_nutrition(&result);
    Ok(())
}

/// List library meals, optionally filtered and exported.
fn cmd_library(query: &str, tag: Option<&str>, csv_path: Option<PathBuf>) -> Result<()> {
    let tag = tag.map(str::parse::<LibraryTag>).transpose()?;
    let cards = search(query, tag);
    display_library(&cards);

    if let Some(path) = csv_path {
        write_library_csv(&cards, &path)?;
        println!("Wrote {} meals to {}", cards.len(), path.display());
    }

    Ok(())
}

/// Show the recommendation for a goal and diet, prompting for whichever is missing.
fn cmd_recommend(goal: Option<&str>, diet: Option<&str>) -> Result<()> {
    let goal = match goal {
        Some(g) => g.parse::<Goal>()?,
        None => prompt_goal()?,
    };
    let diet = match diet {
        Some(d) => d.parse::<DietPreference>()?,
        None => prompt_diet()?,
    };

    display_recommendation(goal, diet, recommend(goal, diet));
    Ok(())
}

/// Guided flow: pick a meal, optionally attach a photo, see the makeover.
fn cmd_interactive() -> Result<()> {
    let text = prompt_meal()?;
    let image = prompt_image_path()?;
    let request = build_request(&text, image)?;

    println!("Analyzing your meal...");
    let result = Delayed::standard(LookupEngine).analyze(request.query());
    display_comparison(&result);
    print_hint(request.query());

    if prompt_yes_no("See the nutrition breakdown?", true)? {
        display_nutrition(&result);
    }

    Ok(())
}
