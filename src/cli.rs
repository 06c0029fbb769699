use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MealMakeover — turn any meal into a healthier version with smart swaps.
#[derive(Parser, Debug)]
#[command(name = "meal_makeover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a meal and show its healthier version.
    Analyze {
        /// Meal description, e.g. "butter chicken with naan".
        query: Vec<String>,

        /// Photo of the meal (JPG, PNG or WebP, up to 5 MB).
        #[arg(long)]
        image: Option<PathBuf>,

        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,

        /// Pause before showing the result, in milliseconds.
        #[arg(long, default_value = "2500")]
        delay_ms: u64,
    },

    /// Show the nutrition breakdown for a meal's healthier version.
    Nutrition {
        /// Meal description.
        query: Vec<String>,
    },

    /// Browse the meal library.
    Library {
        /// Filter by meal name or the meal it replaces.
        #[arg(short, long, default_value = "")]
        search: String,

        /// Filter by tag (high-protein, weight-loss, low-carb, heart, diabetic).
        #[arg(short, long)]
        tag: Option<String>,

        /// Export the listed meals to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Get recommendations for a goal and diet preference.
    Recommend {
        /// lose-fat, gain-muscle or healthy-lifestyle.
        #[arg(long)]
        goal: Option<String>,

        /// vegetarian, keto, high-protein or balanced.
        #[arg(long)]
        diet: Option<String>,
    },

    /// Pick or type a meal interactively.
    Interactive,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
