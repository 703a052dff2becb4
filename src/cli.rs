use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal Wizard: a step-by-step meal planner driven by your health readings.
#[derive(Parser, Debug)]
#[command(name = "meal_wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the local key-value store file that holds drafts.
    #[arg(long, global = true, default_value = "meal_planner_store.json")]
    pub store: PathBuf,

    /// Artificial delay before a plan is shown, in milliseconds.
    #[arg(long, global = true, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Number of days in the generated plan (1-7).
    #[arg(long, global = true, default_value_t = 7)]
    pub days: usize,

    /// Seed for random dish selection (rotates through dishes when omitted).
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write the generated plan to this CSV file.
    #[arg(long, global = true)]
    pub export: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive meal planning wizard.
    Plan,

    /// Calculate BMI and show the matching guidance.
    Bmi {
        /// Weight in kilograms.
        #[arg(long)]
        weight: String,

        /// Height in centimetres.
        #[arg(long)]
        height: String,
    },

    /// Show canned meal suggestions for a cuisine or BMI category.
    Suggest {
        /// Cuisine name (unknown names use "No Preference").
        #[arg(long, conflicts_with = "category")]
        cuisine: Option<String>,

        /// BMI category: underweight, normal, overweight or obese.
        #[arg(long)]
        category: Option<String>,
    },

    /// Inspect or remove the saved draft.
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Print the saved draft.
    Show,

    /// Delete the saved draft.
    Clear,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
