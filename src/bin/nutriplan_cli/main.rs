// ABOUTME: Nutriplan CLI - command-line front end for the nutrition engine
// ABOUTME: Computes health metrics, generates meal plans, analyzes food photos, and sums meal logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutriplan CLI
//!
//! Usage:
//! ```bash
//! # Health metrics for a profile
//! nutriplan-cli metrics --profile profile.json
//!
//! # Seven-day weight-loss plan, offline synthesizer only
//! nutriplan-cli plan --request request.json --offline --seed 42
//!
//! # Same plan keyed by the persisted (Turkish) weekday names
//! nutriplan-cli plan --request request.json --local-keys
//!
//! # Analyze a photo with the vision model and format it as a meal
//! nutriplan-cli analyze --image-url https://example.com/plate.jpg --ai --user-id u-1
//!
//! # Daily totals and progress against a 2000 kcal target, meals from stdin
//! cat meals.json | nutriplan-cli totals --meals - --date 2025-03-04 --target 2000
//!
//! # Per-day totals over a week of meals
//! nutriplan-cli totals --meals meals.json --weekly
//! ```
//!
//! Results are written to stdout as JSON; logs go to stderr.

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutriplan::config::AppConfig;
use nutriplan::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan nutrition engine CLI",
    long_about = "Command-line front end for health metrics, meal-plan generation, food-photo analysis, and daily nutrition totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print human-readable output instead of JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE, BMI, macro goals, water intake and ideal weight
    Metrics {
        /// Profile JSON file (`-` for stdin)
        #[arg(long)]
        profile: String,
    },

    /// Generate a meal plan
    Plan {
        /// Meal-plan request JSON file (`-` for stdin)
        #[arg(long)]
        request: String,

        /// Skip the AI service and use the offline synthesizer
        #[arg(long)]
        offline: bool,

        /// Seed for fallback entry ids (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Key days by their persisted names (pazartesi, sali, ...)
        #[arg(long)]
        local_keys: bool,
    },

    /// Analyze a food photo and format it as a loggable meal
    Analyze {
        /// URL of the uploaded photo
        #[arg(long)]
        image_url: String,

        /// Use the vision model (falls back to a mock analysis)
        #[arg(long)]
        ai: bool,

        /// Owner of the formatted meal
        #[arg(long, default_value = "local-user")]
        user_id: String,

        /// Hour of day (0-23) used for the meal type; defaults to local time
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,

        /// Seed for the mock template choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sum logged meals into daily totals
    Totals {
        /// Logged meals JSON array file (`-` for stdin)
        #[arg(long)]
        meals: String,

        /// Date label for the daily total (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Group meals by day instead of summing them all
        #[arg(long, conflicts_with = "date")]
        weekly: bool,

        /// Calorie target for the progress percentage
        #[arg(long)]
        target: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays machine-readable)
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AppConfig::from_env()?;

    match cli.command {
        Command::Metrics { profile } => {
            commands::metrics::run(&profile, cli.pretty).await?;
        }
        Command::Plan {
            request,
            offline,
            seed,
            local_keys,
        } => {
            let options = commands::plan::PlanOptions {
                offline,
                seed,
                local_keys,
                pretty: cli.pretty,
            };
            commands::plan::run(&config, &request, options).await?;
        }
        Command::Analyze {
            image_url,
            ai,
            user_id,
            hour,
            seed,
        } => {
            let options = commands::analyze::AnalyzeOptions {
                use_ai: ai,
                user_id,
                hour,
                seed,
                pretty: cli.pretty,
            };
            commands::analyze::run(&config, image_url, options).await?;
        }
        Command::Totals {
            meals,
            date,
            weekly,
            target,
        } => {
            commands::totals::run(&meals, date, weekly, target, cli.pretty).await?;
        }
    }

    Ok(())
}
