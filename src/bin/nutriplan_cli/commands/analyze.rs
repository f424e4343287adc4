// ABOUTME: Food-photo analysis command for nutriplan-cli
// ABOUTME: Analyzes a photo with the vision model or a mock template and formats it as a meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::AppConfig;
use nutriplan::intelligence::{format_as_meal, format_as_meal_at, FoodAnalyzer};
use nutriplan::models::{FoodAnalysisResult, LoggableMeal, PhotoAnalysisRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::display_analysis;
use crate::helpers::io::print_json;

/// Flags of the analyze command
pub struct AnalyzeOptions {
    /// Request the vision model
    pub use_ai: bool,
    /// Owner of the formatted meal
    pub user_id: String,
    /// Explicit hour for the meal type
    pub hour: Option<u32>,
    /// Fixed seed for the mock template
    pub seed: Option<u64>,
    /// Human-readable output
    pub pretty: bool,
}

#[derive(Serialize)]
struct AnalysisReport {
    analysis: FoodAnalysisResult,
    meal: LoggableMeal,
}

/// Analyze the photo at `image_url` and print the result
pub async fn run(config: &AppConfig, image_url: String, options: AnalyzeOptions) -> Result<()> {
    let analyzer = if options.use_ai {
        FoodAnalyzer::from_config(&config.ai)?
    } else {
        FoodAnalyzer::mock_only()
    };
    let request = PhotoAnalysisRequest {
        image_url,
        use_ai: options.use_ai,
    };
    info!(use_ai = request.use_ai, "Analyzing food photo");

    let analysis = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            analyzer.analyze_with_rng(&request, &mut rng).await
        }
        None => analyzer.analyze(&request).await,
    };
    let meal = match options.hour {
        Some(hour) => format_as_meal_at(&analysis, &options.user_id, hour),
        None => format_as_meal(&analysis, &options.user_id),
    };

    if options.pretty {
        display_analysis(&analysis, &meal);
        Ok(())
    } else {
        print_json(&AnalysisReport { analysis, meal })
    }
}
