// ABOUTME: Meal-plan command for nutriplan-cli
// ABOUTME: Generates a plan with the AI service or the offline synthesizer and prints it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::AppConfig;
use nutriplan::intelligence::meal_plan::to_local_keys;
use nutriplan::intelligence::MealPlanGenerator;
use nutriplan::models::{MealPlanOutcome, MealPlanRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::info;

use crate::helpers::display::display_meal_plan;
use crate::helpers::io::{print_json, read_json};

/// Flags of the plan command
pub struct PlanOptions {
    /// Never call the AI service
    pub offline: bool,
    /// Fixed seed for fallback ids
    pub seed: Option<u64>,
    /// Emit persisted weekday keys
    pub local_keys: bool,
    /// Human-readable output
    pub pretty: bool,
}

/// Generate and print a plan for the request at `path`
pub async fn run(config: &AppConfig, path: &str, options: PlanOptions) -> Result<()> {
    let request: MealPlanRequest = read_json(path).await?;
    let generator = if options.offline {
        MealPlanGenerator::offline()
    } else {
        MealPlanGenerator::from_config(&config.ai)?
    };
    info!(
        ai = generator.has_provider(),
        goal = request.goal.as_str(),
        duration = request.duration,
        "Generating meal plan"
    );

    let outcome: MealPlanOutcome = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate_with_rng(&request, &mut rng).await
        }
        None => generator.generate(&request).await,
    };

    if options.pretty {
        display_meal_plan(&outcome);
        return Ok(());
    }
    if options.local_keys {
        let mut value = serde_json::to_value(&outcome)?;
        value["plan"]["weekly_plan"] = json!(to_local_keys(&outcome.plan.weekly_plan));
        return print_json(&value);
    }
    print_json(&outcome)
}
