// ABOUTME: Health metrics command for nutriplan-cli
// ABOUTME: Reads a user profile and prints BMR, TDEE, BMI, macros, water intake and ideal weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::intelligence::{
    calculate_health_metrics, calculate_ideal_weight_range, calculate_water_intake,
};
use nutriplan::models::{HealthMetrics, IdealWeightRange, UserProfile};
use serde::Serialize;
use tracing::info;

use crate::helpers::display::display_health_metrics;
use crate::helpers::io::{print_json, read_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsReport {
    #[serde(flatten)]
    metrics: HealthMetrics,
    water_intake_ml: i64,
    ideal_weight: IdealWeightRange,
}

/// Compute and print metrics for the profile at `path`
pub async fn run(path: &str, pretty: bool) -> Result<()> {
    let profile: UserProfile = read_json(path).await?;
    info!(
        goal = profile.goal_or_default().as_str(),
        "Computing health metrics"
    );

    let report = MetricsReport {
        metrics: calculate_health_metrics(&profile),
        water_intake_ml: calculate_water_intake(
            profile.weight_or_default(),
            profile.activity_level_or_default(),
        ),
        ideal_weight: calculate_ideal_weight_range(profile.height_or_default()),
    };

    if pretty {
        display_health_metrics(
            &report.metrics,
            report.water_intake_ml,
            &report.ideal_weight,
        );
        Ok(())
    } else {
        print_json(&report)
    }
}
