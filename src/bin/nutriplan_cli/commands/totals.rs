// ABOUTME: Daily totals command for nutriplan-cli
// ABOUTME: Sums logged meals for one day or per day, with optional calorie progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{Local, NaiveDate};
use nutriplan::intelligence::{
    calculate_daily_totals_on, calculate_progress, calculate_weekly_daily_totals,
};
use nutriplan::models::{DailyTotal, LoggedMeal};
use serde::Serialize;
use tracing::info;

use crate::helpers::display::display_daily_total;
use crate::helpers::io::{print_json, read_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalReport {
    #[serde(flatten)]
    total: DailyTotal,
    #[serde(skip_serializing_if = "Option::is_none")]
    calorie_progress: Option<i64>,
}

impl TotalReport {
    fn new(total: DailyTotal, target: Option<f64>) -> Self {
        let calorie_progress = target.map(|target| calculate_progress(total.total_calories, target));
        Self {
            total,
            calorie_progress,
        }
    }
}

/// Sum the meals at `path` and print the totals
pub async fn run(
    path: &str,
    date: Option<NaiveDate>,
    weekly: bool,
    target: Option<f64>,
    pretty: bool,
) -> Result<()> {
    let meals: Vec<LoggedMeal> = read_json(path).await?;
    info!(meals = meals.len(), weekly, "Summing logged meals");

    let reports: Vec<TotalReport> = if weekly {
        calculate_weekly_daily_totals(&meals)
            .into_iter()
            .map(|total| TotalReport::new(total, target))
            .collect()
    } else {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        vec![TotalReport::new(
            calculate_daily_totals_on(&meals, date),
            target,
        )]
    };

    if pretty {
        for report in &reports {
            display_daily_total(&report.total, report.calorie_progress);
        }
        return Ok(());
    }
    if weekly {
        print_json(&reports)
    } else {
        // Single-day output is an object, not a one-element array
        reports.first().map_or(Ok(()), print_json)
    }
}
