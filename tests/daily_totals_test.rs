// ABOUTME: Integration tests for the meal/daily aggregator
// ABOUTME: Validates empty totals, per-day grouping, explicit dates and zero-target progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::logged_meal;
use nutriplan::intelligence::daily_totals::{
    calculate_daily_totals, calculate_daily_totals_on, calculate_progress,
    calculate_weekly_daily_totals,
};
use nutriplan::models::LoggedMeal;

#[test]
fn test_progress_with_zero_target_is_zero() {
    for current in [0.0, -10.0, 1.0, 2500.0, f64::MAX] {
        assert_eq!(calculate_progress(current, 0.0), 0, "current={current}");
    }
}

#[test]
fn test_progress_rounds_and_caps() {
    assert_eq!(calculate_progress(1234.0, 2000.0), 62);
    assert_eq!(calculate_progress(1990.0, 2000.0), 100);
    assert_eq!(calculate_progress(2400.0, 2000.0), 100);
    assert_eq!(calculate_progress(0.0, 2000.0), 0);
}

#[test]
fn test_empty_daily_totals() {
    let total = calculate_daily_totals(&[]);
    assert_eq!(total.meal_count, 0);
    assert!(total.total_calories.abs() < f64::EPSILON);
    assert!(total.total_protein.abs() < f64::EPSILON);
    assert!(total.total_carbs.abs() < f64::EPSILON);
    assert!(total.total_fat.abs() < f64::EPSILON);
    assert!(NaiveDate::parse_from_str(&total.date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_daily_totals_on_explicit_date() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    let meals = vec![
        logged_meal("2025-03-04T08:00:00Z", 420.0, 21.0, 40.0, 18.0),
        logged_meal("2025-03-04T13:10:00Z", 650.5, 35.5, 70.0, 22.0),
    ];
    let total = calculate_daily_totals_on(&meals, date);
    assert_eq!(total.date, "2025-03-04");
    assert_eq!(total.meal_count, 2);
    assert!((total.total_calories - 1070.5).abs() < 1e-9);
    assert!((total.total_protein - 56.5).abs() < 1e-9);
    assert!((total.total_carbs - 110.0).abs() < 1e-9);
    assert!((total.total_fat - 40.0).abs() < 1e-9);
}

#[test]
fn test_weekly_totals_sorted_by_date() {
    let meals = vec![
        logged_meal("2025-03-06T20:00:00Z", 500.0, 20.0, 50.0, 20.0),
        logged_meal("2025-03-04T08:00:00Z", 300.0, 10.0, 30.0, 10.0),
        logged_meal("2025-03-06T08:00:00Z", 250.0, 10.0, 30.0, 8.0),
        logged_meal("2025-03-05T12:00:00Z", 600.0, 30.0, 60.0, 20.0),
    ];
    let totals = calculate_weekly_daily_totals(&meals);
    let dates: Vec<&str> = totals.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, ["2025-03-04", "2025-03-05", "2025-03-06"]);
    assert_eq!(totals[2].meal_count, 2);
    assert!((totals[2].total_calories - 750.0).abs() < f64::EPSILON);
}

#[test]
fn test_meals_with_garbage_numbers_count_as_zero() {
    let meals: Vec<LoggedMeal> = serde_json::from_str(
        r#"[
            {"created_at":"2025-03-04T08:00:00Z","total_calories":"abc","total_protein":12},
            {"created_at":"2025-03-04T09:00:00Z","total_calories":"300"}
        ]"#,
    )
    .unwrap();
    let totals = calculate_weekly_daily_totals(&meals);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].meal_count, 2);
    assert!((totals[0].total_calories - 300.0).abs() < f64::EPSILON);
    assert!((totals[0].total_protein - 12.0).abs() < f64::EPSILON);
}
