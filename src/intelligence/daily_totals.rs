// ABOUTME: Meal aggregation into per-day nutrition totals and goal progress percentages
// ABOUTME: Sums logged meals, groups them by calendar day, and guards progress against zero targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use super::nutrition_calculator::round_half_up;
use nutriplan_core::models::{DailyTotal, LoggedMeal};

/// Sum a list of meals, labelled with today's local date
///
/// The list is not filtered: callers pass meals already restricted to the
/// day they want summed.
#[must_use]
pub fn calculate_daily_totals(meals: &[LoggedMeal]) -> DailyTotal {
    calculate_daily_totals_on(meals, Local::now().date_naive())
}

/// Sum a list of meals, labelled with `date`
#[must_use]
pub fn calculate_daily_totals_on(meals: &[LoggedMeal], date: NaiveDate) -> DailyTotal {
    sum_meals(date.format("%Y-%m-%d").to_string(), meals.iter())
}

fn sum_meals<'a>(date: String, meals: impl Iterator<Item = &'a LoggedMeal>) -> DailyTotal {
    meals.fold(
        DailyTotal {
            date,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            meal_count: 0,
        },
        |mut total, meal| {
            total.total_calories += meal.total_calories;
            total.total_protein += meal.total_protein;
            total.total_carbs += meal.total_carbs;
            total.total_fat += meal.total_fat;
            total.meal_count += 1;
            total
        },
    )
}

/// Group meals by the date part of `created_at` and sum each group
///
/// The key is the timestamp truncated at `T` with no timezone conversion.
/// Results are sorted ascending by date string.
#[must_use]
pub fn calculate_weekly_daily_totals(meals: &[LoggedMeal]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<&str, Vec<&LoggedMeal>> = BTreeMap::new();
    for meal in meals {
        by_day.entry(meal.date_key()).or_default().push(meal);
    }

    by_day
        .into_iter()
        .map(|(date, day_meals)| sum_meals(date.to_owned(), day_meals.into_iter()))
        .collect()
}

/// Percentage of `target` reached, capped at 100
///
/// Returns 0 when the target is 0 or the ratio is not finite.
#[must_use]
pub fn calculate_progress(current: f64, target: f64) -> i64 {
    if target.abs() < f64::EPSILON {
        return 0;
    }
    let percent = current / target * 100.0;
    if !percent.is_finite() {
        return 0;
    }
    round_half_up(percent).min(100)
}
