// ABOUTME: Nutrition intelligence: health metrics, daily totals, meal plans, and photo analysis
// ABOUTME: Pure calculators plus the AI-backed generators with their offline fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The computational core of the engine. The calculator and aggregator are
//! pure; the meal-plan generator and food analyzer make at most one external
//! call each and never surface its failure to the caller.

/// Daily and weekly nutrition aggregation
pub mod daily_totals;
/// Food-photo analysis and meal formatting
pub mod food_analysis;
/// Meal-plan generation
pub mod meal_plan;
/// BMR, TDEE, BMI, macro, water and ideal-weight formulas
pub mod nutrition_calculator;

pub use daily_totals::{
    calculate_daily_totals, calculate_daily_totals_on, calculate_progress,
    calculate_weekly_daily_totals,
};
pub use food_analysis::{
    format_as_meal, format_as_meal_at, mock_analysis, parse_analysis_response, FoodAnalyzer,
};
pub use meal_plan::{synthesize_fallback_plan, MealPlanGenerator};
pub use nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_bmr_harris_benedict, calculate_daily_calorie_goal,
    calculate_health_metrics, calculate_ideal_weight_range, calculate_macro_goals,
    calculate_tdee, calculate_water_intake, get_bmi_category, get_macro_ratios_for_goal,
};
