// ABOUTME: Integration tests for the health metrics calculator
// ABOUTME: Validates BMR/TDEE formulas, BMI boundaries, macro tables and the end-to-end profile scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::profile;
use nutriplan::intelligence::nutrition_calculator::{
    apply_flat_goal_offset, calculate_bmi, calculate_bmr, calculate_bmr_harris_benedict,
    calculate_daily_calorie_goal, calculate_health_metrics, calculate_ideal_weight_range,
    calculate_macro_goals, calculate_tdee, calculate_water_intake, get_bmi_category,
    get_macro_ratios_for_goal, macro_grams,
};
use nutriplan::models::{ActivityLevel, BmiCategory, Gender, Goal, UserProfile};

const GOALS: [Goal; 4] = [
    Goal::WeightLoss,
    Goal::WeightGain,
    Goal::Maintenance,
    Goal::MuscleGain,
];

#[test]
fn test_male_female_bmr_differ_by_166() {
    let samples = [
        (70.0, 170.0, 25),
        (55.5, 160.0, 41),
        (102.3, 191.5, 63),
        (48.0, 150.0, 18),
        (85.0, 182.0, 30),
    ];
    for (weight, height, age) in samples {
        let male = calculate_bmr(weight, height, age, Gender::Male);
        let female = calculate_bmr(weight, height, age, Gender::Female);
        assert_eq!(male - female, 166, "w={weight} h={height} a={age}");
    }
}

#[test]
fn test_tdee_moderate_is_rounded_product() {
    for bmr in [0_i64, 1, 1643, 1999, 2500, 1_000_000] {
        let expected = (bmr as f64 * 1.55 + 0.5).floor() as i64;
        assert_eq!(calculate_tdee(bmr, ActivityLevel::Moderate), expected, "bmr={bmr}");
    }
    assert_eq!(calculate_tdee(0, ActivityLevel::Moderate), 0);
    assert_eq!(calculate_tdee(1643, ActivityLevel::Moderate), 2547);
    assert_eq!(calculate_tdee(1000, ActivityLevel::Low), 1200);
    assert_eq!(calculate_tdee(1000, ActivityLevel::High), 1725);
}

#[test]
fn test_ratio_goal_policy() {
    assert_eq!(calculate_daily_calorie_goal(2500, Goal::WeightLoss), 2000);
    assert_eq!(calculate_daily_calorie_goal(2500, Goal::WeightGain), 2750);
    assert_eq!(calculate_daily_calorie_goal(2500, Goal::MuscleGain), 2875);
    assert_eq!(calculate_daily_calorie_goal(2500, Goal::Maintenance), 2500);
}

#[test]
fn test_flat_offset_goal_policy() {
    assert_eq!(apply_flat_goal_offset(1643, Goal::WeightLoss), 1243);
    assert_eq!(apply_flat_goal_offset(1643, Goal::WeightGain), 1943);
    assert_eq!(apply_flat_goal_offset(1643, Goal::MuscleGain), 1943);
    assert_eq!(apply_flat_goal_offset(1643, Goal::Maintenance), 1643);
}

#[test]
fn test_macro_grams_non_negative_in_both_tables() {
    for calories in [0_i64, 1, 3, 250, 1243, 2547, 5000] {
        for goal in GOALS {
            let general = calculate_macro_goals(calories, goal);
            let plan = macro_grams(calories as f64, get_macro_ratios_for_goal(goal));
            for grams in [
                general.protein,
                general.carbs,
                general.fat,
                plan.protein,
                plan.carbs,
                plan.fat,
            ] {
                assert!(grams >= 0, "calories={calories} goal={goal:?}");
            }
        }
    }
}

#[test]
fn test_macro_tables() {
    let muscle = calculate_macro_goals(2000, Goal::MuscleGain);
    assert_eq!((muscle.protein, muscle.carbs, muscle.fat), (150, 225, 56));

    let loss = calculate_macro_goals(2000, Goal::WeightLoss);
    assert_eq!((loss.protein, loss.carbs, loss.fat), (150, 200, 67));

    let general = calculate_macro_goals(2000, Goal::Maintenance);
    assert_eq!((general.protein, general.carbs, general.fat), (125, 250, 56));

    let maintenance_plan = get_macro_ratios_for_goal(Goal::Maintenance);
    assert!((maintenance_plan.fat - 0.30).abs() < 1e-9);
    assert!((maintenance_plan.carbs - 0.45).abs() < 1e-9);
}

#[test]
fn test_maintenance_end_to_end() {
    let profile = profile(
        25,
        70.0,
        170.0,
        Gender::Male,
        ActivityLevel::Moderate,
        Goal::Maintenance,
    );
    let metrics = calculate_health_metrics(&profile);
    assert_eq!(metrics.bmr, 1643);
    assert_eq!(metrics.tdee, 2547);
    assert_eq!(metrics.daily_calorie_goal, metrics.tdee);
    assert!((metrics.bmi - 24.2).abs() < 1e-9);
    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
}

#[test]
fn test_empty_profile_uses_defaults() {
    let metrics = calculate_health_metrics(&UserProfile::default());
    assert_eq!(metrics.bmr, 1643);
    assert_eq!(metrics.tdee, 2547);
}

#[test]
fn test_bmi_category_boundaries() {
    assert_eq!(get_bmi_category(18.4), BmiCategory::Underweight);
    assert_eq!(get_bmi_category(18.5), BmiCategory::Normal);
    assert_eq!(get_bmi_category(24.9), BmiCategory::Normal);
    assert_eq!(get_bmi_category(25.0), BmiCategory::Overweight);
    assert_eq!(get_bmi_category(29.9), BmiCategory::Overweight);
    assert_eq!(get_bmi_category(30.0), BmiCategory::Obese);
}

#[test]
fn test_bmi_degrades_without_height() {
    assert!((calculate_bmi(70.0, 0.0)).abs() < f64::EPSILON);
    assert!((calculate_bmi(70.0, 170.0) - 24.2).abs() < 1e-9);
}

#[test]
fn test_harris_benedict_is_distinct_from_mifflin() {
    let hb = calculate_bmr_harris_benedict(70.0, 170.0, 25, Gender::Male);
    let mifflin = calculate_bmr(70.0, 170.0, 25, Gender::Male);
    assert_eq!(hb, 1700);
    assert_ne!(hb, mifflin);
}

#[test]
fn test_water_and_ideal_weight() {
    assert_eq!(calculate_water_intake(70.0, ActivityLevel::Low), 2100);
    assert_eq!(calculate_water_intake(70.0, ActivityLevel::Moderate), 2450);
    assert_eq!(calculate_water_intake(70.0, ActivityLevel::High), 2800);

    let range = calculate_ideal_weight_range(180.0);
    assert!((range.min - 59.9).abs() < 1e-9);
    assert!((range.max - 81.0).abs() < 1e-9);
}
