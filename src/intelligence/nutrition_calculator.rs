// ABOUTME: Nutrition calculation formulas for calorie and macro targets
// ABOUTME: BMR (Mifflin-St Jeor, Harris-Benedict), TDEE, BMI, goal calories, macros, and water
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Metrics Calculator
//!
//! Pure, stateless functions computing energy and macro targets. None of
//! them fail: absent profile fields are replaced by the documented defaults
//! and degenerate inputs (zero height, non-finite values) produce zero
//! instead of NaN or infinity, because callers feed them half-typed form
//! input.
//!
//! Two goal-adjustment policies and two macro-ratio tables coexist and are
//! not interchangeable:
//!
//! - [`calculate_daily_calorie_goal`] (ratio on TDEE) with
//!   [`calculate_macro_goals`] feeds the health dashboard.
//! - [`apply_flat_goal_offset`] (flat offset on BMR) with
//!   [`get_macro_ratios_for_goal`] feeds meal-plan generation.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use nutriplan_core::constants::{
    activity_multipliers, bmi_thresholds, energy_density, goal_offsets, goal_ratios,
    water_ml_per_kg,
};
use nutriplan_core::models::{
    ActivityLevel, BmiCategory, Gender, Goal, HealthMetrics, IdealWeightRange, MacroGoals,
    MacroRatios, UserProfile,
};

/// Round half-up (`floor(x + 0.5)`), mapping non-finite values to zero
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}

/// Replace non-finite values with zero
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: `base = 10 x weight_kg + 6.25 x height_cm - 5 x age`
/// - Men: `round(base + 5)`
/// - Women: `round(base - 161)`
///
/// Used by the health dashboard and the fallback plan synthesizer.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> i64 {
    let base = 10.0_f64.mul_add(
        finite_or_zero(weight_kg),
        6.25 * finite_or_zero(height_cm),
    ) - 5.0 * f64::from(age);

    match gender {
        Gender::Male => round_half_up(base + 5.0),
        Gender::Female => round_half_up(base - 161.0),
    }
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Men: `88.362 + 13.397 x weight_kg + 4.799 x height_cm - 5.677 x age`
/// - Women: `447.593 + 9.247 x weight_kg + 3.098 x height_cm - 4.330 x age`
///
/// Only the AI prompt builder uses this formula; do not substitute it for
/// [`calculate_bmr`].
///
/// # Reference
/// Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
#[must_use]
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
) -> i64 {
    let weight = finite_or_zero(weight_kg);
    let height = finite_or_zero(height_cm);
    let age = f64::from(age);

    let bmr = match gender {
        Gender::Male => 5.677_f64.mul_add(-age, 4.799_f64.mul_add(height, 13.397_f64.mul_add(weight, 88.362))),
        Gender::Female => 4.330_f64.mul_add(-age, 3.098_f64.mul_add(height, 9.247_f64.mul_add(weight, 447.593))),
    };
    round_half_up(bmr)
}

/// TDEE multiplier for an activity level
#[must_use]
pub const fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Low => activity_multipliers::LOW,
        ActivityLevel::Moderate => activity_multipliers::MODERATE,
        ActivityLevel::High => activity_multipliers::HIGH,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: `round(bmr x multiplier)` with low 1.2, moderate 1.55, high 1.725.
#[must_use]
pub fn calculate_tdee(bmr: i64, activity_level: ActivityLevel) -> i64 {
    round_half_up(bmr as f64 * activity_multiplier(activity_level))
}

/// Ratio-based goal adjustment of TDEE (health dashboard policy)
///
/// - Weight loss: `round(tdee x 0.8)`
/// - Weight gain: `round(tdee x 1.1)`
/// - Muscle gain: `round(tdee x 1.15)`
/// - Maintenance: `tdee`
#[must_use]
pub fn calculate_daily_calorie_goal(tdee: i64, goal: Goal) -> i64 {
    let ratio = match goal {
        Goal::WeightLoss => goal_ratios::WEIGHT_LOSS,
        Goal::WeightGain => goal_ratios::WEIGHT_GAIN,
        Goal::MuscleGain => goal_ratios::MUSCLE_GAIN,
        Goal::Maintenance => return tdee,
    };
    round_half_up(tdee as f64 * ratio)
}

/// Flat-offset goal adjustment of BMR (meal-plan policy)
///
/// - Weight loss: `bmr - 400`
/// - Weight gain and muscle gain: `bmr + 300`
/// - Maintenance: `bmr`
#[must_use]
pub const fn apply_flat_goal_offset(bmr: i64, goal: Goal) -> i64 {
    match goal {
        Goal::WeightLoss => bmr + goal_offsets::WEIGHT_LOSS_KCAL,
        Goal::WeightGain | Goal::MuscleGain => bmr + goal_offsets::GAIN_KCAL,
        Goal::Maintenance => bmr,
    }
}

/// Calculate Body Mass Index rounded to one decimal
///
/// Formula: `round(weight / (height_m)^2 x 10) / 10`. Returns `0.0` when the
/// height is not positive.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = finite_or_zero(height_cm) / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    let bmi = finite_or_zero(weight_kg) / (height_m * height_m);
    round_half_up(bmi * 10.0) as f64 / 10.0
}

/// BMI category: <18.5 underweight, <25 normal, <30 overweight, else obese
#[must_use]
pub fn get_bmi_category(bmi: f64) -> BmiCategory {
    if bmi < bmi_thresholds::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < bmi_thresholds::NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < bmi_thresholds::OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Convert a calorie budget to macro grams with the given ratios
///
/// Each macro is `round(calories x ratio / kcal_per_gram)`; negative budgets
/// are clamped to zero so grams are never negative.
#[must_use]
pub fn macro_grams(calories: f64, ratios: MacroRatios) -> MacroGoals {
    let calories = finite_or_zero(calories).max(0.0);
    MacroGoals {
        protein: round_half_up(calories * ratios.protein / energy_density::PROTEIN_KCAL_PER_G),
        carbs: round_half_up(calories * ratios.carbs / energy_density::CARBS_KCAL_PER_G),
        fat: round_half_up(calories * ratios.fat / energy_density::FAT_KCAL_PER_G),
    }
}

/// Macro ratios of the health dashboard
///
/// Muscle gain 30/45/25, weight loss 30/40/30, otherwise 25/50/25.
#[must_use]
pub fn dashboard_macro_ratios(goal: Goal) -> MacroRatios {
    match goal {
        Goal::MuscleGain => MacroRatios::from_percentages(30, 45, 25),
        Goal::WeightLoss => MacroRatios::from_percentages(30, 40, 30),
        Goal::Maintenance | Goal::WeightGain => MacroRatios::from_percentages(25, 50, 25),
    }
}

/// Daily macro targets for the health dashboard
#[must_use]
pub fn calculate_macro_goals(daily_calories: i64, goal: Goal) -> MacroGoals {
    macro_grams(daily_calories as f64, dashboard_macro_ratios(goal))
}

/// Macro ratios used by meal-plan generation
///
/// Weight loss 30/40/30, muscle gain 30/45/25, weight gain 25/50/25,
/// maintenance 25/45/30. Differs from [`dashboard_macro_ratios`] for
/// weight gain and maintenance.
#[must_use]
pub fn get_macro_ratios_for_goal(goal: Goal) -> MacroRatios {
    match goal {
        Goal::WeightLoss => MacroRatios::from_percentages(30, 40, 30),
        Goal::MuscleGain => MacroRatios::from_percentages(30, 45, 25),
        Goal::WeightGain => MacroRatios::from_percentages(25, 50, 25),
        Goal::Maintenance => MacroRatios::from_percentages(25, 45, 30),
    }
}

/// Daily water target in milliliters: `round(weight x 30/35/40)`
#[must_use]
pub fn calculate_water_intake(weight_kg: f64, activity_level: ActivityLevel) -> i64 {
    let ml_per_kg = match activity_level {
        ActivityLevel::Low => water_ml_per_kg::LOW,
        ActivityLevel::Moderate => water_ml_per_kg::MODERATE,
        ActivityLevel::High => water_ml_per_kg::HIGH,
    };
    round_half_up(finite_or_zero(weight_kg) * ml_per_kg)
}

/// Weight range (kg, one decimal) for BMI 18.5 to 25.0 at a height
#[must_use]
pub fn calculate_ideal_weight_range(height_cm: f64) -> IdealWeightRange {
    let height_m = finite_or_zero(height_cm).max(0.0) / 100.0;
    let squared = height_m * height_m;
    let one_decimal = |bmi: f64| round_half_up(bmi * squared * 10.0) as f64 / 10.0;
    IdealWeightRange {
        min: one_decimal(bmi_thresholds::UNDERWEIGHT_BELOW),
        max: one_decimal(bmi_thresholds::NORMAL_BELOW),
    }
}

/// Compute every dashboard metric for a profile
///
/// BMR (Mifflin-St Jeor) → TDEE → ratio goal → BMI → dashboard macros, with
/// profile defaults substituted for absent fields.
#[must_use]
pub fn calculate_health_metrics(profile: &UserProfile) -> HealthMetrics {
    let weight = profile.weight_or_default();
    let height = profile.height_or_default();
    let goal = profile.goal_or_default();

    let bmr = calculate_bmr(
        weight,
        height,
        profile.age_or_default(),
        profile.gender_or_default(),
    );
    let tdee = calculate_tdee(bmr, profile.activity_level_or_default());
    let daily_calorie_goal = calculate_daily_calorie_goal(tdee, goal);
    let bmi = calculate_bmi(weight, height);
    let macros = calculate_macro_goals(daily_calorie_goal, goal);

    HealthMetrics {
        bmr,
        tdee,
        daily_calorie_goal,
        bmi,
        bmi_category: get_bmi_category(bmi),
        protein_goal: macros.protein,
        carbs_goal: macros.carbs,
        fat_goal: macros.fat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_floor_plus_half() {
        assert_eq!(round_half_up(1642.5), 1643);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), 0);
    }

    #[test]
    fn test_flat_offset_policy() {
        assert_eq!(apply_flat_goal_offset(1600, Goal::WeightLoss), 1200);
        assert_eq!(apply_flat_goal_offset(1600, Goal::WeightGain), 1900);
        assert_eq!(apply_flat_goal_offset(1600, Goal::MuscleGain), 1900);
        assert_eq!(apply_flat_goal_offset(1600, Goal::Maintenance), 1600);
    }

    #[test]
    fn test_harris_benedict_differs_from_mifflin() {
        let hb = calculate_bmr_harris_benedict(70.0, 170.0, 25, Gender::Male);
        let msj = calculate_bmr(70.0, 170.0, 25, Gender::Male);
        // 88.362 + 937.79 + 815.83 - 141.925 = 1700.057
        assert_eq!(hb, 1700);
        assert_eq!(msj, 1643);
    }

    #[test]
    fn test_bmi_zero_height_is_zero() {
        assert!(calculate_bmi(70.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ideal_weight_range() {
        let range = calculate_ideal_weight_range(180.0);
        // 18.5 * 3.24 = 59.94, 25 * 3.24 = 81.0
        assert!((range.min - 59.9).abs() < 1e-9);
        assert!((range.max - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_water_intake() {
        assert_eq!(calculate_water_intake(70.0, ActivityLevel::Low), 2100);
        assert_eq!(calculate_water_intake(70.0, ActivityLevel::Moderate), 2450);
        assert_eq!(calculate_water_intake(70.0, ActivityLevel::High), 2800);
    }
}
