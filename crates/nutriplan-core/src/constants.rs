// ABOUTME: Nutrition constants shared by every calorie and macro computation
// ABOUTME: Activity multipliers, energy densities, meal slot ratios, and profile defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile defaults substituted when a physiological field is absent
pub mod profile_defaults {
    /// Default age in years
    pub const AGE_YEARS: u32 = 25;
    /// Default body weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Default height in centimeters
    pub const HEIGHT_CM: f64 = 170.0;
}

/// TDEE multipliers per activity level
pub mod activity_multipliers {
    /// Low activity (mostly sedentary)
    pub const LOW: f64 = 1.2;
    /// Moderate activity (3-5 sessions a week)
    pub const MODERATE: f64 = 1.55;
    /// High activity (6-7 sessions a week)
    pub const HIGH: f64 = 1.725;
}

/// Water intake in milliliters per kilogram of body weight
pub mod water_ml_per_kg {
    /// Low activity
    pub const LOW: f64 = 30.0;
    /// Moderate activity
    pub const MODERATE: f64 = 35.0;
    /// High activity
    pub const HIGH: f64 = 40.0;
}

/// Energy density of the macronutrients (kcal per gram)
pub mod energy_density {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Ratio-based goal adjustment applied to TDEE
pub mod goal_ratios {
    /// Weight loss: 20% deficit
    pub const WEIGHT_LOSS: f64 = 0.8;
    /// Weight gain: 10% surplus
    pub const WEIGHT_GAIN: f64 = 1.1;
    /// Muscle gain: 15% surplus
    pub const MUSCLE_GAIN: f64 = 1.15;
}

/// Flat-offset goal adjustment applied to BMR by the meal-plan paths
pub mod goal_offsets {
    /// Weight loss deficit in kcal
    pub const WEIGHT_LOSS_KCAL: i64 = -400;
    /// Weight or muscle gain surplus in kcal
    pub const GAIN_KCAL: i64 = 300;
}

/// Share of the day's calories assigned to each meal slot
pub mod slot_ratios {
    /// Breakfast share
    pub const BREAKFAST: f64 = 0.25;
    /// Lunch share
    pub const LUNCH: f64 = 0.35;
    /// Dinner share
    pub const DINNER: f64 = 0.30;
    /// Snacks share
    pub const SNACKS: f64 = 0.10;
}

/// BMI category boundaries (lower bound inclusive of the next category)
pub mod bmi_thresholds {
    /// Below this value: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this value: normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this value: overweight, otherwise obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Meal plan generation limits
pub mod meal_plan {
    /// Longest plan the engine produces, in days
    pub const MAX_DURATION_DAYS: u32 = 7;
    /// Shortest plan the engine produces, in days
    pub const MIN_DURATION_DAYS: u32 = 1;
}

/// Sentinel API key shipped in sample configuration files
///
/// A key equal to this value is treated exactly like a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";
