// ABOUTME: Core data models for the nutriplan engine
// ABOUTME: Re-exports profile, meal plan, food analysis, and meal log structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shapes consumed and produced by the nutrition engine. The
//! storage and presentation collaborators own persistence; these types only
//! describe what crosses the boundary.
//!
//! ## Design Principles
//!
//! - **Forgiving input**: profile and meal-log fields tolerate absent or
//!   half-typed values (they come from in-progress form input)
//! - **Serializable**: every model round-trips through JSON with the wire
//!   names used by the storage collaborator
//! - **Derived values are computed**: totals are always sums, never stored
//!   independently

mod food;
pub mod lenient;
mod meal_log;
mod meal_plan;
mod profile;

pub use food::{
    AnalysisType, FoodAnalysisResult, FoodItem, NutritionTotals, PhotoAnalysisRequest,
};
pub use meal_log::{DailyTotal, LoggableMeal, LoggedMeal, MealType};
pub use meal_plan::{
    DayKey, DayPlan, GeneratedMealPlan, MealPlanEntry, MealPlanOutcome, MealPlanRequest,
    MealSlot, PlanSource, WeeklyPlan,
};
pub use profile::{
    ActivityLevel, BmiCategory, Gender, Goal, HealthMetrics, IdealWeightRange, MacroGoals,
    MacroRatios, UserProfile,
};
