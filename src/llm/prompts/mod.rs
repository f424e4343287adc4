// ABOUTME: Prompts for meal-plan generation and food-photo analysis loaded at compile time
// ABOUTME: Provides the dietitian system prompt and the structured photo-extraction prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Static prompts are kept in markdown files next to this module and
//! embedded at compile time. The per-request meal-plan user prompt is built
//! in `intelligence::meal_plan::prompts`.

/// Dietitian persona for meal-plan generation
///
/// Contains:
/// - Hard allergy and restriction rules
/// - Slot calorie shares (25/35/30/10)
/// - The JSON shape the response must follow
pub const MEAL_PLAN_SYSTEM_PROMPT: &str = include_str!("meal_plan_system.md");

/// Structured-extraction prompt sent with a food photo
pub const FOOD_PHOTO_ANALYSIS_PROMPT: &str = include_str!("food_photo_analysis.md");

/// Get the meal-plan system prompt
#[must_use]
pub const fn get_meal_plan_system_prompt() -> &'static str {
    MEAL_PLAN_SYSTEM_PROMPT
}

/// Get the food-photo analysis prompt
#[must_use]
pub const fn get_food_photo_analysis_prompt() -> &'static str {
    FOOD_PHOTO_ANALYSIS_PROMPT
}
