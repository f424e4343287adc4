// ABOUTME: Meal-plan generation: AI request building, response coercion, and offline synthesis
// ABOUTME: Curated option tables, allergy and restriction filters, and weekday key translation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Generation
//!
//! [`MealPlanGenerator`] asks the configured text model for a plan and falls
//! back to [`synthesize_fallback_plan`] whenever that is impossible or the
//! answer is unusable. The two paths deliberately use different energy
//! figures:
//!
//! | Path     | BMR formula       | Daily calories            |
//! |----------|-------------------|---------------------------|
//! | AI       | Harris-Benedict   | BMR + flat goal offset    |
//! | Fallback | Mifflin-St Jeor   | BMR + flat goal offset    |
//!
//! The health dashboard uses a third policy (TDEE times a goal ratio), see
//! [`crate::intelligence::nutrition_calculator`].

/// Curated meal options per slot
pub mod catalog;
/// Lenient conversion of AI JSON into plan models
pub mod coercion;
/// English and persisted weekday key translation
pub mod day_keys;
/// Offline plan synthesizer
pub mod fallback;
/// Allergy, restriction and preference filtering
pub mod filters;
/// AI-first generator with fallback
pub mod generator;
/// User prompt construction
pub mod prompts;

pub use catalog::{options_for, safe_option, MealOption};
pub use coercion::coerce_generated_plan;
pub use day_keys::{from_english_keys, from_local_keys, resolve_day_key, to_local_keys};
pub use fallback::{
    clamp_duration, slot_calorie_budgets, synthesize_fallback_plan, PlanTargets,
};
pub use filters::{filter_options, filter_options_for_slot, Restriction};
pub use generator::MealPlanGenerator;
pub use prompts::{build_user_prompt, PromptEnergy};
