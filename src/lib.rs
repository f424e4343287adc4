// ABOUTME: Main library entry point for the nutriplan nutrition engine
// ABOUTME: Health metrics, daily totals, AI meal plans with offline fallback, and food-photo analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! The nutrition core of a diet tracking application. Screens, storage,
//! authentication and uploads are external collaborators; this crate
//! computes and generates everything in between.
//!
//! ## Features
//!
//! - **Health metrics**: BMR (Mifflin-St Jeor and Harris-Benedict), TDEE,
//!   BMI with categories, macro goals, water intake and ideal weight range
//! - **Daily totals**: per-day nutrition sums and capped goal progress
//! - **Meal plans**: AI-generated weekly plans with a deterministic offline
//!   fallback that honors allergies and dietary restrictions
//! - **Food photos**: vision-model analysis with a canned fallback, formatted
//!   as loggable meals
//!
//! ## Architecture
//!
//! - **`nutriplan-core`**: errors, constants and data models
//! - **Intelligence**: calculators and generators
//! - **LLM**: provider trait and an OpenAI-compatible HTTP client
//! - **Config / Logging**: environment-driven settings and `tracing` setup
//! - **State**: explicit application state with a pure reducer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::AppConfig;
//! use nutriplan::intelligence::{calculate_health_metrics, MealPlanGenerator};
//! use nutriplan::models::{Goal, MealPlanRequest, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let profile = UserProfile::default();
//!     let metrics = calculate_health_metrics(&profile);
//!     println!("Daily goal: {} kcal", metrics.daily_calorie_goal);
//!
//!     let generator = MealPlanGenerator::from_config(&config.ai)?;
//!     let outcome = generator
//!         .generate(&MealPlanRequest::new(profile, Goal::WeightLoss, 7))
//!         .await;
//!     println!("{} ({:?})", outcome.plan.name, outcome.source);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Nutrition calculators, meal-plan generation and photo analysis
pub mod intelligence;

/// LLM provider abstraction and HTTP client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Application state container and selectors
pub mod state;

pub use nutriplan_core::{constants, errors, models};
