// ABOUTME: Core types and constants for the nutriplan diet planning engine
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutriplan
//! nutrition engine. This crate changes infrequently, which keeps incremental
//! compilation of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Activity multipliers, macro energy densities, slot ratios and defaults
//! - **models**: User profile, meal plan, food analysis and meal log models

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants shared by every calorie computation
pub mod constants;

/// Core data models (profiles, meal plans, food analysis, meal logs)
pub mod models;
