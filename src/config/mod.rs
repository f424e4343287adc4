// ABOUTME: Configuration module for the external AI service and logging settings
// ABOUTME: Re-exports environment-driven AppConfig and AiConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for nutriplan
//!
//! Everything is read once from environment variables. A missing or
//! placeholder API key is not an error: it disables the AI paths and every
//! caller uses its deterministic fallback.

/// Environment variable parsing
pub mod environment;

pub use environment::{usable_api_key, AiConfig, AppConfig};
