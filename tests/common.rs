// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging, sample profiles and chat-completion mock helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`
//!
//! Each integration test binary includes this module with `mod common;`
//! and uses the subset it needs.

use std::sync::{Arc, Once};
use std::time::Duration;

use nutriplan::llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider};
use nutriplan::models::{ActivityLevel, Gender, Goal, LoggedMeal, UserProfile};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fully specified profile
pub fn profile(
    age: u32,
    weight: f64,
    height: f64,
    gender: Gender,
    activity_level: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        age: Some(age),
        weight: Some(weight),
        height: Some(height),
        gender: Some(gender),
        activity_level: Some(activity_level),
        goal: Some(goal),
        ..UserProfile::default()
    }
}

/// Logged meal with the given timestamp and calories
pub fn logged_meal(created_at: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> LoggedMeal {
    LoggedMeal {
        created_at: created_at.to_owned(),
        total_calories: calories,
        total_protein: protein,
        total_carbs: carbs,
        total_fat: fat,
    }
}

/// Chat-completion response body carrying `content` as the first choice
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
    })
}

/// Provider pointed at a mock server
pub fn provider_for(base_url: &str) -> Arc<dyn LlmProvider> {
    let config = OpenAiCompatibleConfig::openai("test-key")
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(5));
    Arc::new(OpenAiCompatibleProvider::new(config).unwrap())
}
