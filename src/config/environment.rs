// ABOUTME: Environment configuration for the external AI service and logging
// ABOUTME: Parses NUTRIPLAN_* variables and treats empty or placeholder API keys as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::info;

use crate::constants::PLACEHOLDER_API_KEY;
use crate::llm::OpenAiCompatibleConfig;
use crate::logging::{LogFormat, LoggingConfig};

/// Environment variable names
pub mod env_keys {
    /// Primary API key variable
    pub const AI_API_KEY: &str = "NUTRIPLAN_AI_API_KEY";
    /// Secondary API key variable, read when the primary one is unset
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// OpenAI-compatible base URL
    pub const AI_BASE_URL: &str = "NUTRIPLAN_AI_BASE_URL";
    /// Plan generation model
    pub const TEXT_MODEL: &str = "NUTRIPLAN_TEXT_MODEL";
    /// Photo analysis model
    pub const VISION_MODEL: &str = "NUTRIPLAN_VISION_MODEL";
    /// Request timeout in seconds
    pub const AI_TIMEOUT_SECS: &str = "NUTRIPLAN_AI_TIMEOUT_SECS";
    /// Max tokens for plan generation
    pub const PLAN_MAX_TOKENS: &str = "NUTRIPLAN_PLAN_MAX_TOKENS";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Defaults for the AI service settings
pub mod defaults {
    /// Hosted `OpenAI` API
    pub const AI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Plan generation model
    pub const TEXT_MODEL: &str = "gpt-4o-mini";
    /// Photo analysis model
    pub const VISION_MODEL: &str = "gpt-4o";
    /// Request timeout in seconds
    pub const AI_TIMEOUT_SECS: u64 = 60;
    /// Max tokens for plan generation
    pub const PLAN_MAX_TOKENS: u32 = 4000;
    /// Max tokens for photo analysis
    pub const VISION_MAX_TOKENS: u32 = 1000;
}

/// Keep a key only if it is non-empty and not the sample-config sentinel
#[must_use]
pub fn usable_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_owned())
        .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
}

/// External AI service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// API key; `None` disables every AI path
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Model for meal-plan generation
    pub text_model: String,
    /// Model for food-photo analysis
    pub vision_model: String,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max tokens for meal-plan generation
    pub plan_max_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::AI_BASE_URL.to_owned(),
            text_model: defaults::TEXT_MODEL.to_owned(),
            vision_model: defaults::VISION_MODEL.to_owned(),
            request_timeout: Duration::from_secs(defaults::AI_TIMEOUT_SECS),
            plan_max_tokens: defaults::PLAN_MAX_TOKENS,
        }
    }
}

impl AiConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = usable_api_key(lookup(env_keys::AI_API_KEY))
            .or_else(|| usable_api_key(lookup(env_keys::OPENAI_API_KEY)));
        let var_or = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let timeout_secs: u64 = var_or(
            env_keys::AI_TIMEOUT_SECS,
            &defaults::AI_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .context("Invalid NUTRIPLAN_AI_TIMEOUT_SECS value")?;
        let plan_max_tokens: u32 = var_or(
            env_keys::PLAN_MAX_TOKENS,
            &defaults::PLAN_MAX_TOKENS.to_string(),
        )
        .parse()
        .context("Invalid NUTRIPLAN_PLAN_MAX_TOKENS value")?;

        Ok(Self {
            api_key,
            base_url: var_or(env_keys::AI_BASE_URL, defaults::AI_BASE_URL),
            text_model: var_or(env_keys::TEXT_MODEL, defaults::TEXT_MODEL),
            vision_model: var_or(env_keys::VISION_MODEL, defaults::VISION_MODEL),
            request_timeout: Duration::from_secs(timeout_secs),
            plan_max_tokens,
        })
    }

    /// Whether the AI paths may be attempted
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Provider configuration for the text model, or `None` without a key
    #[must_use]
    pub fn text_provider_config(&self) -> Option<OpenAiCompatibleConfig> {
        self.provider_config(&self.text_model)
    }

    /// Provider configuration for the vision model, or `None` without a key
    #[must_use]
    pub fn vision_provider_config(&self) -> Option<OpenAiCompatibleConfig> {
        self.provider_config(&self.vision_model)
    }

    fn provider_config(&self, model: &str) -> Option<OpenAiCompatibleConfig> {
        let api_key = self.api_key.as_ref()?;
        Some(
            OpenAiCompatibleConfig::openai(api_key.clone())
                .with_base_url(self.base_url.clone())
                .with_default_model(model)
                .with_request_timeout(self.request_timeout),
        )
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// External AI service
    pub ai: AiConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse
    pub fn from_env() -> Result<Self> {
        let config = Self {
            ai: AiConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        info!("{}", config.summary());
        Ok(config)
    }

    /// Configuration summary for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "nutriplan configuration: ai={}, base_url={}, text_model={}, vision_model={}, timeout={}s, log_format={}",
            if self.ai.is_enabled() {
                "enabled"
            } else {
                "disabled (fallback only)"
            },
            self.ai.base_url,
            self.ai.text_model,
            self.ai.vision_model,
            self.ai.request_timeout.as_secs(),
            match self.logging.format {
                LogFormat::Json => "json",
                LogFormat::Pretty => "pretty",
                LogFormat::Compact => "compact",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_placeholder_key_disables_ai() {
        let config =
            AiConfig::from_lookup(lookup(&[(env_keys::AI_API_KEY, PLACEHOLDER_API_KEY)])).unwrap();
        assert!(!config.is_enabled());
        assert!(config.text_provider_config().is_none());
    }

    #[test]
    fn test_blank_key_disables_ai() {
        let config = AiConfig::from_lookup(lookup(&[(env_keys::AI_API_KEY, "   ")])).unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_blank_primary_key_uses_secondary() {
        let config = AiConfig::from_lookup(lookup(&[
            (env_keys::AI_API_KEY, ""),
            (env_keys::OPENAI_API_KEY, "sk-fallback"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-fallback"));
    }

    #[test]
    fn test_secondary_key_and_defaults() {
        let config = AiConfig::from_lookup(lookup(&[(env_keys::OPENAI_API_KEY, "sk-test")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.text_model, defaults::TEXT_MODEL);
        assert_eq!(config.vision_model, defaults::VISION_MODEL);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.plan_max_tokens, 4000);

        let provider = config.vision_provider_config().unwrap();
        assert_eq!(provider.default_model, "gpt-4o");
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let result = AiConfig::from_lookup(lookup(&[(env_keys::AI_TIMEOUT_SECS, "soon")]));
        assert!(result.is_err());
    }
}
