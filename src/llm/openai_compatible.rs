// ABOUTME: OpenAI-compatible chat-completion provider for plan generation and photo analysis
// ABOUTME: Sends one JSON request per call with bearer auth and maps HTTP failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat Completions Client
//!
//! Implementation of [`LlmProvider`] for any endpoint that speaks the
//! `OpenAI` chat completions API. Text and vision requests share the same
//! endpoint; a vision request simply carries image content parts.
//!
//! The provider never retries. Every failure (connect error, timeout,
//! non-2xx status, unreadable body, missing choice) is returned as an
//! [`AppError`] and the caller decides how to fall back.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{
    ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageContent, ResponseFormat,
    TokenUsage,
};
use crate::errors::{AppError, ErrorCode};

/// Service name used in error messages
const SERVICE_NAME: &str = "OpenAI";

/// Default base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default request timeout
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /chat/completions`
#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<OpenAiResponseFormat>,
}

/// Outgoing message; content is serialized as a string or a parts array
#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a MessageContent,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

/// `response_format` object
#[derive(Debug, Serialize)]
struct OpenAiResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

impl From<ResponseFormat> for OpenAiResponseFormat {
    fn from(format: ResponseFormat) -> Self {
        let format_type = match format {
            ResponseFormat::JsonObject => "json_object",
        };
        Self { format_type }
    }
}

/// Body of a successful completion
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Assistant message of a choice
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Token accounting
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Body of a non-2xx reply
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// `error` object of a non-2xx reply
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Endpoint, credentials and timeouts for [`OpenAiCompatibleProvider`]
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// API root, without the `/chat/completions` suffix
    pub base_url: String,
    /// Bearer API key
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Request timeout
    pub request_timeout: Duration,
}

impl OpenAiCompatibleConfig {
    /// Configuration for the hosted `OpenAI` API with the given key
    #[must_use]
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Point the provider at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Chat-completion client for `OpenAI` and compatible endpoints
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Build the HTTP client for a configuration
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the TLS backend cannot be initialized.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Join the base URL and an endpoint path
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Log message sizes for debugging LLM interactions
    fn log_messages_debug(messages: &[ChatMessage], model: &str) {
        for (i, msg) in messages.iter().enumerate() {
            debug!(
                "Message[{i}] role={}, content_len={}, images={}",
                msg.role.as_str(),
                msg.content.text_len(),
                msg.content.image_count()
            );
        }
        debug!(
            "Sending chat completion request to {SERVICE_NAME} model={model} with {} messages",
            messages.len()
        );
    }

    /// Map a non-2xx reply to an error carrying the upstream status
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        let code = status.as_u16();
        let error = if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body)
        {
            let message = error_response.error.message;
            match code {
                401 | 403 => AppError::new(
                    ErrorCode::ExternalAuthFailed,
                    format!("API authentication failed: {message}"),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("API rate limit reached: {message}"),
                ),
                500..=599 => AppError::external_unavailable(SERVICE_NAME, message),
                _ => {
                    let error_type = error_response
                        .error
                        .error_type
                        .unwrap_or_else(|| "unknown".to_owned());
                    AppError::external_service(SERVICE_NAME, format!("{error_type} - {message}"))
                }
            }
        } else {
            let preview = body.chars().take(200).collect::<String>();
            match code {
                502..=504 => AppError::external_unavailable(
                    SERVICE_NAME,
                    format!("Service is not responding: {preview}"),
                ),
                _ => AppError::external_service(SERVICE_NAME, format!("API error: {preview}")),
            }
        };
        error.with_upstream_status(code)
    }

    /// Attach the bearer token, if any
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        Self::log_messages_debug(&request.messages, model);

        let openai_request = OpenAiRequest {
            model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.response_format.map(OpenAiResponseFormat::from),
        };

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {SERVICE_NAME}: {e}");
                let app_error = if e.is_connect() || e.is_timeout() {
                    AppError::external_unavailable(SERVICE_NAME, format!("Failed to connect: {e}"))
                } else {
                    AppError::external_service(SERVICE_NAME, format!("Request failed: {e}"))
                };
                app_error.with_source(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {e}");
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {e}");
            AppError::invalid_format(format!("{SERVICE_NAME} response is not valid JSON: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::invalid_format(format!("{SERVICE_NAME} returned no choices")))?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            "Received response from {SERVICE_NAME}: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model.unwrap_or_else(|| model.to_owned()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let provider = OpenAiCompatibleProvider::new(
            OpenAiCompatibleConfig::openai("k").with_base_url("http://localhost:9999/v1/"),
        )
        .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn test_error_mapping_keeps_status() {
        let body = r#"{"error":{"message":"bad key","type":"invalid_request_error"}}"#;
        let error =
            OpenAiCompatibleProvider::parse_error_response(reqwest::StatusCode::UNAUTHORIZED, body);
        assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
        assert_eq!(error.upstream_status, Some(401));

        let error = OpenAiCompatibleProvider::parse_error_response(
            reqwest::StatusCode::BAD_GATEWAY,
            "<html>",
        );
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
        assert_eq!(error.upstream_status, Some(502));
    }

    #[test]
    fn test_request_serializes_json_mode() {
        let messages = vec![ChatMessage::user("hi")];
        let request = OpenAiRequest {
            model: "m",
            messages: messages.iter().map(OpenAiMessage::from).collect(),
            temperature: Some(0.7),
            max_tokens: Some(10),
            response_format: Some(ResponseFormat::JsonObject.into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["max_tokens"], 10);
    }
}
