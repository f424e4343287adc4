// ABOUTME: Meal-plan generator orchestrating the AI path with the offline fallback
// ABOUTME: Every AI failure (transport, status, empty or malformed JSON) degrades to the synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::coercion::coerce_generated_plan;
use super::fallback::synthesize_fallback_plan;
use super::prompts::{build_user_prompt, PromptEnergy};
use crate::config::AiConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{
    get_meal_plan_system_prompt, strip_code_fences, ChatMessage, ChatRequest, LlmProvider,
    OpenAiCompatibleProvider, ResponseFormat,
};
use nutriplan_core::models::{GeneratedMealPlan, MealPlanOutcome, MealPlanRequest, PlanSource};

/// Sampling temperature of plan generation
const PLAN_TEMPERATURE: f32 = 0.7;

/// Produces meal plans, from the AI service when one is configured
///
/// `generate` never fails: without a provider, or when the provider call or
/// its output is unusable, the deterministic synthesizer answers instead.
#[derive(Clone)]
pub struct MealPlanGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
    model: Option<String>,
    max_tokens: u32,
}

impl MealPlanGenerator {
    /// Create a generator around an optional provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: None,
            max_tokens,
        }
    }

    /// Generator that only uses the offline synthesizer
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None, 0)
    }

    /// Override the model sent with each request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build a generator from application configuration
    ///
    /// A missing or placeholder key yields an offline generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let provider = match config.text_provider_config() {
            Some(provider_config) => {
                let provider: Arc<dyn LlmProvider> =
                    Arc::new(OpenAiCompatibleProvider::new(provider_config)?);
                Some(provider)
            }
            None => None,
        };
        Ok(Self::new(provider, config.plan_max_tokens))
    }

    /// Whether an AI provider is configured
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate a plan, seeding fallback entry ids from OS entropy
    pub async fn generate(&self, request: &MealPlanRequest) -> MealPlanOutcome {
        let mut rng = StdRng::from_entropy();
        self.generate_with_rng(request, &mut rng).await
    }

    /// Generate a plan with an explicit random source for fallback ids
    #[instrument(skip_all, fields(goal = request.goal.as_str(), duration = request.duration))]
    pub async fn generate_with_rng<R: Rng + Send>(
        &self,
        request: &MealPlanRequest,
        rng: &mut R,
    ) -> MealPlanOutcome {
        let Some(provider) = self.provider.as_deref() else {
            info!("No AI provider configured, using fallback meal plan");
            return Self::fallback(request, rng);
        };

        match self.generate_with_ai(provider, request).await {
            Ok(plan) => {
                info!(
                    days = plan.weekly_plan.len(),
                    daily_calories = plan.daily_calories,
                    "AI meal plan generated"
                );
                MealPlanOutcome {
                    plan,
                    source: PlanSource::Ai,
                }
            }
            Err(e) => {
                error!(
                    provider = provider.name(),
                    error = %e,
                    code = ?e.code,
                    upstream_status = ?e.upstream_status,
                    "AI meal plan generation failed, using fallback"
                );
                Self::fallback(request, rng)
            }
        }
    }

    fn fallback<R: Rng + ?Sized>(request: &MealPlanRequest, rng: &mut R) -> MealPlanOutcome {
        MealPlanOutcome {
            plan: synthesize_fallback_plan(request, rng),
            source: PlanSource::Fallback,
        }
    }

    async fn generate_with_ai(
        &self,
        provider: &dyn LlmProvider,
        request: &MealPlanRequest,
    ) -> AppResult<GeneratedMealPlan> {
        let energy = PromptEnergy::for_request(request);
        let mut chat_request = ChatRequest::new(vec![
            ChatMessage::system(get_meal_plan_system_prompt()),
            ChatMessage::user(build_user_prompt(request, &energy)),
        ])
        .with_temperature(PLAN_TEMPERATURE)
        .with_response_format(ResponseFormat::JsonObject);
        if self.max_tokens > 0 {
            chat_request = chat_request.with_max_tokens(self.max_tokens);
        }
        if let Some(model) = &self.model {
            chat_request = chat_request.with_model(model.clone());
        }

        let response = provider.complete(&chat_request).await?;
        if response.finish_reason.as_deref() == Some("length") {
            warn!("AI meal plan response was truncated by the token limit");
        }

        let body = strip_code_fences(&response.content);
        if body.is_empty() {
            return Err(AppError::invalid_format("AI returned an empty meal plan"));
        }
        let value: Value = serde_json::from_str(body).map_err(|e| {
            AppError::invalid_format(format!("AI meal plan is not valid JSON: {e}")).with_source(e)
        })?;

        coerce_generated_plan(&value, request, &energy.targets)
    }
}
