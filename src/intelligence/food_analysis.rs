// ABOUTME: Food-photo analysis with a vision model and a canned mock fallback
// ABOUTME: Normalizes AI items into FoodAnalysisResult and formats results as loggable meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Photo Analysis
//!
//! [`FoodAnalyzer::analyze`] sends the photo and an extraction prompt to the
//! vision model when AI is requested and configured. Transport errors, error
//! statuses, malformed JSON and responses without items all degrade to a
//! randomly chosen canned template, so analysis always produces a result.
//!
//! Totals are always the sum of the items, on both paths.

use std::sync::Arc;

use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tracing::{error, info, instrument};

use crate::config::environment::defaults;
use crate::config::AiConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_calculator::round_half_up;
use crate::llm::{
    get_food_photo_analysis_prompt, strip_code_fences, ChatMessage, ChatRequest, LlmProvider,
    OpenAiCompatibleProvider, ResponseFormat,
};
use nutriplan_core::models::lenient::value_as_f64;
use nutriplan_core::models::{
    AnalysisType, FoodAnalysisResult, FoodItem, LoggableMeal, MealType, PhotoAnalysisRequest,
};

/// Portion text used when the model does not describe one
const DEFAULT_PORTION: &str = "1 porsiyon";

/// Sampling temperature of photo extraction
const VISION_TEMPERATURE: f32 = 0.2;

// ============================================================================
// Mock Templates
// ============================================================================

/// One item of a canned template
struct TemplateItem {
    name: &'static str,
    grams: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    confidence: f64,
}

impl TemplateItem {
    fn to_food_item(&self) -> FoodItem {
        FoodItem {
            name: self.name.to_owned(),
            grams: self.grams,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            confidence: Some(self.confidence),
        }
    }
}

/// A canned multi-item plate
struct MockTemplate {
    portion: &'static str,
    items: &'static [TemplateItem],
}

static MOCK_TEMPLATES: &[MockTemplate] = &[
    MockTemplate {
        portion: "1 tabak",
        items: &[
            TemplateItem {
                name: "Izgara Tavuk Göğsü",
                grams: 150.0,
                calories: 248.0,
                protein: 46.5,
                carbs: 0.0,
                fats: 5.4,
                confidence: 0.92,
            },
            TemplateItem {
                name: "Bulgur Pilavı",
                grams: 150.0,
                calories: 228.0,
                protein: 6.3,
                carbs: 45.0,
                fats: 3.2,
                confidence: 0.88,
            },
            TemplateItem {
                name: "Çoban Salata",
                grams: 120.0,
                calories: 66.0,
                protein: 1.4,
                carbs: 6.8,
                fats: 4.1,
                confidence: 0.85,
            },
        ],
    },
    MockTemplate {
        portion: "1 kase",
        items: &[
            TemplateItem {
                name: "Mercimek Çorbası",
                grams: 250.0,
                calories: 180.0,
                protein: 11.0,
                carbs: 27.0,
                fats: 3.5,
                confidence: 0.9,
            },
            TemplateItem {
                name: "Tam Buğday Ekmeği",
                grams: 50.0,
                calories: 123.0,
                protein: 4.5,
                carbs: 21.5,
                fats: 1.7,
                confidence: 0.83,
            },
        ],
    },
    MockTemplate {
        portion: "1 kahvaltı tabağı",
        items: &[
            TemplateItem {
                name: "Haşlanmış Yumurta",
                grams: 100.0,
                calories: 155.0,
                protein: 12.6,
                carbs: 1.1,
                fats: 10.6,
                confidence: 0.94,
            },
            TemplateItem {
                name: "Beyaz Peynir",
                grams: 40.0,
                calories: 106.0,
                protein: 6.6,
                carbs: 0.8,
                fats: 8.5,
                confidence: 0.87,
            },
            TemplateItem {
                name: "Domates ve Salatalık",
                grams: 150.0,
                calories: 30.0,
                protein: 1.3,
                carbs: 5.8,
                fats: 0.3,
                confidence: 0.89,
            },
            TemplateItem {
                name: "Zeytin",
                grams: 30.0,
                calories: 35.0,
                protein: 0.3,
                carbs: 1.8,
                fats: 3.2,
                confidence: 0.8,
            },
        ],
    },
    MockTemplate {
        portion: "1 tabak",
        items: &[
            TemplateItem {
                name: "Zeytinyağlı Taze Fasulye",
                grams: 200.0,
                calories: 160.0,
                protein: 4.0,
                carbs: 16.0,
                fats: 9.0,
                confidence: 0.86,
            },
            TemplateItem {
                name: "Yoğurt",
                grams: 150.0,
                calories: 92.0,
                protein: 5.3,
                carbs: 7.0,
                fats: 4.9,
                confidence: 0.9,
            },
        ],
    },
    MockTemplate {
        portion: "1 porsiyon",
        items: &[
            TemplateItem {
                name: "Fırın Somon",
                grams: 150.0,
                calories: 312.0,
                protein: 33.0,
                carbs: 0.0,
                fats: 19.5,
                confidence: 0.91,
            },
            TemplateItem {
                name: "Buharda Brokoli",
                grams: 100.0,
                calories: 35.0,
                protein: 2.4,
                carbs: 7.2,
                fats: 0.4,
                confidence: 0.88,
            },
            TemplateItem {
                name: "Haşlanmış Patates",
                grams: 150.0,
                calories: 130.0,
                protein: 2.9,
                carbs: 30.0,
                fats: 0.2,
                confidence: 0.82,
            },
        ],
    },
];

/// Build a mock result from a randomly chosen template
pub fn mock_analysis<R: Rng + ?Sized>(image_url: &str, rng: &mut R) -> FoodAnalysisResult {
    let template = &MOCK_TEMPLATES[rng.gen_range(0..MOCK_TEMPLATES.len())];
    FoodAnalysisResult::from_items(
        template.items.iter().map(TemplateItem::to_food_item).collect(),
        template.portion,
        image_url,
        AnalysisType::Mock,
    )
}

// ============================================================================
// AI Response Parsing
// ============================================================================

fn number_or_zero(object: &Map<String, Value>, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| object.get(*key))
        .and_then(value_as_f64)
        .map_or(0.0, |n| n.max(0.0))
}

fn parse_item(value: &Value) -> Option<FoodItem> {
    let object = value.as_object()?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())?;
    Some(FoodItem {
        name: name.to_owned(),
        grams: number_or_zero(object, &["grams", "weight"]),
        calories: number_or_zero(object, &["calories", "kcal"]),
        protein: number_or_zero(object, &["protein"]),
        carbs: number_or_zero(object, &["carbs", "carbohydrates"]),
        fats: number_or_zero(object, &["fats", "fat"]),
        confidence: object
            .get("confidence")
            .and_then(value_as_f64)
            .map(|c| c.clamp(0.0, 1.0)),
    })
}

/// Parse the vision model's reply into a result
///
/// # Errors
///
/// Returns `InvalidFormat` when the reply is not JSON, not an object, or
/// contains no usable items.
pub fn parse_analysis_response(content: &str, image_url: &str) -> AppResult<FoodAnalysisResult> {
    let body = strip_code_fences(content);
    let value: Value = serde_json::from_str(body).map_err(|e| {
        AppError::invalid_format(format!("Food analysis is not valid JSON: {e}")).with_source(e)
    })?;
    let object = value
        .as_object()
        .ok_or_else(|| AppError::invalid_format("Food analysis is not a JSON object"))?;

    let items: Vec<FoodItem> = object
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_item).collect())
        .unwrap_or_default();
    if items.is_empty() {
        return Err(AppError::invalid_format(
            "Food analysis contains no recognized items",
        ));
    }

    let portion = object
        .get("portion")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|portion| !portion.is_empty())
        .unwrap_or(DEFAULT_PORTION);
    Ok(FoodAnalysisResult::from_items(
        items,
        portion,
        image_url,
        AnalysisType::Ai,
    ))
}

// ============================================================================
// Analyzer
// ============================================================================

/// Analyzes food photos with an optional vision provider
#[derive(Clone)]
pub struct FoodAnalyzer {
    provider: Option<Arc<dyn LlmProvider>>,
    max_tokens: u32,
}

impl FoodAnalyzer {
    /// Create an analyzer around an optional vision provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            max_tokens: defaults::VISION_MAX_TOKENS,
        }
    }

    /// Analyzer that only produces mock results
    #[must_use]
    pub fn mock_only() -> Self {
        Self::new(None)
    }

    /// Build an analyzer from application configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let provider = match config.vision_provider_config() {
            Some(provider_config) => {
                let provider: Arc<dyn LlmProvider> =
                    Arc::new(OpenAiCompatibleProvider::new(provider_config)?);
                Some(provider)
            }
            None => None,
        };
        Ok(Self::new(provider))
    }

    /// Analyze a photo, choosing mock templates from OS entropy
    pub async fn analyze(&self, request: &PhotoAnalysisRequest) -> FoodAnalysisResult {
        let mut rng = StdRng::from_entropy();
        self.analyze_with_rng(request, &mut rng).await
    }

    /// Analyze a photo with an explicit random source for the mock path
    #[instrument(skip_all, fields(use_ai = request.use_ai))]
    pub async fn analyze_with_rng<R: Rng + Send>(
        &self,
        request: &PhotoAnalysisRequest,
        rng: &mut R,
    ) -> FoodAnalysisResult {
        if !request.use_ai {
            return mock_analysis(&request.image_url, rng);
        }
        let Some(provider) = self.provider.as_deref() else {
            info!("AI photo analysis requested but no API key is configured, using mock analysis");
            return mock_analysis(&request.image_url, rng);
        };

        match self.analyze_with_ai(provider, &request.image_url).await {
            Ok(result) => {
                info!(items = result.items.len(), "AI photo analysis completed");
                result
            }
            Err(e) => {
                error!(
                    provider = provider.name(),
                    error = %e,
                    code = ?e.code,
                    upstream_status = ?e.upstream_status,
                    "AI photo analysis failed, using mock analysis"
                );
                mock_analysis(&request.image_url, rng)
            }
        }
    }

    async fn analyze_with_ai(
        &self,
        provider: &dyn LlmProvider,
        image_url: &str,
    ) -> AppResult<FoodAnalysisResult> {
        let chat_request = ChatRequest::new(vec![ChatMessage::user_with_image(
            get_food_photo_analysis_prompt(),
            image_url,
        )])
        .with_temperature(VISION_TEMPERATURE)
        .with_max_tokens(self.max_tokens)
        .with_response_format(ResponseFormat::JsonObject);

        let response = provider.complete(&chat_request).await?;
        parse_analysis_response(&response.content, image_url)
    }
}

// ============================================================================
// Meal Formatting
// ============================================================================

/// Format an analysis as a loggable meal, typed by the current local hour
#[must_use]
pub fn format_as_meal(result: &FoodAnalysisResult, user_id: &str) -> LoggableMeal {
    format_as_meal_at(result, user_id, Local::now().hour())
}

/// Format an analysis as a loggable meal for an explicit hour (0-23)
#[must_use]
pub fn format_as_meal_at(result: &FoodAnalysisResult, user_id: &str, hour: u32) -> LoggableMeal {
    let name = result
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    LoggableMeal {
        user_id: user_id.to_owned(),
        name,
        total_calories: round_half_up(result.totals.calories),
        total_protein: round_half_up(result.totals.protein),
        total_carbs: round_half_up(result.totals.carbs),
        total_fat: round_half_up(result.totals.fats),
        meal_type: MealType::from_hour(hour),
        image_url: result.image_url.clone(),
        portion: result.portion.clone(),
        items: result.items.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mock_totals_are_sums() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..20 {
            let result = mock_analysis("https://img/plate.jpg", &mut rng);
            let calories: f64 = result.items.iter().map(|item| item.calories).sum();
            assert!((result.totals.calories - calories).abs() < 1e-9);
            assert!(result.items.len() >= 2);
            assert_eq!(result.analysis_type, AnalysisType::Mock);
        }
    }

    #[test]
    fn test_parse_coerces_missing_numbers_and_clamps_confidence() {
        let content = r#"```json
{"items":[{"name":"Pilav","calories":"200","confidence":1.7},{"name":"Ayran","protein":3}],"portion":""}
```"#;
        let result = parse_analysis_response(content, "u").unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].confidence, Some(1.0));
        assert!(result.items[1].calories.abs() < f64::EPSILON);
        assert!((result.totals.calories - 200.0).abs() < f64::EPSILON);
        assert_eq!(result.portion, DEFAULT_PORTION);
        assert_eq!(result.analysis_type, AnalysisType::Ai);
    }

    #[test]
    fn test_parse_rejects_empty_items() {
        assert!(parse_analysis_response(r#"{"items":[]}"#, "u").is_err());
        assert!(parse_analysis_response(r#"{"portion":"1"}"#, "u").is_err());
        assert!(parse_analysis_response("plain text", "u").is_err());
    }

    #[test]
    fn test_format_as_meal_rounds_and_joins() {
        let result = FoodAnalysisResult::from_items(
            vec![
                FoodItem {
                    name: "Menemen".to_owned(),
                    grams: 200.0,
                    calories: 250.5,
                    protein: 12.4,
                    carbs: 10.5,
                    fats: 18.49,
                    confidence: None,
                },
                FoodItem {
                    name: "Simit".to_owned(),
                    grams: 100.0,
                    calories: 280.0,
                    protein: 9.0,
                    carbs: 50.0,
                    fats: 6.0,
                    confidence: None,
                },
            ],
            "1 tabak",
            "https://img",
            AnalysisType::Ai,
        );
        let meal = format_as_meal_at(&result, "user-1", 8);
        assert_eq!(meal.name, "Menemen, Simit");
        assert_eq!(meal.total_calories, 531);
        assert_eq!(meal.total_protein, 21);
        assert_eq!(meal.total_carbs, 61);
        assert_eq!(meal.total_fat, 24);
        assert_eq!(meal.meal_type, MealType::Breakfast);
        assert_eq!(format_as_meal_at(&result, "u", 16).meal_type, MealType::Snack);
    }
}
