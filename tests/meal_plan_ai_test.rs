// ABOUTME: Integration tests for AI meal-plan generation against a mock chat-completion server
// ABOUTME: Covers the AI path, provider failures, malformed replies and the disabled-key fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{chat_completion_body, init_test_logging, provider_for};
use nutriplan::config::AiConfig;
use nutriplan::constants::PLACEHOLDER_API_KEY;
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::MealPlanGenerator;
use nutriplan::llm::{ChatMessage, ChatRequest, LlmProvider};
use nutriplan::models::{DayKey, Goal, MealPlanRequest, PlanSource, UserProfile};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ai_plan_document() -> String {
    json!({
        "name": "Akdeniz Haftası",
        "description": "Zeytinyağlı ağırlıklı bir hafta",
        "goal": "weight_loss",
        "duration": 2,
        "daily_calories": 1800,
        "dailyProtein": "135",
        "daily_carbs": 180,
        "daily_fat": 60,
        "weekly_plan": {
            "monday": {
                "breakfast": [{
                    "name": "Menemen",
                    "calories": 450,
                    "protein": 22,
                    "carbs": 20,
                    "fat": 30,
                    "ingredients": ["eggs", "tomatoes"],
                    "instructions": ["Cook the vegetables", "Add the eggs"]
                }],
                "lunch": [],
                "dinner": [],
                "snack": {"name": "Elma", "calories": 95}
            },
            "tuesday": {"breakfast": [], "lunch": [], "dinner": [], "snacks": []},
            "funday": {"breakfast": [], "lunch": [], "dinner": [], "snacks": []}
        }
    })
    .to_string()
}

fn weight_loss_request() -> MealPlanRequest {
    MealPlanRequest::new(UserProfile::default(), Goal::WeightLoss, 2)
}

async fn mount_reply(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_ai_plan_is_coerced() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_completion_body(&ai_plan_document())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let generator = MealPlanGenerator::new(Some(provider_for(&server.uri())), 4000);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let outcome = generator
        .generate_with_rng(&weight_loss_request(), &mut rng)
        .await;

    assert_eq!(outcome.source, PlanSource::Ai);
    let plan = outcome.plan;
    assert_eq!(plan.name, "Akdeniz Haftası");
    assert_eq!(plan.goal, Goal::WeightLoss);
    assert_eq!(plan.daily_calories, 1800);
    assert_eq!(plan.daily_protein, 135);

    // Unknown day keys are dropped
    assert_eq!(plan.weekly_plan.len(), 2);
    let monday = plan.weekly_plan.day(DayKey::Monday).unwrap();
    assert_eq!(monday.breakfast[0].name, "Menemen");
    assert_eq!(monday.breakfast[0].instructions.len(), 2);
    assert!(!monday.breakfast[0].id.is_empty());
    assert_eq!(monday.snacks.len(), 1);
    assert_eq!(monday.total_calories(), 545);
}

#[tokio::test]
async fn test_fenced_reply_is_accepted() {
    init_test_logging();
    let server = MockServer::start().await;
    let fenced = format!("```json\n{}\n```", ai_plan_document());
    mount_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(chat_completion_body(&fenced)),
    )
    .await;

    let generator = MealPlanGenerator::new(Some(provider_for(&server.uri())), 0);
    let outcome = generator.generate(&weight_loss_request()).await;
    assert_eq!(outcome.source, PlanSource::Ai);
    assert_eq!(outcome.plan.daily_calories, 1800);
}

#[tokio::test]
async fn test_server_error_falls_back() {
    init_test_logging();
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(500)
            .set_body_json(json!({"error": {"message": "overloaded", "type": "server_error"}})),
    )
    .await;

    let generator = MealPlanGenerator::new(Some(provider_for(&server.uri())), 4000);
    let outcome = generator.generate(&weight_loss_request()).await;
    assert_eq!(outcome.source, PlanSource::Fallback);
    assert_eq!(outcome.plan.daily_calories, 1243);
    assert_eq!(outcome.plan.weekly_plan.len(), 2);
}

#[tokio::test]
async fn test_malformed_replies_fall_back() {
    init_test_logging();
    for content in ["", "Here is your plan!", "[1, 2, 3]"] {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(200).set_body_json(chat_completion_body(content)),
        )
        .await;

        let generator = MealPlanGenerator::new(Some(provider_for(&server.uri())), 4000);
        let outcome = generator.generate(&weight_loss_request()).await;
        assert_eq!(outcome.source, PlanSource::Fallback, "content={content:?}");
        assert_eq!(outcome.plan.daily_calories, 1243);
    }
}

#[tokio::test]
async fn test_placeholder_key_never_calls_the_service() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = AiConfig::from_lookup(|key| match key {
        "NUTRIPLAN_AI_API_KEY" => Some(PLACEHOLDER_API_KEY.to_owned()),
        "NUTRIPLAN_AI_BASE_URL" => Some(uri.clone()),
        _ => None,
    })
    .unwrap();
    let generator = MealPlanGenerator::from_config(&config).unwrap();
    assert!(!generator.has_provider());

    let outcome = generator.generate(&weight_loss_request()).await;
    assert_eq!(outcome.source, PlanSource::Fallback);
}

#[tokio::test]
async fn test_provider_maps_upstream_status() {
    init_test_logging();
    let server = MockServer::start().await;
    mount_reply(
        &server,
        ResponseTemplate::new(401).set_body_json(
            json!({"error": {"message": "Incorrect API key", "type": "invalid_request_error"}}),
        ),
    )
    .await;

    let provider = provider_for(&server.uri());
    let error = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
    assert_eq!(error.upstream_status, Some(401));
}
