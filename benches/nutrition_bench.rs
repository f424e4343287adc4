// ABOUTME: Criterion benchmarks for the nutrition engine
// ABOUTME: Measures health metrics, fallback plan synthesis, AI plan coercion and meal aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition engine.
//!
//! Everything measured here is pure and network-free: the calculators, the
//! offline plan synthesizer, coercion of an AI plan document, and daily
//! totals over growing meal logs.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::intelligence::daily_totals::calculate_weekly_daily_totals;
use nutriplan::intelligence::meal_plan::{coerce_generated_plan, synthesize_fallback_plan, PlanTargets};
use nutriplan::intelligence::calculate_health_metrics;
use nutriplan::models::{
    ActivityLevel, Gender, Goal, LoggedMeal, MealPlanRequest, UserProfile,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

fn sample_profile() -> UserProfile {
    UserProfile {
        age: Some(34),
        weight: Some(82.5),
        height: Some(178.0),
        gender: Some(Gender::Female),
        activity_level: Some(ActivityLevel::High),
        goal: Some(Goal::WeightLoss),
        allergies: vec!["fıstık".to_owned()],
        dislikes: vec!["vegetarian".to_owned()],
        preferences: Vec::new(),
    }
}

/// Generate `count` meals spread over seven days
#[allow(clippy::cast_precision_loss)]
fn generate_meals(count: usize) -> Vec<LoggedMeal> {
    (0..count)
        .map(|index| LoggedMeal {
            created_at: format!("2025-03-{:02}T{:02}:00:00Z", 1 + index % 7, 7 + index % 12),
            total_calories: 150.0 + (index % 9) as f64 * 55.0,
            total_protein: 8.0 + (index % 5) as f64,
            total_carbs: 20.0 + (index % 7) as f64 * 3.0,
            total_fat: 5.0 + (index % 4) as f64,
        })
        .collect()
}

fn bench_health_metrics(c: &mut Criterion) {
    let profile = sample_profile();
    c.bench_function("health_metrics", |b| {
        b.iter(|| calculate_health_metrics(black_box(&profile)));
    });
}

fn bench_fallback_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_plan");

    for duration in [1_u32, 3, 7] {
        let request = MealPlanRequest::new(sample_profile(), Goal::WeightLoss, duration);
        group.throughput(Throughput::Elements(u64::from(duration)));
        group.bench_with_input(
            BenchmarkId::new("synthesize", duration),
            &request,
            |b, request| {
                let mut rng = ChaCha8Rng::seed_from_u64(42);
                b.iter(|| synthesize_fallback_plan(black_box(request), &mut rng));
            },
        );
    }

    group.finish();
}

fn bench_plan_coercion(c: &mut Criterion) {
    let request = MealPlanRequest::new(sample_profile(), Goal::Maintenance, 7);
    let targets = PlanTargets::from_daily_calories(2000, Goal::Maintenance);
    let entry = json!({
        "name": "Menemen",
        "calories": "420",
        "protein": 21,
        "carbs": 18.4,
        "fat": 28,
        "ingredients": ["eggs", "tomatoes", "peppers"],
        "instructions": "Cook everything in one pan."
    });
    let day = json!({
        "breakfast": [entry.clone()],
        "lunch": [entry.clone()],
        "dinner": [entry.clone()],
        "snack": [entry]
    });
    let document = json!({
        "name": "Plan",
        "daily_calories": 2000,
        "weekly_plan": {
            "monday": day.clone(), "tuesday": day.clone(), "wednesday": day.clone(),
            "thursday": day.clone(), "friday": day.clone(), "saturday": day.clone(),
            "sunday": day
        }
    });

    c.bench_function("coerce_ai_plan_7_days", |b| {
        b.iter(|| coerce_generated_plan(black_box(&document), &request, &targets));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_weekly_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_totals");

    for count in [21_usize, 100, 1_000] {
        let meals = generate_meals(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("group_by_day", count), &meals, |b, meals| {
            b.iter(|| calculate_weekly_daily_totals(black_box(meals)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_health_metrics,
    bench_fallback_plan,
    bench_plan_coercion,
    bench_weekly_totals,
);
criterion_main!(benches);
