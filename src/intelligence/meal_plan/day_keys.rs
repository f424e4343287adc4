// ABOUTME: Bidirectional weekday key translation between generated and persisted meal plans
// ABOUTME: English keys (monday..sunday) map to local keys (pazartesi..pazar); unknown keys are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use tracing::warn;

use nutriplan_core::models::{DayKey, DayPlan, WeeklyPlan};

/// Persisted form of a plan: local day keys to day plans
#[must_use]
pub fn to_local_keys(plan: &WeeklyPlan) -> BTreeMap<String, DayPlan> {
    plan.days
        .iter()
        .map(|(day, day_plan)| (day.local_key().to_owned(), day_plan.clone()))
        .collect()
}

/// Read a persisted plan keyed by local day names
///
/// Keys that are not local day names are dropped with a warning.
#[must_use]
pub fn from_local_keys(days: BTreeMap<String, DayPlan>) -> WeeklyPlan {
    translate(days, DayKey::from_local_key, "local")
}

/// Read a plan keyed by English day names
///
/// Keys that are not English day names are dropped with a warning.
#[must_use]
pub fn from_english_keys(days: BTreeMap<String, DayPlan>) -> WeeklyPlan {
    translate(days, DayKey::from_english_key, "english")
}

/// Resolve a day key in either vocabulary
#[must_use]
pub fn resolve_day_key(key: &str) -> Option<DayKey> {
    DayKey::from_english_key(key).or_else(|| DayKey::from_local_key(key))
}

fn translate(
    days: BTreeMap<String, DayPlan>,
    lookup: fn(&str) -> Option<DayKey>,
    vocabulary: &str,
) -> WeeklyPlan {
    let mut plan = WeeklyPlan::default();
    for (key, day_plan) in days {
        match lookup(&key) {
            Some(day) => {
                plan.days.insert(day, day_plan);
            }
            None => warn!(day_key = %key, vocabulary, "dropping unrecognized day key"),
        }
    }
    plan
}
