// ABOUTME: Explicit application state container with a pure reducer and derived selectors
// ABOUTME: Holds session, profile, draft plan and cached meals; selectors compute metrics and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application State
//!
//! Front ends keep one [`AppState`] and feed it [`AppAction`]s through
//! [`reduce`]. Nothing here performs I/O; derived values (health metrics,
//! today's totals, calorie progress) are recomputed by the selectors on
//! demand instead of being cached in the state.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::intelligence::daily_totals::{calculate_daily_totals_on, calculate_progress};
use crate::intelligence::nutrition_calculator::calculate_health_metrics;
use nutriplan_core::models::{
    DailyTotal, GeneratedMealPlan, HealthMetrics, LoggedMeal, UserProfile,
};

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier
    pub user_id: String,
    /// Email, when the auth collaborator provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Everything a front end keeps between screens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Current session
    pub session: Option<Session>,
    /// Profile of the signed-in user
    pub profile: Option<UserProfile>,
    /// Generated plan not yet saved
    pub draft_plan: Option<GeneratedMealPlan>,
    /// Meals loaded from storage, plus meals logged this session
    pub meals: Vec<LoggedMeal>,
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppAction {
    /// A user signed in
    SignedIn(Session),
    /// The user signed out; all user data is dropped
    SignedOut,
    /// Profile fetched or edited
    ProfileLoaded(UserProfile),
    /// A plan was generated and awaits saving
    DraftPlanGenerated(GeneratedMealPlan),
    /// The draft plan was saved or discarded
    DraftPlanCleared,
    /// Meals fetched from storage, replacing the cache
    MealsLoaded {
        /// Fetched meals
        meals: Vec<LoggedMeal>,
    },
    /// One meal was logged
    MealLogged(LoggedMeal),
}

/// Apply an action to a state
#[must_use]
pub fn reduce(state: AppState, action: AppAction) -> AppState {
    match action {
        AppAction::SignedIn(session) => {
            // A different user must not see the previous user's data
            let same_user = state
                .session
                .as_ref()
                .is_some_and(|current| current.user_id == session.user_id);
            let base = if same_user {
                state
            } else {
                AppState::default()
            };
            AppState {
                session: Some(session),
                ..base
            }
        }
        AppAction::SignedOut => AppState::default(),
        AppAction::ProfileLoaded(profile) => AppState {
            profile: Some(profile),
            ..state
        },
        AppAction::DraftPlanGenerated(plan) => AppState {
            draft_plan: Some(plan),
            ..state
        },
        AppAction::DraftPlanCleared => AppState {
            draft_plan: None,
            ..state
        },
        AppAction::MealsLoaded { meals } => AppState { meals, ..state },
        AppAction::MealLogged(meal) => {
            let mut meals = state.meals;
            meals.push(meal);
            AppState { meals, ..state }
        }
    }
}

/// Health metrics for the loaded profile
#[must_use]
pub fn select_health_metrics(state: &AppState) -> Option<HealthMetrics> {
    state.profile.as_ref().map(calculate_health_metrics)
}

/// Totals of the cached meals created on `date`
#[must_use]
pub fn select_totals_on(state: &AppState, date: NaiveDate) -> DailyTotal {
    let key = date.format("%Y-%m-%d").to_string();
    let meals: Vec<LoggedMeal> = state
        .meals
        .iter()
        .filter(|meal| meal.date_key() == key)
        .cloned()
        .collect();
    calculate_daily_totals_on(&meals, date)
}

/// Totals of the cached meals created today (local date)
#[must_use]
pub fn select_todays_totals(state: &AppState) -> DailyTotal {
    select_totals_on(state, Local::now().date_naive())
}

/// Percentage of the daily calorie goal reached on `date`, 0 without a profile
#[must_use]
pub fn select_calorie_progress_on(state: &AppState, date: NaiveDate) -> i64 {
    select_health_metrics(state).map_or(0, |metrics| {
        calculate_progress(
            select_totals_on(state, date).total_calories,
            metrics.daily_calorie_goal as f64,
        )
    })
}

/// Percentage of the daily calorie goal reached today (local date)
#[must_use]
pub fn select_calorie_progress(state: &AppState) -> i64 {
    select_calorie_progress_on(state, Local::now().date_naive())
}
