// ABOUTME: Defensive conversion of AI-generated JSON into a GeneratedMealPlan
// ABOUTME: Missing arrays become empty, missing numbers fall back to targets, unknown days are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! AI response coercion
//!
//! The model's JSON is only required to be an object. Everything inside it
//! is read leniently: numbers may be strings, arrays may be missing, slots
//! may be named `snack` instead of `snacks`, and day keys may arrive in
//! either vocabulary. Unrecognized day keys are dropped with a warning.

use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use super::day_keys::resolve_day_key;
use super::fallback::{clamp_duration, plan_name, PlanTargets};
use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_calculator::round_half_up;
use nutriplan_core::models::lenient::{value_as_f64, LossyEnum};
use nutriplan_core::models::{
    DayPlan, GeneratedMealPlan, Goal, MealPlanEntry, MealPlanRequest, MealSlot, WeeklyPlan,
};

/// First present value among alternative keys
fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    field(object, keys)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

fn int_field(object: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    field(object, keys)
        .and_then(value_as_f64)
        .map(round_half_up)
}

/// Array of strings, a single string, or nothing
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.trim().to_owned()),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .filter(|text| !text.is_empty())
            .collect(),
        Some(Value::String(text)) if !text.trim().is_empty() => vec![text.trim().to_owned()],
        _ => Vec::new(),
    }
}

fn coerce_entry(value: &Value) -> Option<MealPlanEntry> {
    let object = value.as_object()?;
    Some(MealPlanEntry {
        id: string_field(object, &["id"]).unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: string_field(object, &["name", "title"]).unwrap_or_else(|| "Öğün".to_owned()),
        description: string_field(object, &["description"]),
        calories: int_field(object, &["calories", "kcal"]).unwrap_or(0),
        protein: int_field(object, &["protein"]).unwrap_or(0),
        carbs: int_field(object, &["carbs", "carbohydrates"]).unwrap_or(0),
        fat: int_field(object, &["fat", "fats"]).unwrap_or(0),
        ingredients: string_list(object.get("ingredients")),
        instructions: string_list(object.get("instructions")),
    })
}

fn slot_aliases(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &["breakfast", "kahvalti"],
        MealSlot::Lunch => &["lunch", "ogle"],
        MealSlot::Dinner => &["dinner", "aksam"],
        MealSlot::Snacks => &["snacks", "snack", "ara_ogun"],
    }
}

fn coerce_day(value: &Value) -> DayPlan {
    let mut day_plan = DayPlan::default();
    let Some(object) = value.as_object() else {
        return day_plan;
    };
    for slot in MealSlot::ALL {
        let entries = match field(object, slot_aliases(slot)) {
            Some(Value::Array(items)) => items.iter().filter_map(coerce_entry).collect(),
            // A single meal object instead of a list
            Some(single @ Value::Object(_)) => coerce_entry(single).into_iter().collect(),
            _ => Vec::new(),
        };
        *day_plan.slot_mut(slot) = entries;
    }
    day_plan
}

fn coerce_weekly_plan(value: Option<&Value>) -> WeeklyPlan {
    let mut plan = WeeklyPlan::default();
    let Some(days) = value.and_then(Value::as_object) else {
        return plan;
    };
    for (key, day_value) in days {
        match resolve_day_key(key) {
            Some(day) => {
                plan.days.insert(day, coerce_day(day_value));
            }
            None => warn!(day_key = %key, "dropping unrecognized day key from AI plan"),
        }
    }
    plan
}

/// Convert a parsed AI response into a plan
///
/// Absent plan-level numbers fall back to `targets`, the figures the
/// request was generated against.
///
/// # Errors
///
/// Returns `InvalidFormat` when the document is not a JSON object.
pub fn coerce_generated_plan(
    value: &Value,
    request: &MealPlanRequest,
    targets: &PlanTargets,
) -> AppResult<GeneratedMealPlan> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::invalid_format("AI meal plan is not a JSON object"))?;

    let goal = field(object, &["goal"])
        .and_then(Value::as_str)
        .and_then(Goal::parse_lossy)
        .unwrap_or(request.goal);
    let duration = int_field(object, &["duration"])
        .and_then(|days| u32::try_from(days).ok())
        .map_or_else(|| clamp_duration(request.duration), clamp_duration);

    Ok(GeneratedMealPlan {
        name: string_field(object, &["name"]).unwrap_or_else(|| plan_name(goal)),
        description: string_field(object, &["description"]).unwrap_or_default(),
        goal,
        duration,
        daily_calories: int_field(object, &["daily_calories", "dailyCalories"])
            .unwrap_or(targets.daily_calories),
        daily_protein: int_field(object, &["daily_protein", "dailyProtein"])
            .unwrap_or(targets.macros.protein),
        daily_carbs: int_field(object, &["daily_carbs", "dailyCarbs"])
            .unwrap_or(targets.macros.carbs),
        daily_fat: int_field(object, &["daily_fat", "dailyFat"]).unwrap_or(targets.macros.fat),
        weekly_plan: coerce_weekly_plan(field(object, &["weekly_plan", "weeklyPlan"])),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{DayKey, UserProfile};
    use serde_json::json;

    fn request() -> MealPlanRequest {
        MealPlanRequest::new(UserProfile::default(), Goal::WeightLoss, 7)
    }

    #[test]
    fn test_non_object_is_rejected() {
        let targets = PlanTargets::from_daily_calories(1500, Goal::WeightLoss);
        let error = coerce_generated_plan(&json!([1, 2]), &request(), &targets).unwrap_err();
        assert_eq!(error.code, nutriplan_core::errors::ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let targets = PlanTargets::from_daily_calories(1500, Goal::WeightLoss);
        let plan = coerce_generated_plan(&json!({}), &request(), &targets).unwrap();
        assert_eq!(plan.name, "Kilo Verme Planı");
        assert_eq!(plan.daily_calories, 1500);
        assert_eq!(plan.daily_protein, targets.macros.protein);
        assert_eq!(plan.duration, 7);
        assert!(plan.weekly_plan.is_empty());
    }

    #[test]
    fn test_days_slots_and_entries_are_coerced() {
        let targets = PlanTargets::from_daily_calories(1500, Goal::WeightLoss);
        let value = json!({
            "name": "Plan",
            "daily_calories": "1450",
            "weekly_plan": {
                "monday": {
                    "breakfast": [{"name": "Menemen", "calories": "320.4", "protein": 18, "ingredients": "eggs"}],
                    "snack": {"name": "Ayran", "calories": 70},
                    "dinner": "none"
                },
                "cuma": {"lunch": [{"calories": 500}, 42]},
                "someday": {}
            }
        });
        let plan = coerce_generated_plan(&value, &request(), &targets).unwrap();
        assert_eq!(plan.daily_calories, 1450);
        assert_eq!(plan.weekly_plan.len(), 2);

        let monday = plan.weekly_plan.day(DayKey::Monday).unwrap();
        assert_eq!(monday.breakfast[0].calories, 320);
        assert_eq!(monday.breakfast[0].carbs, 0);
        assert_eq!(monday.breakfast[0].ingredients, vec!["eggs".to_owned()]);
        assert_eq!(monday.snacks[0].name, "Ayran");
        assert!(monday.dinner.is_empty());
        assert!(monday.lunch.is_empty());

        let friday = plan.weekly_plan.day(DayKey::Friday).unwrap();
        assert_eq!(friday.lunch.len(), 1);
        assert_eq!(friday.lunch[0].name, "Öğün");
        assert!(!friday.lunch[0].id.is_empty());
    }
}
