// ABOUTME: Deterministic offline meal-plan synthesizer used when the AI service is unavailable
// ABOUTME: Splits flat-offset daily calories into slot budgets and cycles through filtered options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback meal-plan synthesis
//!
//! Daily calories come from Mifflin-St Jeor BMR plus the flat goal offset,
//! never the ratio policy of the health dashboard. Slot budgets are 25/35/30/10
//! percent of that total, each rounded on its own, and macros per entry use
//! the meal-plan ratio table scaled to the slot budget.
//!
//! Option selection depends only on the request: day `i` takes
//! `options[i % options.len()]` in each slot. The random source is used for
//! entry ids alone, so two runs with the same request differ only in ids.

use rand::Rng;
use uuid::Builder;

use super::catalog::MealOption;
use super::filters::filter_options_for_slot;
use crate::intelligence::nutrition_calculator::{
    apply_flat_goal_offset, calculate_bmr, get_macro_ratios_for_goal, macro_grams,
    round_half_up,
};
use nutriplan_core::constants::{meal_plan, slot_ratios};
use nutriplan_core::models::{
    DayKey, DayPlan, GeneratedMealPlan, Goal, MacroGoals, MacroRatios, MealPlanEntry,
    MealPlanRequest, MealSlot, UserProfile, WeeklyPlan,
};

/// Day-level targets a plan is generated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTargets {
    /// Daily calories
    pub daily_calories: i64,
    /// Meal-plan macro ratios for the goal
    pub ratios: MacroRatios,
    /// Daily macro grams
    pub macros: MacroGoals,
}

impl PlanTargets {
    /// Targets of the offline path: Mifflin-St Jeor BMR with the flat goal offset
    #[must_use]
    pub fn for_fallback(profile: &UserProfile, goal: Goal) -> Self {
        let bmr = calculate_bmr(
            profile.weight_or_default(),
            profile.height_or_default(),
            profile.age_or_default(),
            profile.gender_or_default(),
        );
        Self::from_daily_calories(apply_flat_goal_offset(bmr, goal), goal)
    }

    /// Targets for a known calorie total
    #[must_use]
    pub fn from_daily_calories(daily_calories: i64, goal: Goal) -> Self {
        let ratios = get_macro_ratios_for_goal(goal);
        Self {
            daily_calories,
            ratios,
            macros: macro_grams(daily_calories as f64, ratios),
        }
    }
}

/// Share of the day's calories for a slot
#[must_use]
pub const fn slot_ratio(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => slot_ratios::BREAKFAST,
        MealSlot::Lunch => slot_ratios::LUNCH,
        MealSlot::Dinner => slot_ratios::DINNER,
        MealSlot::Snacks => slot_ratios::SNACKS,
    }
}

/// Calorie budget of each slot, rounded independently
#[must_use]
pub fn slot_calorie_budgets(daily_calories: i64) -> [(MealSlot, i64); 4] {
    MealSlot::ALL.map(|slot| {
        (
            slot,
            round_half_up(daily_calories as f64 * slot_ratio(slot)),
        )
    })
}

/// Number of days a plan covers: the requested duration clamped to 1..=7
#[must_use]
pub fn clamp_duration(duration: u32) -> u32 {
    duration.clamp(meal_plan::MIN_DURATION_DAYS, meal_plan::MAX_DURATION_DAYS)
}

/// Random UUID string drawn from `rng`
pub fn entry_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

fn build_entry<R: Rng + ?Sized>(
    option: &MealOption,
    calories: i64,
    ratios: MacroRatios,
    rng: &mut R,
) -> MealPlanEntry {
    let macros = macro_grams(calories as f64, ratios);
    MealPlanEntry {
        id: entry_id(rng),
        name: option.name.to_owned(),
        description: Some(option.description.to_owned()),
        calories,
        protein: macros.protein,
        carbs: macros.carbs,
        fat: macros.fat,
        ingredients: option.ingredients.iter().map(|s| (*s).to_owned()).collect(),
        instructions: option.instructions.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Default plan name for a goal
#[must_use]
pub fn plan_name(goal: Goal) -> String {
    format!("{} Planı", goal.label_tr())
}

/// Build a plan from the curated tables without any network access
pub fn synthesize_fallback_plan<R: Rng + ?Sized>(
    request: &MealPlanRequest,
    rng: &mut R,
) -> GeneratedMealPlan {
    let goal = request.goal;
    let targets = PlanTargets::for_fallback(&request.user_profile, goal);
    let budgets = slot_calorie_budgets(targets.daily_calories);
    let duration = clamp_duration(request.duration);

    let allergies = request.effective_allergies();
    let restrictions = request.effective_restrictions();
    let preferences = request.effective_preferences();
    let slot_options = MealSlot::ALL.map(|slot| {
        filter_options_for_slot(slot, allergies, restrictions, preferences)
    });

    let mut weekly_plan = WeeklyPlan::default();
    for (day_index, day) in DayKey::ALL.into_iter().take(duration as usize).enumerate() {
        let mut day_plan = DayPlan::default();
        for ((slot, calories), options) in budgets.iter().zip(&slot_options) {
            let option = options[day_index % options.len()];
            day_plan
                .slot_mut(*slot)
                .push(build_entry(option, *calories, targets.ratios, rng));
        }
        weekly_plan.days.insert(day, day_plan);
    }

    GeneratedMealPlan {
        name: plan_name(goal),
        description: format!(
            "Günlük {} kcal hedefli {} günlük beslenme planı",
            targets.daily_calories, duration
        ),
        goal,
        duration,
        daily_calories: targets.daily_calories,
        daily_protein: targets.macros.protein,
        daily_carbs: targets.macros.carbs,
        daily_fat: targets.macros.fat,
        weekly_plan,
    }
}
