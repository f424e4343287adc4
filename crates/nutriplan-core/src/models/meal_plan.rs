// ABOUTME: Meal plan models produced by the AI and fallback plan generators
// ABOUTME: MealPlanEntry, DayPlan slots, weekday keys, WeeklyPlan, and GeneratedMealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::profile::{Goal, UserProfile};

/// One of the four meal periods of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snacks between meals
    Snacks,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Key of the slot inside a day object
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

/// A single meal inside a day
///
/// Generated entries satisfy `calories ≈ protein*4 + carbs*4 + fat*9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calories (kcal)
    pub calories: i64,
    /// Protein (g)
    pub protein: i64,
    /// Carbohydrates (g)
    pub carbs: i64,
    /// Fat (g)
    pub fat: i64,
    /// Ingredients in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Preparation steps in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
}

/// The four meal slots of a single day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Breakfast entries
    #[serde(default)]
    pub breakfast: Vec<MealPlanEntry>,
    /// Lunch entries
    #[serde(default)]
    pub lunch: Vec<MealPlanEntry>,
    /// Dinner entries
    #[serde(default)]
    pub dinner: Vec<MealPlanEntry>,
    /// Snack entries
    #[serde(default)]
    pub snacks: Vec<MealPlanEntry>,
}

impl DayPlan {
    /// Entries of one slot
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[MealPlanEntry] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Mutable entries of one slot
    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealPlanEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// Total calories over every slot
    #[must_use]
    pub fn total_calories(&self) -> i64 {
        MealSlot::ALL
            .iter()
            .flat_map(|slot| self.slot(*slot))
            .map(|entry| entry.calories)
            .sum()
    }
}

/// Weekday key of a plan
///
/// Generation uses the English key; the persisted form uses the Turkish key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    /// Pazartesi
    Monday,
    /// Salı
    Tuesday,
    /// Çarşamba
    Wednesday,
    /// Perşembe
    Thursday,
    /// Cuma
    Friday,
    /// Cumartesi
    Saturday,
    /// Pazar
    Sunday,
}

impl DayKey {
    /// All days in week order (Monday first)
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Key used by the generation pipeline
    #[must_use]
    pub const fn english_key(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Key used by the persisted plan
    #[must_use]
    pub const fn local_key(&self) -> &'static str {
        match self {
            Self::Monday => "pazartesi",
            Self::Tuesday => "sali",
            Self::Wednesday => "carsamba",
            Self::Thursday => "persembe",
            Self::Friday => "cuma",
            Self::Saturday => "cumartesi",
            Self::Sunday => "pazar",
        }
    }

    /// Look up a day by its English key (case-insensitive)
    #[must_use]
    pub fn from_english_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| day.english_key() == key)
    }

    /// Look up a day by its persisted key (case-insensitive)
    #[must_use]
    pub fn from_local_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| day.local_key() == key)
    }
}

/// Day-keyed plan; iteration order is week order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    /// Plans by day
    pub days: BTreeMap<DayKey, DayPlan>,
}

impl WeeklyPlan {
    /// Number of days in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Plan for one day
    #[must_use]
    pub fn day(&self, day: DayKey) -> Option<&DayPlan> {
        self.days.get(&day)
    }
}

/// A generated meal plan, immutable once returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMealPlan {
    /// Plan name
    pub name: String,
    /// Plan description
    pub description: String,
    /// Goal the plan targets
    pub goal: Goal,
    /// Number of days (1-7)
    pub duration: u32,
    /// Day-level calorie target
    pub daily_calories: i64,
    /// Day-level protein target (g)
    pub daily_protein: i64,
    /// Day-level carbohydrate target (g)
    pub daily_carbs: i64,
    /// Day-level fat target (g)
    pub daily_fat: i64,
    /// Meals per day
    pub weekly_plan: WeeklyPlan,
}

/// Which path produced a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    /// External text-generation service
    Ai,
    /// Offline curated-table synthesizer
    Fallback,
}

/// A plan together with the path that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanOutcome {
    /// The generated plan
    pub plan: GeneratedMealPlan,
    /// Producing path
    pub source: PlanSource,
}

/// Request to generate a meal plan
///
/// Explicit preference/allergy/restriction lists replace the profile's lists;
/// absent lists fall back to the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// Profile of the user the plan is for
    #[serde(default)]
    pub user_profile: UserProfile,
    /// Goal of the plan
    #[serde(default)]
    pub goal: Goal,
    /// Requested number of days
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Preferences overriding the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
    /// Allergies overriding the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,
    /// Restrictions overriding the profile's dislikes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<String>>,
}

const fn default_duration() -> u32 {
    7
}

impl MealPlanRequest {
    /// Create a request for a profile and goal
    #[must_use]
    pub fn new(user_profile: UserProfile, goal: Goal, duration: u32) -> Self {
        Self {
            user_profile,
            goal,
            duration,
            preferences: None,
            allergies: None,
            restrictions: None,
        }
    }

    /// Effective allergies
    #[must_use]
    pub fn effective_allergies(&self) -> &[String] {
        self.allergies
            .as_deref()
            .unwrap_or(&self.user_profile.allergies)
    }

    /// Effective restrictions
    #[must_use]
    pub fn effective_restrictions(&self) -> &[String] {
        self.restrictions
            .as_deref()
            .unwrap_or(&self.user_profile.dislikes)
    }

    /// Effective preferences
    #[must_use]
    pub fn effective_preferences(&self) -> &[String] {
        self.preferences
            .as_deref()
            .unwrap_or(&self.user_profile.preferences)
    }
}
