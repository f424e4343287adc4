// ABOUTME: Meal log models consumed by the daily aggregator and produced by photo analysis
// ABOUTME: LoggedMeal input records, DailyTotal views, MealType, and LoggableMeal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::food::FoodItem;
use super::lenient;

/// Type of a logged meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Meal type for a wall-clock hour (0-23)
    ///
    /// 06-11 breakfast, 11-15 lunch, 18-22 dinner; every other hour
    /// (including 15-18 and 22-06) is a snack.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            6..=10 => Self::Breakfast,
            11..=14 => Self::Lunch,
            18..=21 => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// A meal record supplied by the meal-storage collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// ISO-8601 creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Calories (kcal)
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_calories: f64,
    /// Protein (g)
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_protein: f64,
    /// Carbohydrates (g)
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_carbs: f64,
    /// Fat (g)
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_fat: f64,
}

impl LoggedMeal {
    /// Date portion (`YYYY-MM-DD`) of the timestamp, truncated at `T`
    #[must_use]
    pub fn date_key(&self) -> &str {
        self.created_at
            .split('T')
            .next()
            .unwrap_or(self.created_at.as_str())
    }
}

/// Nutrition totals for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    /// Day (`YYYY-MM-DD`)
    pub date: String,
    /// Calories (kcal)
    pub total_calories: f64,
    /// Protein (g)
    pub total_protein: f64,
    /// Carbohydrates (g)
    pub total_carbs: f64,
    /// Fat (g)
    pub total_fat: f64,
    /// Number of meals summed
    pub meal_count: usize,
}

/// A meal record ready for the meal-persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggableMeal {
    /// Owner of the meal
    pub user_id: String,
    /// Comma-joined item names
    pub name: String,
    /// Calories (kcal, rounded)
    pub total_calories: i64,
    /// Protein (g, rounded)
    pub total_protein: i64,
    /// Carbohydrates (g, rounded)
    pub total_carbs: i64,
    /// Fat (g, rounded)
    pub total_fat: i64,
    /// Meal period derived from the clock
    pub meal_type: MealType,
    /// Photo of the meal
    pub image_url: String,
    /// Free-text portion size
    pub portion: String,
    /// Items the meal was built from
    pub items: Vec<FoodItem>,
}
