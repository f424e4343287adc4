// ABOUTME: Food-photo analysis models shared by the mock and AI analysis paths
// ABOUTME: FoodItem, NutritionTotals, FoodAnalysisResult, and the analysis request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recognized food item on a photographed plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Estimated portion weight (g)
    pub grams: f64,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
    /// Recognition confidence in `0.0..=1.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Nutrition totals over a list of food items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
}

impl NutritionTotals {
    /// Arithmetic sum over the items
    #[must_use]
    pub fn sum(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            calories: acc.calories + item.calories,
            protein: acc.protein + item.protein,
            carbs: acc.carbs + item.carbs,
            fats: acc.fats + item.fats,
        })
    }
}

/// Which path produced an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    /// Canned template
    Mock,
    /// Vision model
    Ai,
}

/// Normalized result of analyzing a food photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysisResult {
    /// Recognized items in order
    pub items: Vec<FoodItem>,
    /// Sum of the items
    pub totals: NutritionTotals,
    /// Free-text portion size
    pub portion: String,
    /// Analyzed image
    pub image_url: String,
    /// Producing path
    pub analysis_type: AnalysisType,
}

impl FoodAnalysisResult {
    /// Build a result whose totals are the sum of `items`
    #[must_use]
    pub fn from_items(
        items: Vec<FoodItem>,
        portion: impl Into<String>,
        image_url: impl Into<String>,
        analysis_type: AnalysisType,
    ) -> Self {
        let totals = NutritionTotals::sum(&items);
        Self {
            items,
            totals,
            portion: portion.into(),
            image_url: image_url.into(),
            analysis_type,
        }
    }
}

/// Request to analyze a food photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAnalysisRequest {
    /// Uploaded image location
    pub image_url: String,
    /// Whether the AI path may be used
    #[serde(default, rename = "useAI", alias = "useAi")]
    pub use_ai: bool,
}
