// ABOUTME: User profile and derived health metric models
// ABOUTME: Gender, ActivityLevel, Goal, UserProfile defaults, HealthMetrics, and BMI categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::lenient::{self, LossyEnum};
use crate::constants::profile_defaults;

/// Biological gender used by the BMR formulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
}

impl LossyEnum for Gender {
    fn parse_lossy(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" | "erkek" => Some(Self::Male),
            "female" | "f" | "kadin" | "kadın" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Activity level driving the TDEE and water multipliers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Mostly sedentary
    Low,
    /// Exercise 3-5 days a week
    #[default]
    Moderate,
    /// Exercise 6-7 days a week
    High,
}

impl ActivityLevel {
    /// Wire name of the level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl LossyEnum for ActivityLevel {
    fn parse_lossy(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" | "sedentary" | "dusuk" | "düşük" => Some(Self::Low),
            "moderate" | "medium" | "orta" => Some(Self::Moderate),
            "high" | "active" | "yuksek" | "yüksek" => Some(Self::High),
            _ => None,
        }
    }
}

/// Dietary goal selecting the calorie and macro policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose body weight
    WeightLoss,
    /// Gain body weight
    WeightGain,
    /// Keep current weight
    #[default]
    Maintenance,
    /// Build muscle
    MuscleGain,
}

impl Goal {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
        }
    }

    /// Localized display label
    #[must_use]
    pub const fn label_tr(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Kilo Verme",
            Self::WeightGain => "Kilo Alma",
            Self::Maintenance => "Kilo Koruma",
            Self::MuscleGain => "Kas Kazanımı",
        }
    }
}

impl LossyEnum for Goal {
    fn parse_lossy(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" | "lose_weight" => Some(Self::WeightLoss),
            "weight_gain" | "gain_weight" => Some(Self::WeightGain),
            "maintenance" | "maintain" => Some(Self::Maintenance),
            "muscle_gain" | "build_muscle" => Some(Self::MuscleGain),
            _ => None,
        }
    }
}

/// Physiological and preference record for one user
///
/// Every physiological field is optional; accessors substitute the fixed
/// defaults (age 25, 70 kg, 170 cm, male, moderate activity, maintenance).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    #[serde(default, deserialize_with = "lenient::optional_u32")]
    pub age: Option<u32>,
    /// Body weight in kilograms
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub height: Option<f64>,
    /// Biological gender
    #[serde(default, deserialize_with = "lenient::optional_enum")]
    pub gender: Option<Gender>,
    /// Activity level
    #[serde(
        default,
        alias = "activity_level",
        deserialize_with = "lenient::optional_enum"
    )]
    pub activity_level: Option<ActivityLevel>,
    /// Dietary goal
    #[serde(default, deserialize_with = "lenient::optional_enum")]
    pub goal: Option<Goal>,
    /// Allergies (free text)
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub allergies: Vec<String>,
    /// Dislikes and dietary restrictions (free text)
    #[serde(
        default,
        alias = "restrictions",
        deserialize_with = "lenient::string_list"
    )]
    pub dislikes: Vec<String>,
    /// Food preferences (free text)
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub preferences: Vec<String>,
}

impl UserProfile {
    /// Age in years, falling back to the default
    #[must_use]
    pub fn age_or_default(&self) -> u32 {
        self.age
            .filter(|age| *age > 0)
            .unwrap_or(profile_defaults::AGE_YEARS)
    }

    /// Weight in kilograms, falling back to the default
    #[must_use]
    pub fn weight_or_default(&self) -> f64 {
        self.weight
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(profile_defaults::WEIGHT_KG)
    }

    /// Height in centimeters, falling back to the default
    #[must_use]
    pub fn height_or_default(&self) -> f64 {
        self.height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(profile_defaults::HEIGHT_CM)
    }

    /// Gender, falling back to male
    #[must_use]
    pub fn gender_or_default(&self) -> Gender {
        self.gender.unwrap_or_default()
    }

    /// Activity level, falling back to moderate
    #[must_use]
    pub fn activity_level_or_default(&self) -> ActivityLevel {
        self.activity_level.unwrap_or_default()
    }

    /// Goal, falling back to maintenance
    #[must_use]
    pub fn goal_or_default(&self) -> Goal {
        self.goal.unwrap_or_default()
    }
}

/// BMI category (boundaries are the contract, labels are for display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Canonical English name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Localized display label
    #[must_use]
    pub const fn label_tr(&self) -> &'static str {
        match self {
            Self::Underweight => "Zayıf",
            Self::Normal => "Normal",
            Self::Overweight => "Fazla Kilolu",
            Self::Obese => "Obez",
        }
    }
}

/// Derived health metrics, recomputed whenever the profile changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Basal metabolic rate (kcal/day)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: i64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub daily_calorie_goal: i64,
    /// Body mass index, one decimal
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Protein target (g/day)
    pub protein_goal: i64,
    /// Carbohydrate target (g/day)
    pub carbs_goal: i64,
    /// Fat target (g/day)
    pub fat_goal: i64,
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGoals {
    /// Protein grams
    pub protein: i64,
    /// Carbohydrate grams
    pub carbs: i64,
    /// Fat grams
    pub fat: i64,
}

/// Share of calories from each macro (fractions summing to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

impl MacroRatios {
    /// Build from whole percentages
    #[must_use]
    pub fn from_percentages(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein: f64::from(protein_pct) / 100.0,
            carbs: f64::from(carbs_pct) / 100.0,
            fat: f64::from(fat_pct) / 100.0,
        }
    }
}

/// Healthy weight range for a height (kg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    /// Weight at BMI 18.5
    pub min: f64,
    /// Weight at BMI 25.0
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_when_empty() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.age_or_default(), 25);
        assert!((profile.weight_or_default() - 70.0).abs() < f64::EPSILON);
        assert!((profile.height_or_default() - 170.0).abs() < f64::EPSILON);
        assert_eq!(profile.gender_or_default(), Gender::Male);
        assert_eq!(profile.activity_level_or_default(), ActivityLevel::Moderate);
        assert_eq!(profile.goal_or_default(), Goal::Maintenance);
    }

    #[test]
    fn test_profile_tolerates_half_typed_input() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"age":"3x","weight":"82.5","height":"","gender":"Female",
                "activity_level":"HIGH","goal":"weight loss","allergies":"nuts, milk"}"#,
        )
        .unwrap();
        assert_eq!(profile.age, None);
        assert_eq!(profile.weight, Some(82.5));
        assert_eq!(profile.height, None);
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.activity_level, Some(ActivityLevel::High));
        assert_eq!(profile.goal, Some(Goal::WeightLoss));
        assert_eq!(profile.allergies, vec!["nuts", "milk"]);
    }

    #[test]
    fn test_zero_weight_uses_default() {
        let profile = UserProfile {
            weight: Some(0.0),
            ..UserProfile::default()
        };
        assert!((profile.weight_or_default() - 70.0).abs() < f64::EPSILON);
    }
}
