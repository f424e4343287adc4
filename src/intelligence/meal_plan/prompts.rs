// ABOUTME: Builds the per-request user prompt for AI meal-plan generation
// ABOUTME: Profile summary, Harris-Benedict BMR and TDEE, goal strategy, and allergy call-outs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use super::fallback::{clamp_duration, PlanTargets};
use crate::intelligence::nutrition_calculator::{
    apply_flat_goal_offset, calculate_bmr_harris_benedict, calculate_tdee,
};
use nutriplan_core::models::{DayKey, Gender, Goal, MealPlanRequest};

/// Energy figures quoted in the AI prompt
///
/// BMR here is Harris-Benedict, and the target is the flat offset over that
/// BMR; the offline path uses Mifflin-St Jeor instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PromptEnergy {
    /// Harris-Benedict BMR
    pub bmr: i64,
    /// TDEE from that BMR
    pub tdee: i64,
    /// Day-level targets
    pub targets: PlanTargets,
}

impl PromptEnergy {
    /// Compute the figures for a request
    #[must_use]
    pub fn for_request(request: &MealPlanRequest) -> Self {
        let profile = &request.user_profile;
        let bmr = calculate_bmr_harris_benedict(
            profile.weight_or_default(),
            profile.height_or_default(),
            profile.age_or_default(),
            profile.gender_or_default(),
        );
        let tdee = calculate_tdee(bmr, profile.activity_level_or_default());
        let daily_calories = apply_flat_goal_offset(bmr, request.goal);
        Self {
            bmr,
            tdee,
            targets: PlanTargets::from_daily_calories(daily_calories, request.goal),
        }
    }
}

/// Strategy paragraph for a goal
#[must_use]
pub const fn goal_strategy(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => {
            "Kontrollü kalori açığı oluştur. Yüksek proteinli, lifli ve doyurucu öğünler seç; \
             rafine şeker ve kızartmalardan kaçın."
        }
        Goal::WeightGain => {
            "Kontrollü kalori fazlası oluştur. Besin yoğunluğu yüksek, sağlıklı yağlar ve \
             kompleks karbonhidratlar içeren öğünler seç."
        }
        Goal::MuscleGain => {
            "Kas gelişimini desteklemek için her öğüne kaliteli protein ekle, antrenman \
             öncesi ve sonrası karbonhidratı artır."
        }
        Goal::Maintenance => {
            "Mevcut kiloyu koru. Dengeli makro dağılımı ve çeşitli besinlerle sürdürülebilir \
             bir düzen kur."
        }
    }
}

const fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Erkek",
        Gender::Female => "Kadın",
    }
}

fn list_or_none(values: &[String]) -> String {
    let cleaned: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();
    if cleaned.is_empty() {
        "Yok".to_owned()
    } else {
        cleaned.join(", ")
    }
}

/// Build the user prompt for a meal-plan request
#[must_use]
pub fn build_user_prompt(request: &MealPlanRequest, energy: &PromptEnergy) -> String {
    let profile = &request.user_profile;
    let duration = clamp_duration(request.duration);
    let day_keys: Vec<&str> = DayKey::ALL
        .iter()
        .take(duration as usize)
        .map(DayKey::english_key)
        .collect();
    let targets = &energy.targets;

    let mut prompt = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(prompt, "## Kullanıcı Profili");
    let _ = writeln!(prompt, "- Yaş: {}", profile.age_or_default());
    let _ = writeln!(prompt, "- Kilo: {} kg", profile.weight_or_default());
    let _ = writeln!(prompt, "- Boy: {} cm", profile.height_or_default());
    let _ = writeln!(prompt, "- Cinsiyet: {}", gender_label(profile.gender_or_default()));
    let _ = writeln!(
        prompt,
        "- Aktivite seviyesi: {}",
        profile.activity_level_or_default().as_str()
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## Enerji İhtiyacı");
    let _ = writeln!(prompt, "- BMR (Harris-Benedict): {} kcal", energy.bmr);
    let _ = writeln!(prompt, "- TDEE: {} kcal", energy.tdee);
    let _ = writeln!(prompt, "- Günlük kalori hedefi: {} kcal", targets.daily_calories);
    let _ = writeln!(
        prompt,
        "- Makro hedefleri: protein {} g (%{:.0}), karbonhidrat {} g (%{:.0}), yağ {} g (%{:.0})",
        targets.macros.protein,
        targets.ratios.protein * 100.0,
        targets.macros.carbs,
        targets.ratios.carbs * 100.0,
        targets.macros.fat,
        targets.ratios.fat * 100.0,
    );
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "## Hedef: {} ({})",
        request.goal.label_tr(),
        request.goal.as_str()
    );
    let _ = writeln!(prompt, "{}", goal_strategy(request.goal));
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "## ALERJİLER (bu besinleri KESİNLİKLE kullanma): {}",
        list_or_none(request.effective_allergies())
    );
    let _ = writeln!(
        prompt,
        "## Kısıtlamalar ve sevilmeyenler: {}",
        list_or_none(request.effective_restrictions())
    );
    let _ = writeln!(
        prompt,
        "## Tercihler: {}",
        list_or_none(request.effective_preferences())
    );
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "{duration} günlük plan oluştur. weekly_plan yalnızca şu gün anahtarlarını içersin: {}.",
        day_keys.join(", ")
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::UserProfile;

    #[test]
    fn test_prompt_energy_uses_harris_benedict_and_flat_offset() {
        let request = MealPlanRequest::new(UserProfile::default(), Goal::WeightLoss, 7);
        let energy = PromptEnergy::for_request(&request);
        assert_eq!(energy.bmr, 1700);
        assert_eq!(energy.tdee, 2635);
        assert_eq!(energy.targets.daily_calories, 1300);
    }

    #[test]
    fn test_prompt_calls_out_allergies_and_days() {
        let mut request = MealPlanRequest::new(UserProfile::default(), Goal::Maintenance, 3);
        request.allergies = Some(vec!["fıstık".to_owned(), " ".to_owned()]);
        let energy = PromptEnergy::for_request(&request);
        let prompt = build_user_prompt(&request, &energy);

        assert!(prompt.contains("KESİNLİKLE kullanma): fıstık"));
        assert!(prompt.contains("monday, tuesday, wednesday."));
        assert!(!prompt.contains("thursday"));
        assert!(prompt.contains("Tercihler: Yok"));
        assert!(prompt.contains("BMR (Harris-Benedict): 1700 kcal"));
    }
}
