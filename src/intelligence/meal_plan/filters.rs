// ABOUTME: Allergy, restriction, and preference filters over curated meal options
// ABOUTME: Applies the three predicates in order and falls back to the slot's safe option when emptied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal option filtering
//!
//! Filters run in a fixed order:
//!
//! 1. **Allergy exclusion**: an allergen and an allergy match when either
//!    contains the other, case-insensitively ("nut" excludes "nuts",
//!    "dairy products" excludes "dairy"). Turkish terms are first mapped to
//!    the catalog's allergen classes ("süt" excludes "dairy").
//! 2. **Restriction exclusion**: every recognized restriction must hold;
//!    unrecognized restriction strings never exclude anything.
//! 3. **Preference inclusion**: only when at least one non-blank preference
//!    is given; an option survives if a tag, its cuisine, or its name
//!    contains a preference.
//!
//! [`filter_options_for_slot`] never returns an empty list: when the
//! filters remove everything, the slot's designated safe option is used.

use nutriplan_core::models::MealSlot;

use super::catalog::{options_for, safe_option, MealOption};

/// Ingredient keywords marking meat or fish
const MEAT_FISH_KEYWORDS: &[&str] = &[
    "chicken", "beef", "lamb", "veal", "meat", "turkey", "sucuk", "fish", "salmon", "tuna",
    "anchovy", "sea bass", "shrimp",
];

/// Ingredient keywords marking gluten sources
const GLUTEN_KEYWORDS: &[&str] = &[
    "bread", "bulgur", "wheat", "flour", "pasta", "couscous", "crackers", "granola", "oats",
];

/// Turkish allergy terms and the allergen class each one names
const LOCAL_ALLERGY_TERMS: &[(&str, &str)] = &[
    ("süt", "dairy"),
    ("peynir", "dairy"),
    ("yoğurt", "dairy"),
    ("laktoz", "dairy"),
    ("yumurta", "egg"),
    ("fıstık", "nuts"),
    ("fistik", "nuts"),
    ("fındık", "nuts"),
    ("findik", "nuts"),
    ("ceviz", "nuts"),
    ("badem", "nuts"),
    ("kuruyemiş", "nuts"),
    ("balık", "fish"),
    ("balik", "fish"),
    ("glüten", "gluten"),
    ("buğday", "gluten"),
    ("bugday", "gluten"),
    ("susam", "sesame"),
    ("soya", "soy"),
];

/// A dietary restriction the filter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No gluten
    GlutenFree,
}

impl Restriction {
    /// Recognize a free-text restriction; `None` for anything unknown
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        if lowered.contains("vegan") {
            Some(Self::Vegan)
        } else if lowered.contains("vegetarian") || lowered.contains("vejetaryen") {
            Some(Self::Vegetarian)
        } else if lowered.contains("gluten") || lowered.contains("glüten") {
            Some(Self::GlutenFree)
        } else {
            None
        }
    }

    /// Whether `option` breaks this restriction
    #[must_use]
    pub fn is_violated_by(self, option: &MealOption) -> bool {
        match self {
            Self::Vegan => {
                !option.has_tag("vegan")
                    && (option.has_allergen("dairy")
                        || option.has_allergen("egg")
                        || mentions_any(option, MEAT_FISH_KEYWORDS))
            }
            Self::Vegetarian => mentions_any(option, MEAT_FISH_KEYWORDS),
            Self::GlutenFree => {
                option.has_allergen("gluten") || mentions_any(option, GLUTEN_KEYWORDS)
            }
        }
    }
}

/// Lowercased, trimmed, non-blank terms
fn normalized_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Normalized allergies plus the allergen classes their Turkish terms name
fn normalized_allergies(allergies: &[String]) -> Vec<String> {
    let mut terms = normalized_terms(allergies);
    let classes: Vec<String> = terms
        .iter()
        .flat_map(|term| {
            LOCAL_ALLERGY_TERMS
                .iter()
                .filter(move |(local, _)| term.contains(local))
                .map(|(_, class)| (*class).to_owned())
        })
        .collect();
    for class in classes {
        if !terms.contains(&class) {
            terms.push(class);
        }
    }
    terms
}

/// Whether any ingredient contains one of the keywords
fn mentions_any(option: &MealOption, keywords: &[&str]) -> bool {
    option.ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.to_lowercase();
        keywords.iter().any(|keyword| ingredient.contains(keyword))
    })
}

/// Whether an option's allergens intersect the allergies
///
/// `allergies` must already be normalized.
fn triggers_allergy(option: &MealOption, allergies: &[String]) -> bool {
    option.allergens.iter().any(|allergen| {
        let allergen = allergen.to_lowercase();
        allergies
            .iter()
            .any(|allergy| allergen.contains(allergy.as_str()) || allergy.contains(&allergen))
    })
}

/// Whether an option matches any preference
///
/// `preferences` must already be normalized.
fn matches_preference(option: &MealOption, preferences: &[String]) -> bool {
    let name = option.name.to_lowercase();
    let cuisine = option.cuisine.to_lowercase();
    preferences.iter().any(|preference| {
        option
            .dietary_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(preference.as_str()))
            || cuisine.contains(preference.as_str())
            || name.contains(preference.as_str())
    })
}

/// Apply the three filters to an option table
///
/// May return an empty list; see [`filter_options_for_slot`] for the
/// variant with the safety net.
#[must_use]
pub fn filter_options<'a>(
    options: &'a [MealOption],
    allergies: &[String],
    restrictions: &[String],
    preferences: &[String],
) -> Vec<&'a MealOption> {
    let allergies = normalized_allergies(allergies);
    let restrictions: Vec<Restriction> = restrictions
        .iter()
        .filter_map(|raw| Restriction::parse(raw.as_str()))
        .collect();
    let preferences = normalized_terms(preferences);

    options
        .iter()
        .filter(|option| !triggers_allergy(option, &allergies))
        .filter(|option| {
            !restrictions
                .iter()
                .any(|restriction| restriction.is_violated_by(option))
        })
        .filter(|option| preferences.is_empty() || matches_preference(option, &preferences))
        .collect()
}

/// Filtered options of a slot, never empty
///
/// Returns the slot's safe option alone when the filters remove every
/// option.
#[must_use]
pub fn filter_options_for_slot(
    slot: MealSlot,
    allergies: &[String],
    restrictions: &[String],
    preferences: &[String],
) -> Vec<&'static MealOption> {
    let filtered = filter_options(options_for(slot), allergies, restrictions, preferences);
    if filtered.is_empty() {
        vec![safe_option(slot)]
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_allergy_match_is_bidirectional() {
        let nut_free = filter_options(options_for(MealSlot::Snacks), &strings(&["NUT"]), &[], &[]);
        assert!(nut_free.iter().all(|option| !option.has_allergen("nuts")));

        let dairy_free = filter_options(
            options_for(MealSlot::Snacks),
            &strings(&["dairy products"]),
            &[],
            &[],
        );
        assert!(dairy_free.iter().all(|option| !option.has_allergen("dairy")));
    }

    #[test]
    fn test_turkish_allergies_map_to_allergen_classes() {
        let allergies = normalized_allergies(&strings(&["Süt", "yumurta", "Fıstık ezmesi"]));
        for class in ["dairy", "egg", "nuts"] {
            assert!(allergies.iter().any(|term| term == class), "{class}");
        }

        let filtered = filter_options(
            options_for(MealSlot::Snacks),
            &strings(&["süt", "badem"]),
            &[],
            &[],
        );
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|option| !option.has_allergen("dairy") && !option.has_allergen("nuts")));
    }

    #[test]
    fn test_blank_allergies_are_ignored() {
        let all = options_for(MealSlot::Lunch);
        let filtered = filter_options(all, &strings(&["", "  "]), &[], &[]);
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn test_unknown_restriction_is_ignored() {
        let all = options_for(MealSlot::Dinner);
        let filtered = filter_options(all, &[], &strings(&["no cilantro"]), &[]);
        assert_eq!(filtered.len(), all.len());
    }

    #[test]
    fn test_vegetarian_drops_meat_and_fish() {
        let filtered = filter_options(
            options_for(MealSlot::Dinner),
            &[],
            &strings(&["Vegetarian"]),
            &[],
        );
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|option| !mentions_any(option, MEAT_FISH_KEYWORDS)));
    }

    #[test]
    fn test_vegan_keeps_only_vegan_compatible() {
        let filtered = filter_options(
            options_for(MealSlot::Breakfast),
            &[],
            &strings(&["vegan"]),
            &[],
        );
        assert!(filtered.iter().all(|option| option.has_tag("vegan")));
    }

    #[test]
    fn test_gluten_restriction() {
        let filtered = filter_options(
            options_for(MealSlot::Lunch),
            &[],
            &strings(&["gluten-free"]),
            &[],
        );
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|option| !option.has_allergen("gluten")));
        assert!(filtered
            .iter()
            .all(|option| !mentions_any(option, &["bread", "bulgur"])));
    }

    #[test]
    fn test_preferences_match_tag_cuisine_or_name() {
        let by_cuisine = filter_options(
            options_for(MealSlot::Lunch),
            &[],
            &[],
            &strings(&["Mediterranean"]),
        );
        assert!(!by_cuisine.is_empty());
        assert!(by_cuisine
            .iter()
            .all(|option| option.cuisine == "mediterranean"));

        let by_name = filter_options(options_for(MealSlot::Breakfast), &[], &[], &strings(&["menemen"]));
        assert_eq!(by_name.len(), 1);
    }

    #[test]
    fn test_safety_net_when_everything_is_excluded() {
        let filtered = filter_options_for_slot(
            MealSlot::Snacks,
            &[],
            &[],
            &strings(&["nothing-matches-this"]),
        );
        assert_eq!(filtered, vec![safe_option(MealSlot::Snacks)]);
    }
}
