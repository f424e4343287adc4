// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Human-readable display of metrics, meal plans, photo analyses and daily totals

use nutriplan::models::{
    DailyTotal, FoodAnalysisResult, HealthMetrics, IdealWeightRange, LoggableMeal,
    MealPlanOutcome, MealSlot,
};

fn rule() {
    println!("{}", "=".repeat(60));
}

/// Display health metrics with water intake and ideal weight
pub fn display_health_metrics(
    metrics: &HealthMetrics,
    water_intake_ml: i64,
    ideal_weight: &IdealWeightRange,
) {
    println!("\nHEALTH METRICS");
    rule();
    println!("   BMR:                {} kcal", metrics.bmr);
    println!("   TDEE:               {} kcal", metrics.tdee);
    println!("   Daily calorie goal: {} kcal", metrics.daily_calorie_goal);
    println!(
        "   BMI:                {:.1} ({})",
        metrics.bmi,
        metrics.bmi_category.label_tr()
    );
    println!(
        "   Macros:             protein {} g, carbs {} g, fat {} g",
        metrics.protein_goal, metrics.carbs_goal, metrics.fat_goal
    );
    println!("   Water:              {water_intake_ml} ml");
    println!(
        "   Ideal weight:       {:.1} - {:.1} kg",
        ideal_weight.min, ideal_weight.max
    );
}

/// Display a generated plan day by day
pub fn display_meal_plan(outcome: &MealPlanOutcome) {
    let plan = &outcome.plan;
    println!("\n{} [{:?}]", plan.name, outcome.source);
    rule();
    println!("{}", plan.description);
    println!(
        "Daily target: {} kcal | protein {} g | carbs {} g | fat {} g",
        plan.daily_calories, plan.daily_protein, plan.daily_carbs, plan.daily_fat
    );

    for (day, day_plan) in &plan.weekly_plan.days {
        println!("\n{} ({} kcal)", day.local_key(), day_plan.total_calories());
        for slot in MealSlot::ALL {
            for entry in day_plan.slot(slot) {
                println!(
                    "   {:<10} {} - {} kcal (P {} / C {} / F {})",
                    slot.key(),
                    entry.name,
                    entry.calories,
                    entry.protein,
                    entry.carbs,
                    entry.fat
                );
            }
        }
    }
}

/// Display an analysis and the meal it formats to
pub fn display_analysis(result: &FoodAnalysisResult, meal: &LoggableMeal) {
    println!("\nFOOD ANALYSIS [{:?}] - {}", result.analysis_type, result.portion);
    rule();
    for item in &result.items {
        let confidence = item
            .confidence
            .map_or_else(String::new, |c| format!(" ({:.0}%)", c * 100.0));
        println!(
            "   {} {:.0} g - {:.0} kcal{confidence}",
            item.name, item.grams, item.calories
        );
    }
    println!(
        "\nMeal: {} [{}] {} kcal | P {} / C {} / F {}",
        meal.name,
        meal.meal_type.as_str(),
        meal.total_calories,
        meal.total_protein,
        meal.total_carbs,
        meal.total_fat
    );
}

/// Display one day's totals with optional progress
pub fn display_daily_total(total: &DailyTotal, progress: Option<i64>) {
    println!(
        "{}: {:.0} kcal | P {:.1} g / C {:.1} g / F {:.1} g | {} meals",
        total.date,
        total.total_calories,
        total.total_protein,
        total.total_carbs,
        total.total_fat,
        total.meal_count
    );
    if let Some(progress) = progress {
        println!("   Progress: {progress}%");
    }
}
