// ABOUTME: Output formatting helpers for fitform-cli
// ABOUTME: Consistent terminal rendering of assessments and storage results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use fitform::intelligence::meal_plan::MealPlan;
use fitform::intelligence::posture::{PostureReport, PostureStatus};
use fitform::models::{ClientProfile, EstimationResult};

/// Display estimates, meal plan, and posture outcome
pub fn display_assessment(
    profile: &ClientProfile,
    result: &EstimationResult,
    meal_plan: &MealPlan,
    posture: &PostureReport,
) {
    println!("\nAssessment");
    println!("{}", "=".repeat(60));
    println!(
        "   Profile: {} / {} y / {} cm / {} kg",
        profile.sex, profile.age, profile.height_cm, profile.weight_kg
    );
    println!(
        "   Activity: {} / Goal: {}",
        profile.activity_level, profile.goal
    );
    println!("   BMI:    {:.2}", result.bmi);
    println!("   BMR:    {:.0} kcal", result.bmr_kcal);
    println!("   TDEE:   {:.0} kcal", result.tdee_kcal);
    println!("   Target: {:.0} kcal", result.target_kcal);
    println!(
        "   PFC:    P{:.0}g / F{:.0}g / C{:.0}g",
        result.protein_g, result.fat_g, result.carb_g
    );

    println!("\nMeal plan");
    println!("{}", "=".repeat(60));
    println!("{}", meal_plan.render());

    println!("\nPosture");
    println!("{}", "=".repeat(60));
    match posture.status {
        PostureStatus::Analyzed if posture.findings.is_empty() => {
            println!("   No significant asymmetry detected");
        }
        PostureStatus::Analyzed => {
            for finding in &posture.findings {
                println!("   - {}", finding.message);
            }
            for advice in &posture.advice {
                println!("   > {advice}");
            }
        }
        PostureStatus::Skipped => println!("   Skipped: {}", posture.message),
    }
    println!();
}

/// Display the stored lead id
pub fn display_saved_lead(lead_id: i64, total_leads: i64) {
    println!("Saved lead #{lead_id} ({total_leads} leads stored)");
}
