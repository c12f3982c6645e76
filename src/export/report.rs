// ABOUTME: Markdown client report combining profile, estimates, meals, and posture
// ABOUTME: Rounds figures for presentation only; stored values keep full precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use super::write_text;
use crate::intelligence::meal_plan::MealPlan;
use crate::intelligence::posture::{PostureReport, PostureStatus};
use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use fitform_core::errors::AppResult;
use fitform_core::models::{ClientContact, ClientProfile, EstimationResult};
use std::fmt::Write as _;
use std::path::Path;

/// Weekly training guidance printed in every report
pub const TRAINING_GUIDANCE: &str = "3-4 sessions per week of full-body work (squat / hinge / press / row / core). Film your form every session.";

/// Everything a report is built from
#[derive(Debug, Clone)]
pub struct AssessmentBundle {
    /// Submitted profile
    pub profile: ClientProfile,
    /// Contact details and preferences
    pub contact: ClientContact,
    /// Estimation figures
    pub result: EstimationResult,
    /// Meal plan derived from the result
    pub meal_plan: MealPlan,
    /// Posture check outcome
    pub posture: PostureReport,
    /// Report timestamp
    pub generated_at: DateTime<Utc>,
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Render the report as Markdown
#[must_use]
pub fn render_report(bundle: &AssessmentBundle) -> String {
    let AssessmentBundle {
        profile,
        contact,
        result,
        meal_plan,
        posture,
        generated_at,
    } = bundle;
    let mut out = String::new();

    let _ = writeln!(out, "# AI Fitness Assessment Report\n");
    let _ = writeln!(out, "**Name:** {}  ", or_dash(&contact.name));
    let _ = writeln!(out, "Created: {}\n", generated_at.format("%Y-%m-%d %H:%M"));

    let _ = writeln!(out, "## Basic information\n");
    let _ = writeln!(out, "- Age: {} / Sex: {}", profile.age, profile.sex);
    let _ = writeln!(
        out,
        "- Height: {} cm / Weight: {} kg",
        profile.height_cm, profile.weight_kg
    );
    let _ = writeln!(
        out,
        "- Activity level: {} / Goal: {}",
        profile.activity_level.description(),
        profile.goal
    );
    let _ = writeln!(
        out,
        "- Preferences: {} / Allergies: {}\n",
        or_dash(&contact.dietary_prefs),
        or_dash(&contact.allergies)
    );

    let _ = writeln!(out, "## Nutrition\n");
    let _ = writeln!(out, "- BMI: {:.2}", result.bmi);
    let _ = writeln!(out, "- BMR (basal metabolic rate): {:.0} kcal", result.bmr_kcal);
    let _ = writeln!(out, "- TDEE (estimated expenditure): {:.0} kcal", result.tdee_kcal);
    let _ = writeln!(out, "- Target intake: {:.0} kcal", result.target_kcal);
    let _ = writeln!(
        out,
        "- PFC target: P{:.0}g / F{:.0}g / C{:.0}g\n",
        result.protein_g, result.fat_g, result.carb_g
    );

    let _ = writeln!(out, "## One-day meal example\n");
    let _ = writeln!(out, "{}\n", meal_plan.render_meals());

    let _ = writeln!(out, "## Posture check\n");
    match posture.status {
        PostureStatus::Analyzed => {
            if posture.findings.is_empty() {
                let _ = writeln!(out, "No significant asymmetry detected.");
            } else {
                let _ = writeln!(out, "Points to watch:");
                for finding in &posture.findings {
                    let _ = writeln!(out, "- {}", finding.message);
                }
            }
            if !posture.advice.is_empty() {
                let _ = writeln!(out, "\nCorrective advice:");
                for advice in &posture.advice {
                    let _ = writeln!(out, "- {advice}");
                }
            }
        }
        PostureStatus::Skipped => {
            let _ = writeln!(out, "{}", or_dash(&posture.message));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Training guidance\n");
    let _ = writeln!(out, "{TRAINING_GUIDANCE}");
    let _ = writeln!(out, "\n> {}", meal_plan.training);

    out
}

/// Render and write the report to `path`
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written
pub fn write_report(path: &Path, bundle: &AssessmentBundle) -> AppResult<()> {
    let report = render_report(bundle);
    write_text(path, &report, false)?;
    AppLogger::log_export("report", &path.display().to_string(), 1);
    Ok(())
}
