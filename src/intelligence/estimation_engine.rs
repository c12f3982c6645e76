// ABOUTME: Estimation engine for client nutrition targets using published formulas
// ABOUTME: BMI, BMR (Mifflin-St Jeor), TDEE, goal-adjusted target calories, and the PFC split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Estimation Engine
//!
//! Pure functions from a [`ClientProfile`] to an [`EstimationResult`]:
//!
//! ```text
//! profile -> bmr -> tdee -> target -> pfc
//! ```
//!
//! No state, no I/O. Input validation happens once, at entry, and fails with
//! `InvalidProfile`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::estimation::{
    ActivityFactorsConfig, BmrConfig, EstimationConfig, GoalAdjustmentConfig,
    MacronutrientConfig, ProfileLimitsConfig,
};
use fitform_core::constants::energy::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use fitform_core::errors::{AppError, AppResult};
use fitform_core::models::{ActivityLevel, ClientProfile, EstimationResult, Goal, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Protein/fat/carbohydrate gram split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrate (grams)
    pub carb_g: f64,
}

/// Check a profile against the positivity rules and plausibility bounds
///
/// # Errors
///
/// Returns `InvalidProfile` naming the first offending field
pub fn validate_profile(profile: &ClientProfile, limits: &ProfileLimitsConfig) -> AppResult<()> {
    if profile.age == 0 || profile.age > limits.max_age {
        return Err(AppError::invalid_profile(format!(
            "Age must be between 1 and {} years (got {})",
            limits.max_age, profile.age
        )));
    }
    check_measure("Height", "cm", profile.height_cm, limits.max_height_cm)?;
    check_measure("Weight", "kg", profile.weight_kg, limits.max_weight_kg)?;
    Ok(())
}

fn check_measure(field: &str, unit: &str, value: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(AppError::invalid_profile(format!(
            "{field} must be greater than 0 and at most {max} {unit} (got {value})"
        )));
    }
    Ok(())
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2, rounded to two decimals
///
/// # Errors
///
/// Returns `InvalidProfile` if either input is not a positive finite number
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_profile("Weight must be positive"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_profile("Height must be positive"));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// # Errors
///
/// Returns `InvalidProfile` if age, height, or weight is out of range, or if
/// the combination yields a non-positive BMR
pub fn compute_bmr(
    profile: &ClientProfile,
    config: &BmrConfig,
    limits: &ProfileLimitsConfig,
) -> AppResult<f64> {
    validate_profile(profile, limits)?;

    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);
    let sex_constant = match profile.sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + sex_constant;
    if bmr <= 0.0 {
        return Err(AppError::invalid_profile(format!(
            "Profile yields a non-positive BMR ({bmr:.1} kcal)"
        )));
    }
    Ok(bmr)
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors (`McArdle` et al. 2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
///
/// # Errors
///
/// Returns `InvalidProfile` if BMR is not a positive finite number
pub fn compute_tdee(
    bmr_kcal: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr_kcal.is_finite() || bmr_kcal <= 0.0 {
        return Err(AppError::invalid_profile("BMR must be positive"));
    }
    Ok(bmr_kcal * activity_factor(activity_level, config))
}

/// Percentage offset applied to TDEE for a goal
#[must_use]
pub const fn goal_offset_percent(goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::Lose => config.lose_offset_percent,
        Goal::Maintain => config.maintain_offset_percent,
        Goal::Gain => config.gain_offset_percent,
    }
}

/// Calculate goal-adjusted daily intake
///
/// Formula: target = TDEE x (1 + offset / 100), then clamped so it never
/// drops below `config.calorie_floor_kcal`.
///
/// # Errors
///
/// Returns `InvalidProfile` if TDEE is not a positive finite number
pub fn compute_target(tdee_kcal: f64, goal: Goal, config: &GoalAdjustmentConfig) -> AppResult<f64> {
    if !tdee_kcal.is_finite() || tdee_kcal <= 0.0 {
        return Err(AppError::invalid_profile("TDEE must be positive"));
    }
    let adjusted = tdee_kcal * (1.0 + goal_offset_percent(goal, config) / 100.0);
    if adjusted < config.calorie_floor_kcal {
        debug!(
            adjusted,
            floor = config.calorie_floor_kcal,
            "Target below safety floor, clamping"
        );
    }
    Ok(adjusted.max(config.calorie_floor_kcal))
}

const fn protein_ratio(goal: Goal, config: &MacronutrientConfig) -> f64 {
    match goal {
        Goal::Lose => config.protein_lose_g_per_kg,
        Goal::Maintain => config.protein_maintain_g_per_kg,
        Goal::Gain => config.protein_gain_g_per_kg,
    }
}

const fn fat_ratio(goal: Goal, config: &MacronutrientConfig) -> f64 {
    match goal {
        Goal::Lose => config.fat_lose_g_per_kg,
        Goal::Maintain => config.fat_maintain_g_per_kg,
        Goal::Gain => config.fat_gain_g_per_kg,
    }
}

/// Split target calories into protein, fat, and carbohydrate grams
///
/// Protein and fat come from grams-per-kg ratios for the goal; the remaining
/// energy goes to carbohydrate. When protein and fat alone would exceed the
/// target, fat is trimmed first and then protein, so
/// `4 x protein + 9 x fat + 4 x carb == target_kcal` always holds.
///
/// # Errors
///
/// Returns `InvalidProfile` if the target or weight is not positive
pub fn compute_pfc(
    target_kcal: f64,
    weight_kg: f64,
    goal: Goal,
    config: &MacronutrientConfig,
) -> AppResult<MacroSplit> {
    if !target_kcal.is_finite() || target_kcal <= 0.0 {
        return Err(AppError::invalid_profile("Target calories must be positive"));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_profile("Weight must be positive"));
    }

    let protein_kcal = (weight_kg * protein_ratio(goal, config) * PROTEIN_KCAL_PER_G).min(target_kcal);
    let fat_kcal = (weight_kg * fat_ratio(goal, config) * FAT_KCAL_PER_G).min(target_kcal - protein_kcal);
    let carb_kcal = (target_kcal - protein_kcal - fat_kcal).max(0.0);

    Ok(MacroSplit {
        protein_g: protein_kcal / PROTEIN_KCAL_PER_G,
        fat_g: fat_kcal / FAT_KCAL_PER_G,
        carb_g: carb_kcal / CARB_KCAL_PER_G,
    })
}

/// Run the full estimation pipeline with an explicit configuration
///
/// # Errors
///
/// Returns `InvalidProfile` if any input validation fails
pub fn estimate_with(profile: &ClientProfile, config: &EstimationConfig) -> AppResult<EstimationResult> {
    let bmr_kcal = compute_bmr(profile, &config.bmr, &config.limits)?;
    let tdee_kcal = compute_tdee(bmr_kcal, profile.activity_level, &config.activity_factors)?;
    let target_kcal = compute_target(tdee_kcal, profile.goal, &config.goal_adjustment)?;
    let pfc = compute_pfc(
        target_kcal,
        profile.weight_kg,
        profile.goal,
        &config.macronutrients,
    )?;
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;

    debug!(
        bmr_kcal,
        tdee_kcal,
        target_kcal,
        protein_g = pfc.protein_g,
        fat_g = pfc.fat_g,
        carb_g = pfc.carb_g,
        "Estimation complete"
    );

    Ok(EstimationResult {
        bmi,
        bmr_kcal,
        tdee_kcal,
        target_kcal,
        protein_g: pfc.protein_g,
        fat_g: pfc.fat_g,
        carb_g: pfc.carb_g,
    })
}

/// Run the full estimation pipeline with the global configuration
///
/// # Errors
///
/// Returns `InvalidProfile` if any input validation fails
pub fn estimate(profile: &ClientProfile) -> AppResult<EstimationResult> {
    estimate_with(profile, EstimationConfig::global())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(goal: Goal) -> ClientProfile {
        ClientProfile {
            sex: Sex::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::Moderate,
            goal,
        }
    }

    #[test]
    fn test_pfc_trims_fat_before_protein() {
        let config = MacronutrientConfig::default();
        // 100 kg at 2.0 g/kg protein = 800 kcal, fat 0.8 g/kg = 720 kcal; target 1000
        let split = compute_pfc(1000.0, 100.0, Goal::Lose, &config).unwrap();
        assert!((split.protein_g - 200.0).abs() < 1e-9);
        assert!((split.fat_g - 200.0 / 9.0).abs() < 1e-9);
        assert!(split.carb_g.abs() < 1e-9);
    }

    #[test]
    fn test_pfc_trims_protein_when_target_tiny() {
        let config = MacronutrientConfig::default();
        let split = compute_pfc(400.0, 100.0, Goal::Lose, &config).unwrap();
        assert!((split.protein_g - 100.0).abs() < 1e-9);
        assert!(split.fat_g.abs() < 1e-9);
        assert!(split.carb_g.abs() < 1e-9);
    }

    #[test]
    fn test_estimate_with_defaults_matches_pinned_values() {
        let result = estimate_with(&profile(Goal::Lose), &EstimationConfig::default()).unwrap();
        assert!((result.bmr_kcal - 1648.75).abs() < 1e-9);
        assert!((result.tdee_kcal - 2555.5625).abs() < 1e-9);
        assert!((result.target_kcal - 2044.45).abs() < 1e-6);
        assert!((result.protein_g - 140.0).abs() < 1e-9);
        assert!((result.fat_g - 56.0).abs() < 1e-9);
        assert!((result.carb_g - 245.1125).abs() < 1e-6);
        assert!((result.bmi - 22.86).abs() < 1e-9);
    }

    #[test]
    fn test_validate_profile_rejects_non_finite() {
        let mut p = profile(Goal::Maintain);
        p.weight_kg = f64::NAN;
        let err = validate_profile(&p, &ProfileLimitsConfig::default()).unwrap_err();
        assert!(err.message.contains("Weight"));
    }
}
