// ABOUTME: Property and regression tests for the estimation pipeline
// ABOUTME: BMR/TDEE/target/PFC invariants, safety floor, pinned reference values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors
//! Estimation engine tests
//!
//! Covers the public pipeline end to end:
//! - Mifflin-St Jeor BMR for both sexes and input validation
//! - TDEE monotonicity across activity levels
//! - Goal offsets and the calorie floor
//! - PFC energy accounting and trimming order
//! - BMI rounding

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitform::config::estimation::{
    ActivityFactorsConfig, BmrConfig, EstimationConfig, GoalAdjustmentConfig,
    MacronutrientConfig, ProfileLimitsConfig,
};
use fitform::errors::ErrorCode;
use fitform::intelligence::estimation_engine::{
    calculate_bmi, compute_bmr, compute_pfc, compute_target, compute_tdee, estimate, estimate_with,
};
use fitform::models::{ActivityLevel, ClientProfile, Goal, Sex};

mod common;

use common::{profile_with, reference_profile};

fn sample_profiles() -> Vec<ClientProfile> {
    let mut profiles = Vec::new();
    for sex in [Sex::Male, Sex::Female] {
        for activity_level in ActivityLevel::ALL {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                for (age, height_cm, weight_kg) in
                    [(18, 150.0, 45.0), (35, 168.0, 62.5), (64, 190.0, 120.0)]
                {
                    profiles.push(ClientProfile {
                        sex,
                        age,
                        height_cm,
                        weight_kg,
                        activity_level,
                        goal,
                    });
                }
            }
        }
    }
    profiles
}

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_reference_profile_pinned_values() {
    common::init_test_logging();
    let result = estimate_with(&reference_profile(), &EstimationConfig::default()).unwrap();

    assert!((result.bmr_kcal - 1648.75).abs() < 1e-9);
    assert!((result.tdee_kcal - 2555.5625).abs() < 1e-9);
    assert!((result.target_kcal - 2044.45).abs() < 1e-6);
    assert!((result.protein_g - 140.0).abs() < 1e-9);
    assert!((result.fat_g - 56.0).abs() < 1e-9);
    assert!((result.carb_g - 245.1125).abs() < 1e-6);
    assert!((result.bmi - 22.86).abs() < 1e-9);
}

#[test]
fn test_global_config_estimate_matches_defaults() {
    let result = estimate(&reference_profile()).unwrap();
    assert!((result.bmr_kcal - 1648.75).abs() < 1e-9);
}

#[test]
fn test_female_bmr_constant() {
    let profile = ClientProfile {
        sex: Sex::Female,
        ..reference_profile()
    };
    let bmr = compute_bmr(
        &profile,
        &BmrConfig::default(),
        &ProfileLimitsConfig::default(),
    )
    .unwrap();
    // 700 + 1093.75 - 150 - 161
    assert!((bmr - 1482.75).abs() < 1e-9);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_energy_values_are_positive() {
    let config = EstimationConfig::default();
    for profile in sample_profiles() {
        let result = estimate_with(&profile, &config).unwrap();
        assert!(result.bmr_kcal > 0.0, "{profile:?}");
        assert!(result.tdee_kcal > 0.0, "{profile:?}");
        assert!(result.target_kcal > 0.0, "{profile:?}");
    }
}

#[test]
fn test_macro_energy_matches_target() {
    let config = EstimationConfig::default();
    for profile in sample_profiles() {
        let result = estimate_with(&profile, &config).unwrap();
        assert!(result.protein_g >= 0.0);
        assert!(result.fat_g >= 0.0);
        assert!(result.carb_g >= 0.0);
        let drift = (result.macro_kcal() - result.target_kcal).abs() / result.target_kcal;
        assert!(drift <= 0.01, "{profile:?}: drift {drift}");
    }
}

#[test]
fn test_goal_ordering_against_tdee() {
    let config = EstimationConfig::default();
    let lose = estimate_with(&profile_with(Goal::Lose, ActivityLevel::Active), &config).unwrap();
    let maintain =
        estimate_with(&profile_with(Goal::Maintain, ActivityLevel::Active), &config).unwrap();
    let gain = estimate_with(&profile_with(Goal::Gain, ActivityLevel::Active), &config).unwrap();

    assert!(lose.target_kcal < lose.tdee_kcal);
    assert!((maintain.target_kcal - maintain.tdee_kcal).abs() < f64::EPSILON);
    assert!(gain.target_kcal > gain.tdee_kcal);
}

#[test]
fn test_target_never_below_floor() {
    let config = EstimationConfig::default();
    let floor = config.goal_adjustment.calorie_floor_kcal;
    for profile in sample_profiles() {
        let result = estimate_with(&profile, &config).unwrap();
        assert!(result.target_kcal >= floor, "{profile:?}");
    }
}

#[test]
fn test_floor_wins_over_deficit_for_small_profiles() {
    let profile = ClientProfile {
        sex: Sex::Female,
        age: 70,
        height_cm: 150.0,
        weight_kg: 40.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
    };
    let result = estimate_with(&profile, &EstimationConfig::default()).unwrap();
    // BMR 826.5, TDEE 991.8, a 20% deficit would give 793.44
    assert!((result.bmr_kcal - 826.5).abs() < 1e-9);
    assert!((result.tdee_kcal - 991.8).abs() < 1e-9);
    assert!((result.target_kcal - 1200.0).abs() < 1e-9);
}

#[test]
fn test_bmr_keeps_formula_value_for_small_profiles() {
    let profile = ClientProfile {
        sex: Sex::Female,
        age: 80,
        height_cm: 140.0,
        weight_kg: 35.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Lose,
    };
    let bmr = compute_bmr(&profile, &BmrConfig::default(), &ProfileLimitsConfig::default()).unwrap();
    assert!((bmr - 664.0).abs() < 1e-9);
}

#[test]
fn test_non_positive_bmr_is_invalid_profile() {
    let profile = ClientProfile {
        sex: Sex::Female,
        age: 120,
        height_cm: 1.0,
        weight_kg: 1.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintain,
    };
    let err = compute_bmr(&profile, &BmrConfig::default(), &ProfileLimitsConfig::default())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
}

#[test]
fn test_compute_target_clamps_to_floor() {
    let config = GoalAdjustmentConfig::default();
    let target = compute_target(1300.0, Goal::Lose, &config).unwrap();
    assert!((target - config.calorie_floor_kcal).abs() < f64::EPSILON);
}

#[test]
fn test_tdee_monotonic_in_activity_level() {
    let factors = ActivityFactorsConfig::default();
    let tdees: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|level| compute_tdee(1648.75, *level, &factors).unwrap())
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]), "{tdees:?}");
}

#[test]
fn test_pfc_trims_fat_for_heavy_low_target() {
    let split = compute_pfc(1768.8, 120.0, Goal::Lose, &MacronutrientConfig::default()).unwrap();
    assert!((split.protein_g - 240.0).abs() < 1e-9);
    assert!(split.fat_g < 96.0);
    assert!(split.carb_g.abs() < 1e-9);
    let kcal = split.fat_g.mul_add(9.0, split.protein_g * 4.0);
    assert!((kcal - 1768.8).abs() < 1e-6);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_age_zero_is_invalid_profile() {
    let profile = ClientProfile {
        age: 0,
        ..reference_profile()
    };
    let err = estimate_with(&profile, &EstimationConfig::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
}

#[test]
fn test_non_positive_measurements_are_invalid() {
    let config = EstimationConfig::default();
    for (height_cm, weight_kg) in [(0.0, 70.0), (175.0, 0.0), (-1.0, 70.0), (175.0, f64::INFINITY)] {
        let profile = ClientProfile {
            height_cm,
            weight_kg,
            ..reference_profile()
        };
        let err = estimate_with(&profile, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidProfile, "{height_cm} / {weight_kg}");
    }
}

#[test]
fn test_implausible_measurements_are_invalid() {
    let config = EstimationConfig::default();
    let too_heavy = ClientProfile {
        weight_kg: 400.0,
        ..reference_profile()
    };
    let too_old = ClientProfile {
        age: 150,
        ..reference_profile()
    };
    assert!(estimate_with(&too_heavy, &config).is_err());
    assert!(estimate_with(&too_old, &config).is_err());
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let factors = ActivityFactorsConfig::default();
    let err = compute_tdee(0.0, ActivityLevel::Light, &factors).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
    assert!(compute_tdee(f64::NAN, ActivityLevel::Light, &factors).is_err());
}

#[test]
fn test_unknown_activity_text_is_invalid_profile() {
    let err = "couch".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
    assert_eq!(
        "very-active".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::VeryActive
    );
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_rounds_to_two_decimals() {
    assert!((calculate_bmi(70.0, 175.0).unwrap() - 22.86).abs() < 1e-9);
    assert!((calculate_bmi(58.0, 162.0).unwrap() - 22.1).abs() < 1e-9);
}

#[test]
fn test_bmi_rejects_zero_height() {
    let err = calculate_bmi(70.0, 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidProfile);
}
