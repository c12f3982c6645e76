// ABOUTME: Assessment intelligence: energy estimation, meal templates, posture checks
// ABOUTME: Pure computation modules consumed by storage, exports and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! # Intelligence Module
//!
//! Everything that turns a client profile into recommendations lives here.
//! None of these modules touch the database or the filesystem except the
//! landmark file reader in [`posture`].

/// BMR, TDEE, calorie target and macronutrient split
pub mod estimation_engine;
/// Meal and training templates
pub mod meal_plan;
/// Front-view posture screening
pub mod posture;

pub use estimation_engine::{
    calculate_bmi, compute_bmr, compute_pfc, compute_target, compute_tdee, estimate,
    estimate_with, validate_profile, MacroSplit,
};
pub use meal_plan::{generate_meal_plan, generate_meal_template, CaloricBand, MealPlan};
pub use posture::{
    analyze_posture, run_posture_check, LandmarkFileDetector, PoseDetector, PoseLandmarks,
    PostureReport, PostureStatus, PostureThresholds, UnavailableDetector,
};
