// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample profiles, and in-memory database helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitform`

use anyhow::Result;
use fitform::database::Database;
use fitform::intelligence::posture::{Landmark, PoseLandmarks};
use fitform::models::{ActivityLevel, ClientContact, ClientProfile, Goal, Sex};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The reference profile: male, 30 y, 175 cm, 70 kg, moderate, lose
pub fn reference_profile() -> ClientProfile {
    ClientProfile {
        sex: Sex::Male,
        age: 30,
        height_cm: 175.0,
        weight_kg: 70.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Lose,
    }
}

/// A profile with the given goal and activity level
pub fn profile_with(goal: Goal, activity_level: ActivityLevel) -> ClientProfile {
    ClientProfile {
        goal,
        activity_level,
        ..reference_profile()
    }
}

/// Contact details with the given allergies
pub fn sample_contact(name: &str, allergies: &str) -> ClientContact {
    ClientContact {
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "090-0000-0000".to_owned(),
        dietary_prefs: "high protein".to_owned(),
        allergies: allergies.to_owned(),
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// A level 33-point landmark set: shoulders, hips and ears horizontal,
/// knees as wide as ankles
pub fn level_pose() -> PoseLandmarks {
    let mut landmarks = vec![Landmark { x: 0.5, y: 0.5 }; 33];
    let mut set = |index: usize, x: f64, y: f64| landmarks[index] = Landmark { x, y };
    set(7, 0.55, 0.10);
    set(8, 0.45, 0.10);
    set(11, 0.62, 0.25);
    set(12, 0.38, 0.25);
    set(23, 0.58, 0.55);
    set(24, 0.42, 0.55);
    set(25, 0.57, 0.75);
    set(26, 0.43, 0.75);
    set(27, 0.57, 0.95);
    set(28, 0.43, 0.95);
    PoseLandmarks { landmarks }
}
