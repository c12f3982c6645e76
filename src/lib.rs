// ABOUTME: Main library entry point for the fitform trainer intake tool
// ABOUTME: Estimation, meal templates, posture checks, lead storage, and exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

#![deny(unsafe_code)]

//! # fitform
//!
//! Client intake for personal trainers. A submitted profile is turned into
//! standard nutrition estimates (BMR, TDEE, goal calories, PFC split), an
//! allergen-aware meal template, an optional posture screening, and a
//! Markdown report. Leads are stored in a local `SQLite` database and can be
//! exported as CSV.
//!
//! ## Architecture
//!
//! - **Core** (`fitform-core`): domain types, errors, constants
//! - **Config**: estimation constants and environment settings
//! - **Intelligence**: the pure estimation engine, meal templates, posture
//! - **Database**: lead and assessment persistence
//! - **Export**: report, CSV, and messaging outputs
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitform::intelligence::estimate;
//! use fitform::models::{ActivityLevel, ClientProfile, Goal, Sex};
//!
//! fn main() -> fitform::errors::AppResult<()> {
//!     let profile = ClientProfile {
//!         sex: Sex::Male,
//!         age: 30,
//!         height_cm: 175.0,
//!         weight_kg: 70.0,
//!         activity_level: ActivityLevel::Moderate,
//!         goal: Goal::Lose,
//!     };
//!     let result = estimate(&profile)?;
//!     println!("target: {:.0} kcal", result.target_kcal);
//!     Ok(())
//! }
//! ```

/// Estimation constants and environment configuration
pub mod config;

/// `SQLite` storage for leads and assessments
pub mod database;

/// Report, CSV, and messaging exports
pub mod export;

/// Estimation engine, meal templates, and posture analysis
pub mod intelligence;

/// Structured logging setup and domain log events
pub mod logging;

pub use fitform_core::{constants, errors, models};
