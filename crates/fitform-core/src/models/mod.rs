// ABOUTME: Core data models for the fitform intake tool
// ABOUTME: Re-exports client profile inputs and estimation outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! # Data Models
//!
//! - `ClientProfile`: biometric inputs of one form submission
//! - `ClientContact`: name, contact details, and dietary notes
//! - `EstimationResult`: BMR/TDEE/target and PFC split derived from a profile

mod estimation;
mod profile;

pub use estimation::EstimationResult;
pub use profile::{ActivityLevel, ClientContact, ClientProfile, Goal, Sex};
