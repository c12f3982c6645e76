// ABOUTME: Configuration management module for estimation constants and runtime settings
// ABOUTME: Environment-driven settings with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Configuration module
//!
//! - **Estimation**: formula constants, plausibility limits and policy values
//! - **Environment**: database location, export directory, deployment mode
//!
//! All values come from defaults overridden by environment variables; there
//! are no configuration files.

/// Environment and storage configuration
pub mod environment;
/// Estimation constants and policy values
pub mod estimation;

pub use environment::{AppConfig, DatabaseUrl, Environment};
pub use estimation::{ConfigError, EstimationConfig};
