// ABOUTME: Core types and constants for the fitform trainer intake tool
// ABOUTME: Foundation crate with error handling, client models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

#![deny(unsafe_code)]

//! # fitform Core
//!
//! Shared types for the intake tool. Kept free of I/O so the estimation
//! engine and every collaborator agree on one vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `ClientProfile`, `ClientContact`, `EstimationResult`
//! - **constants**: Atwater factors and service identifiers

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile inputs, estimation outputs)
pub mod models;
