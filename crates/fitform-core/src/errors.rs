// ABOUTME: Unified error handling for the fitform workspace
// ABOUTME: Defines ErrorCode, AppError, and conversions from storage and export failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] tells the caller how to react: `InvalidProfile` goes back to
//! the person filling in the form, `OptionalFeatureUnavailable` silently
//! disables one feature, everything else is an operator problem.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Client profile is malformed or out of range
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile = 3000,

    // Optional features (4000-4999)
    /// An optional collaborator (e.g. pose detection) is missing or failed
    #[serde(rename = "OPTIONAL_FEATURE_UNAVAILABLE")]
    OptionalFeatureUnavailable = 4000,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// Writing a report or spreadsheet failed
    #[serde(rename = "EXPORT_ERROR")]
    ExportError = 9002,
    /// JSON (de)serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidProfile => "The client profile is invalid",
            Self::OptionalFeatureUnavailable => "An optional feature is unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::ExportError => "Export failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the person submitting the form can fix this by re-submitting
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidProfile)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid client profile
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidProfile, message)
    }

    /// Optional feature could not run
    pub fn feature_unavailable(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::OptionalFeatureUnavailable,
            format!("{}: {}", feature.into(), reason.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExportError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::export(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "sqlx-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "csv-errors")]
impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        Self::export(error.to_string()).with_source(error)
    }
}

#[cfg(feature = "xlsx-errors")]
impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::export(format!("Workbook error: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_profile_is_user_facing() {
        let error = AppError::invalid_profile("age must be positive");
        assert_eq!(error.code, ErrorCode::InvalidProfile);
        assert!(error.code.is_user_facing());
        assert_eq!(
            error.to_string(),
            "The client profile is invalid: age must be positive"
        );
    }

    #[test]
    fn test_feature_unavailable_message() {
        let error = AppError::feature_unavailable("posture", "no detector installed");
        assert_eq!(error.code, ErrorCode::OptionalFeatureUnavailable);
        assert!(!error.code.is_user_facing());
        assert!(error.message.contains("no detector installed"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = AppError::from(io);
        assert_eq!(error.code, ErrorCode::ExportError);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidProfile).unwrap();
        assert_eq!(json, "\"INVALID_PROFILE\"");
    }
}
