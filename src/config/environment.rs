// ABOUTME: Environment configuration for deployment-specific settings
// ABOUTME: Database location, export directory, and deployment mode parsed from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Environment-based application configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default SQLite location, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/fitform.db";

/// Default directory for generated reports and CSV files
pub const DEFAULT_EXPORT_DIR: &str = "./exports";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Hosted deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for anything that is not a `sqlite:` URL
    pub fn parse_url(s: &str) -> Result<Self> {
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            bail!("Unsupported database URL {s:?}: only sqlite: URLs are supported");
        };
        if path_str == ":memory:" {
            return Ok(Self::Memory);
        }
        if path_str.is_empty() {
            bail!("Database URL {s:?} has no path");
        }
        Ok(Self::SQLite {
            path: PathBuf::from(path_str),
        })
    }

    /// Connection string understood by sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/fitform.db"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database: DatabaseUrl,
    /// Directory for generated reports and CSV files
    pub export_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ENVIRONMENT`, `DATABASE_URL` and `FITFORM_EXPORT_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is set but is not a `SQLite` URL
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env::var("ENVIRONMENT").unwrap_or_default());
        let database = DatabaseUrl::parse_url(
            &env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
        )?;
        let export_dir = PathBuf::from(
            env::var("FITFORM_EXPORT_DIR").unwrap_or_else(|_| DEFAULT_EXPORT_DIR.to_owned()),
        );

        Ok(Self {
            environment,
            database,
            export_dir,
        })
    }
}
