// ABOUTME: Client profile models collected by the intake form
// ABOUTME: Sex, ActivityLevel, Goal enums plus the ClientProfile and ClientContact records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, selects the BMR coefficient set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficient set
    Male,
    /// Female coefficient set
    Female,
}

impl Sex {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            other => Err(AppError::invalid_profile(format!("unknown sex: {other:?}"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Habitual activity level, ordered from least to most active
///
/// The derived `Ord` follows declaration order, so
/// `Sedentary < Light < Moderate < Active < VeryActive`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk work, little or no exercise
    Sedentary,
    /// Light exercise 1-2 days/week
    Light,
    /// Exercise 3-4 days/week
    Moderate,
    /// Hard exercise 5+ days/week
    Active,
    /// Athlete-level training
    VeryActive,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Short description shown next to the level on reports
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "mostly desk work, little or no exercise",
            Self::Light => "light exercise 1-2 days/week",
            Self::Moderate => "exercise 3-4 days/week",
            Self::Active => "hard exercise 5+ days/week",
            Self::VeryActive => "athlete-level training",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "extra_active" | "athlete" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_profile(format!(
                "unknown activity level: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "loss" | "cut" | "weight_loss" => Ok(Self::Lose),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            "gain" | "bulk" | "muscle_gain" => Ok(Self::Gain),
            other => Err(AppError::invalid_profile(format!("unknown goal: {other:?}"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biometric inputs for one form submission
///
/// Range checks live in the estimation engine, which owns the plausibility
/// bounds; this record only carries the values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClientProfile {
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Body composition goal
    pub goal: Goal,
}

/// Contact and preference details captured with the profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientContact {
    /// Client display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Free-text dietary preferences
    pub dietary_prefs: String,
    /// Comma-separated allergens to avoid
    pub allergies: String,
}

impl ClientContact {
    /// Allergens split out of the comma-separated field, blanks dropped
    #[must_use]
    pub fn allergen_list(&self) -> Vec<String> {
        self.allergies
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
