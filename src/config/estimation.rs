// ABOUTME: Estimation engine configuration: BMR coefficients, activity factors, goal offsets, macros
// ABOUTME: Environment-driven overrides with validation and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Estimation Configuration
//!
//! All formula constants used by the estimation engine. Defaults are standard
//! published values; each can be overridden through a `FITFORM_*` environment
//! variable.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export FITFORM_CALORIE_FLOOR_KCAL=1400
//!    export FITFORM_LOSE_OFFSET_PERCENT=-15
//!    ```
//!
//! 2. Default values (if env vars not set)

use fitform_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is outside its plausible range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Global configuration singleton
static ESTIMATION_CONFIG: OnceLock<EstimationConfig> = OnceLock::new();

/// Complete estimation engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Input plausibility bounds
    pub limits: ProfileLimitsConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie offsets and the safety floor
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Protein/fat grams-per-kg ratios per goal
    pub macronutrients: MacronutrientConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Formula: BMR = (w x weight) + (h x height) + (a x age) + sex constant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Upper plausibility bounds for profile inputs
///
/// The lower bound is always "strictly positive".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLimitsConfig {
    /// Maximum accepted age (years)
    pub max_age: u32,
    /// Maximum accepted height (cm)
    pub max_height_cm: f64,
    /// Maximum accepted weight (kg)
    pub max_weight_kg: f64,
}

impl Default for ProfileLimitsConfig {
    fn default() -> Self {
        Self {
            max_age: 120,
            max_height_cm: 272.0,
            max_weight_kg: 350.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Goal calorie offsets (percent of TDEE) and the minimum intake floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Offset for weight loss: -20%
    pub lose_offset_percent: f64,
    /// Offset for maintenance: 0%
    pub maintain_offset_percent: f64,
    /// Offset for weight gain: +10%
    pub gain_offset_percent: f64,
    /// Target never drops below this (kcal/day)
    pub calorie_floor_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_offset_percent: -20.0,
            maintain_offset_percent: 0.0,
            gain_offset_percent: 10.0,
            calorie_floor_kcal: 1200.0,
        }
    }
}

/// Grams-per-kg bodyweight ratios for protein and fat, per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein while in deficit (g/kg): 2.0
    pub protein_lose_g_per_kg: f64,
    /// Protein at maintenance (g/kg): 1.6
    pub protein_maintain_g_per_kg: f64,
    /// Protein while in surplus (g/kg): 1.8
    pub protein_gain_g_per_kg: f64,
    /// Fat while in deficit (g/kg): 0.8
    pub fat_lose_g_per_kg: f64,
    /// Fat at maintenance (g/kg): 0.9
    pub fat_maintain_g_per_kg: f64,
    /// Fat while in surplus (g/kg): 1.0
    pub fat_gain_g_per_kg: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_lose_g_per_kg: 2.0,
            protein_maintain_g_per_kg: 1.6,
            protein_gain_g_per_kg: 1.8,
            fat_lose_g_per_kg: 0.8,
            fat_maintain_g_per_kg: 0.9,
            fat_gain_g_per_kg: 1.0,
        }
    }
}

impl EstimationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ESTIMATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load estimation config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.all_values().iter().all(|v| v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "configuration values must be finite numbers",
            ));
        }
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let limits = &self.limits;
        if limits.max_age == 0 || limits.max_height_cm <= 0.0 || limits.max_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "profile limits must be positive",
            ));
        }

        let af = &self.activity_factors;
        if af.sedentary < 1.0 || af.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if af.sedentary >= af.light
            || af.light >= af.moderate
            || af.moderate >= af.active
            || af.active >= af.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goal = &self.goal_adjustment;
        if goal.lose_offset_percent >= 0.0 || goal.lose_offset_percent <= -50.0 {
            return Err(ConfigError::ValueOutOfRange(
                "lose offset must be between -50% and 0%",
            ));
        }
        if goal.maintain_offset_percent != 0.0 {
            return Err(ConfigError::ValueOutOfRange("maintain offset must be 0%"));
        }
        if goal.gain_offset_percent <= 0.0 || goal.gain_offset_percent >= 50.0 {
            return Err(ConfigError::ValueOutOfRange(
                "gain offset must be between 0% and 50%",
            ));
        }
        if goal.calorie_floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie floor must be positive",
            ));
        }

        let m = &self.macronutrients;
        let ratios = [
            m.protein_lose_g_per_kg,
            m.protein_maintain_g_per_kg,
            m.protein_gain_g_per_kg,
        ];
        if ratios.iter().any(|r| !(0.5..=3.0).contains(r)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein ratios must be between 0.5 and 3.0 g/kg",
            ));
        }
        let fats = [
            m.fat_lose_g_per_kg,
            m.fat_maintain_g_per_kg,
            m.fat_gain_g_per_kg,
        ];
        if fats.iter().any(|r| !(0.3..=2.0).contains(r)) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat ratios must be between 0.3 and 2.0 g/kg",
            ));
        }

        Ok(())
    }

    /// Every floating-point value in the configuration
    const fn all_values(&self) -> [f64; 22] {
        let (b, l, af, g, m) = (
            &self.bmr,
            &self.limits,
            &self.activity_factors,
            &self.goal_adjustment,
            &self.macronutrients,
        );
        [
            b.msj_weight_coef,
            b.msj_height_coef,
            b.msj_age_coef,
            b.msj_male_constant,
            b.msj_female_constant,
            l.max_height_cm,
            l.max_weight_kg,
            af.sedentary,
            af.light,
            af.moderate,
            af.active,
            af.very_active,
            g.lose_offset_percent,
            g.maintain_offset_percent,
            g.gain_offset_percent,
            g.calorie_floor_kcal,
            m.protein_lose_g_per_kg,
            m.protein_maintain_g_per_kg,
            m.protein_gain_g_per_kg,
            m.fat_lose_g_per_kg,
            m.fat_maintain_g_per_kg,
            m.fat_gain_g_per_kg,
        ]
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env("FITFORM_MAX_AGE", &mut self.limits.max_age)?;
        override_from_env("FITFORM_MAX_HEIGHT_CM", &mut self.limits.max_height_cm)?;
        override_from_env("FITFORM_MAX_WEIGHT_KG", &mut self.limits.max_weight_kg)?;

        let af = &mut self.activity_factors;
        override_from_env("FITFORM_ACTIVITY_SEDENTARY", &mut af.sedentary)?;
        override_from_env("FITFORM_ACTIVITY_LIGHT", &mut af.light)?;
        override_from_env("FITFORM_ACTIVITY_MODERATE", &mut af.moderate)?;
        override_from_env("FITFORM_ACTIVITY_ACTIVE", &mut af.active)?;
        override_from_env("FITFORM_ACTIVITY_VERY_ACTIVE", &mut af.very_active)?;

        let goal = &mut self.goal_adjustment;
        override_from_env("FITFORM_LOSE_OFFSET_PERCENT", &mut goal.lose_offset_percent)?;
        override_from_env("FITFORM_GAIN_OFFSET_PERCENT", &mut goal.gain_offset_percent)?;
        override_from_env("FITFORM_CALORIE_FLOOR_KCAL", &mut goal.calorie_floor_kcal)?;

        let m = &mut self.macronutrients;
        override_from_env("FITFORM_PROTEIN_LOSE_G_PER_KG", &mut m.protein_lose_g_per_kg)?;
        override_from_env(
            "FITFORM_PROTEIN_MAINTAIN_G_PER_KG",
            &mut m.protein_maintain_g_per_kg,
        )?;
        override_from_env("FITFORM_PROTEIN_GAIN_G_PER_KG", &mut m.protein_gain_g_per_kg)?;
        override_from_env("FITFORM_FAT_LOSE_G_PER_KG", &mut m.fat_lose_g_per_kg)?;
        override_from_env("FITFORM_FAT_MAINTAIN_G_PER_KG", &mut m.fat_maintain_g_per_kg)?;
        override_from_env("FITFORM_FAT_GAIN_G_PER_KG", &mut m.fat_gain_g_per_kg)?;

        Ok(self)
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(key) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val:?}")))?;
    }
    Ok(())
}
