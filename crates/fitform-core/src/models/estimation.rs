// ABOUTME: Output record of the estimation engine
// ABOUTME: EstimationResult with energy figures, BMI, and the PFC gram split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use crate::constants::energy::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use serde::{Deserialize, Serialize};

/// Derived nutrition estimates for one client profile
///
/// Recomputed on every submission and never mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EstimationResult {
    /// Body Mass Index (kg/m^2), two decimals
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr_kcal: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee_kcal: f64,
    /// Goal-adjusted daily intake (kcal/day)
    pub target_kcal: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
    /// Daily carbohydrate (grams)
    pub carb_g: f64,
}

impl EstimationResult {
    /// Energy accounted for by the gram split (kcal)
    #[must_use]
    pub fn macro_kcal(&self) -> f64 {
        self.fat_g.mul_add(
            FAT_KCAL_PER_G,
            self.protein_g
                .mul_add(PROTEIN_KCAL_PER_G, self.carb_g * CARB_KCAL_PER_G),
        )
    }
}
