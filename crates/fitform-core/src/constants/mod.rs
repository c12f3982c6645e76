// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Physiological conversion factors shared by the engine and exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! Constants module

/// Energy density of macronutrients (Atwater factors)
pub mod energy {
    /// Protein energy density (kcal/g)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate energy density (kcal/g)
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const FITFORM: &str = "fitform";
}
