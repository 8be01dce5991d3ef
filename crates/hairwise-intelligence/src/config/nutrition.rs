// ABOUTME: Nutrition configuration for derived daily needs
// ABOUTME: Configures BMR coefficients, activity factors, protein multipliers, and iron baselines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Parameters for the derived-needs pass: calories, protein, and iron targets.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Iron RDA: Institute of Medicine (2001), Dietary Reference Intakes for iron;
//!   vegetarian intake 1.8x due to lower non-heme bioavailability

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also used for `other`
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very_active: f64,
}

/// Protein multipliers in grams per kilogram of bodyweight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinConfig {
    /// Sedentary: 0.8 g/kg (DRI minimum)
    pub sedentary_g_per_kg: f64,
    /// Light: 0.8 g/kg
    pub light_g_per_kg: f64,
    /// Moderate: 1.0 g/kg
    pub moderate_g_per_kg: f64,
    /// Active: 1.2 g/kg
    pub active_g_per_kg: f64,
    /// Very active: 1.5 g/kg
    pub very_active_g_per_kg: f64,
    /// Added for vegetarians to offset lower plant protein digestibility: 0.1 g/kg
    pub vegetarian_bonus_g_per_kg: f64,
}

/// Daily iron requirement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IronConfig {
    /// Females below the age limit: 18 mg
    pub premenopausal_female_mg: f64,
    /// Everyone else: 8 mg
    pub baseline_mg: f64,
    /// Age at which the female requirement drops to baseline: 50
    pub female_age_limit: u32,
    /// Vegetarian multiplier for non-heme iron: 1.8
    pub vegetarian_multiplier: f64,
}

fn ensure_finite(values: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

impl BmrConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[
                self.msj_weight_coef,
                self.msj_height_coef,
                self.msj_age_coef,
                self.msj_male_constant,
                self.msj_female_constant,
            ],
            "Mifflin-St Jeor coefficients must be finite",
        )?;
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Mifflin-St Jeor weight and height coefficients must be positive",
            ));
        }
        if self.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Mifflin-St Jeor age coefficient must not be positive",
            ));
        }
        Ok(())
    }
}

impl ActivityFactorsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[
                self.sedentary,
                self.light,
                self.moderate,
                self.active,
                self.very_active,
            ],
            "Activity factors must be finite",
        )?;
        if self.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sedentary activity factor must be at least 1.0",
            ));
        }
        if self.sedentary >= self.light
            || self.light >= self.moderate
            || self.moderate >= self.active
            || self.active >= self.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl ProteinConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[
                self.sedentary_g_per_kg,
                self.light_g_per_kg,
                self.moderate_g_per_kg,
                self.active_g_per_kg,
                self.very_active_g_per_kg,
                self.vegetarian_bonus_g_per_kg,
            ],
            "Protein multipliers must be finite",
        )?;
        if self.sedentary_g_per_kg <= 0.0 || self.vegetarian_bonus_g_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein multipliers must be positive",
            ));
        }
        if self.sedentary_g_per_kg > self.light_g_per_kg
            || self.light_g_per_kg > self.moderate_g_per_kg
            || self.moderate_g_per_kg > self.active_g_per_kg
            || self.active_g_per_kg > self.very_active_g_per_kg
        {
            return Err(ConfigError::InvalidRange(
                "Protein multipliers must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

impl IronConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            &[
                self.premenopausal_female_mg,
                self.baseline_mg,
                self.vegetarian_multiplier,
            ],
            "Iron targets must be finite",
        )?;
        if self.baseline_mg <= 0.0 || self.premenopausal_female_mg < self.baseline_mg {
            return Err(ConfigError::InvalidRange(
                "Iron baseline must be positive and not exceed the premenopausal requirement",
            ));
        }
        if self.vegetarian_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Vegetarian iron multiplier must be at least 1.0",
            ));
        }
        Ok(())
    }
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

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            sedentary_g_per_kg: 0.8,
            light_g_per_kg: 0.8,
            moderate_g_per_kg: 1.0,
            active_g_per_kg: 1.2,
            very_active_g_per_kg: 1.5,
            vegetarian_bonus_g_per_kg: 0.1,
        }
    }
}

impl Default for IronConfig {
    fn default() -> Self {
        Self {
            premenopausal_female_mg: 18.0,
            baseline_mg: 8.0,
            female_age_limit: 50,
            vegetarian_multiplier: 1.8,
        }
    }
}
