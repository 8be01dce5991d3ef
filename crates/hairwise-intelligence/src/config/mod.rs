// ABOUTME: Analyzer configuration container with environment overrides and validation
// ABOUTME: Orchestrates nutrition and scoring configs and caches a validated global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analyzer Configuration Module
//!
//! Every constant the rule passes use lives here, so tests and deployments can
//! tune thresholds without touching the passes themselves.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, protein and iron targets
//! - `scoring` - Risk weights and rule thresholds
//! - `error` - Configuration error type

/// Configuration error type
pub mod error;
/// BMR, activity, protein, and iron coefficients
pub mod nutrition;
/// Risk weights and rule thresholds
pub mod scoring;

pub use error::ConfigError;
pub use nutrition::{ActivityFactorsConfig, BmrConfig, IronConfig, ProteinConfig};
pub use scoring::{RiskWeightsConfig, ThresholdsConfig, MAX_RISK_SCORE};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYZER_CONFIG: OnceLock<AnalyzerConfig> = OnceLock::new();

/// Main analyzer configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Protein g/kg multipliers
    pub protein: ProteinConfig,
    /// Iron requirement baselines
    pub iron: IronConfig,
    /// Risk score increments
    pub risk_weights: RiskWeightsConfig,
    /// Rule thresholds
    pub thresholds: ThresholdsConfig,
}

impl AnalyzerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYZER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analyzer config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
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
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.protein.validate()?;
        self.iron.validate()?;
        self.risk_weights.validate()?;
        self.thresholds.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Threshold overrides
        Self::apply_env_var(
            "HAIRWISE_SLEEP_MIN_HOURS",
            &mut self.thresholds.sleep_min_hours,
        )?;
        Self::apply_env_var(
            "HAIRWISE_WATER_MIN_LITERS",
            &mut self.thresholds.water_min_liters,
        )?;
        Self::apply_env_var(
            "HAIRWISE_MIN_PROTEIN_SOURCES",
            &mut self.thresholds.min_protein_sources,
        )?;
        Self::apply_env_var(
            "HAIRWISE_TIMELINE_EXTENSION_RISK",
            &mut self.thresholds.timeline_extension_risk,
        )?;

        // Risk weight overrides
        let weights = &mut self.risk_weights;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_SLEEP", &mut weights.short_sleep)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_STRESS", &mut weights.high_stress)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_SMOKING", &mut weights.smoking)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_WATER", &mut weights.low_water)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_SEDENTARY", &mut weights.sedentary)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_THYROID", &mut weights.thyroid)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_ANEMIA", &mut weights.anemia)?;
        Self::apply_env_var(
            "HAIRWISE_RISK_WEIGHT_HORMONAL",
            &mut weights.hormonal_imbalance,
        )?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_MEDICATIONS", &mut weights.medications)?;
        Self::apply_env_var("HAIRWISE_RISK_WEIGHT_PER_GAP", &mut weights.per_gap)?;

        Ok(self)
    }
}
