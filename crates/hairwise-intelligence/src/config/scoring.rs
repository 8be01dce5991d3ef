// ABOUTME: Scoring configuration for risk weights and rule thresholds
// ABOUTME: Configures lifestyle and health-history risk increments, BMI bands, and insight bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound of the risk score and of any single weight
pub const MAX_RISK_SCORE: u32 = 100;

/// Risk score increments per triggered factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWeightsConfig {
    /// Sleep below the minimum: 15
    pub short_sleep: u32,
    /// High stress: 20
    pub high_stress: u32,
    /// Smoker: 25
    pub smoking: u32,
    /// Water below the minimum: 10
    pub low_water: u32,
    /// Sedentary activity: 10
    pub sedentary: u32,
    /// Thyroid condition: 20
    pub thyroid: u32,
    /// Anemia: 25
    pub anemia: u32,
    /// Hormonal imbalance: 15
    pub hormonal_imbalance: u32,
    /// Any medication listed: 10
    pub medications: u32,
    /// Added per nutritional gap: 5
    pub per_gap: u32,
}

/// Rule thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Sleep below this many hours is short: 7.0
    pub sleep_min_hours: f64,
    /// Water below this many liters is low: 2.0
    pub water_min_liters: f64,
    /// Fewer distinct protein sources than this is a gap: 2
    pub min_protein_sources: usize,
    /// BMI below this is underweight: 18.5
    pub bmi_underweight: f64,
    /// BMI at or above this is overweight: 25.0
    pub bmi_overweight: f64,
    /// BMI at or above this is obese; above it counts as a root cause: 30.0
    pub bmi_obese: f64,
    /// Risk above this extends every timeline phase: 70
    pub timeline_extension_risk: u32,
    /// Risk below this gets the best outlook band: 40
    pub insight_low_risk: u32,
    /// Risk below this gets the middle outlook band: 65
    pub insight_moderate_risk: u32,
    /// Root causes kept after ranking: 5
    pub max_root_causes: usize,
}

impl RiskWeightsConfig {
    fn all(&self) -> [u32; 10] {
        [
            self.short_sleep,
            self.high_stress,
            self.smoking,
            self.low_water,
            self.sedentary,
            self.thyroid,
            self.anemia,
            self.hormonal_imbalance,
            self.medications,
            self.per_gap,
        ]
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.all().iter().any(|weight| *weight > MAX_RISK_SCORE) {
            return Err(ConfigError::InvalidWeights(
                "Risk weights must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

/// NaN and infinities fail every threshold comparison, so reject them up front
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl ThresholdsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sleep_min_hours > 0.0 && self.sleep_min_hours <= 24.0) {
            return Err(ConfigError::ValueOutOfRange(
                "sleep_min_hours must be within (0, 24]",
            ));
        }
        if !is_positive_finite(self.water_min_liters) {
            return Err(ConfigError::ValueOutOfRange(
                "water_min_liters must be a finite positive number",
            ));
        }
        let bmi = [self.bmi_underweight, self.bmi_overweight, self.bmi_obese];
        if !bmi.into_iter().all(is_positive_finite)
            || self.bmi_underweight >= self.bmi_overweight
            || self.bmi_overweight >= self.bmi_obese
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and ascending",
            ));
        }
        if self.insight_low_risk >= self.insight_moderate_risk
            || self.insight_moderate_risk > MAX_RISK_SCORE
        {
            return Err(ConfigError::InvalidRange(
                "insight_low_risk must be < insight_moderate_risk <= 100",
            ));
        }
        if self.timeline_extension_risk > MAX_RISK_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "timeline_extension_risk must be <= 100",
            ));
        }
        if self.max_root_causes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_root_causes must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for RiskWeightsConfig {
    fn default() -> Self {
        Self {
            short_sleep: 15,
            high_stress: 20,
            smoking: 25,
            low_water: 10,
            sedentary: 10,
            thyroid: 20,
            anemia: 25,
            hormonal_imbalance: 15,
            medications: 10,
            per_gap: 5,
        }
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            sleep_min_hours: 7.0,
            water_min_liters: 2.0,
            min_protein_sources: 2,
            bmi_underweight: 18.5,
            bmi_overweight: 25.0,
            bmi_obese: 30.0,
            timeline_extension_risk: 70,
            insight_low_risk: 40,
            insight_moderate_risk: 65,
            max_root_causes: 5,
        }
    }
}
