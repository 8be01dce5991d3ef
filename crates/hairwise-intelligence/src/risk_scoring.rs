// ABOUTME: Lifestyle and health-history risk passes plus final risk score clamping
// ABOUTME: Sums configured weights per triggered factor and caps the total at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk scoring
//!
//! The score is additive: each triggered lifestyle or health-history factor
//! contributes its configured weight, every nutritional gap adds a fixed
//! increment, and the sum saturates at [`MAX_RISK_SCORE`].

use crate::config::{RiskWeightsConfig, ThresholdsConfig, MAX_RISK_SCORE};
use crate::profile::{ActivityLevel, Profile, StressLevel};
use serde::{Deserialize, Serialize};

/// Per-pass contributions to the final risk score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    /// Lifestyle pass contribution
    pub lifestyle: u32,
    /// Health-history pass contribution
    pub health_history: u32,
    /// Nutritional gap contribution
    pub nutrition: u32,
}

impl RiskBreakdown {
    /// Final score clamped to 0..=100
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lifestyle
            .saturating_add(self.health_history)
            .saturating_add(self.nutrition)
            .min(MAX_RISK_SCORE)
    }
}

/// Whether the profile sleeps less than the configured minimum
#[must_use]
pub fn is_short_sleep(profile: &Profile, thresholds: &ThresholdsConfig) -> bool {
    profile.lifestyle.sleep_hours < thresholds.sleep_min_hours
}

/// Whether the profile reports high stress
#[must_use]
pub fn is_high_stress(profile: &Profile) -> bool {
    profile.lifestyle.stress_level == StressLevel::High
}

/// Lifestyle pass: sleep, stress, smoking, water, and activity
#[must_use]
pub fn score_lifestyle(
    profile: &Profile,
    weights: &RiskWeightsConfig,
    thresholds: &ThresholdsConfig,
) -> u32 {
    let lifestyle = &profile.lifestyle;
    [
        (is_short_sleep(profile, thresholds), weights.short_sleep),
        (is_high_stress(profile), weights.high_stress),
        (lifestyle.smoking, weights.smoking),
        (
            lifestyle.water_intake_liters < thresholds.water_min_liters,
            weights.low_water,
        ),
        (
            lifestyle.activity_level == ActivityLevel::Sedentary,
            weights.sedentary,
        ),
    ]
    .into_iter()
    .filter(|(triggered, _)| *triggered)
    .fold(0_u32, |score, (_, weight)| score.saturating_add(weight))
}

/// Health-history pass: thyroid, anemia, hormonal imbalance, and medications
///
/// Diabetes and free-text conditions are reported but not scored.
#[must_use]
pub fn score_health_history(profile: &Profile, weights: &RiskWeightsConfig) -> u32 {
    let health = &profile.health;
    [
        (health.thyroid, weights.thyroid),
        (health.anemia, weights.anemia),
        (health.hormonal_imbalance, weights.hormonal_imbalance),
        (!health.medications.is_empty(), weights.medications),
    ]
    .into_iter()
    .filter(|(triggered, _)| *triggered)
    .fold(0_u32, |score, (_, weight)| score.saturating_add(weight))
}

/// Gap contribution: a fixed increment per detected gap
#[must_use]
pub fn score_nutrition(gap_count: usize, weights: &RiskWeightsConfig) -> u32 {
    let gap_count = u32::try_from(gap_count).unwrap_or(u32::MAX);
    gap_count.saturating_mul(weights.per_gap)
}

/// Run every risk pass
#[must_use]
pub fn assess_risk(
    profile: &Profile,
    gap_count: usize,
    weights: &RiskWeightsConfig,
    thresholds: &ThresholdsConfig,
) -> RiskBreakdown {
    RiskBreakdown {
        lifestyle: score_lifestyle(profile, weights, thresholds),
        health_history: score_health_history(profile, weights),
        nutrition: score_nutrition(gap_count, weights),
    }
}
