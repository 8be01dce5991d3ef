// ABOUTME: Root cause ranking from detected gaps, stress, sleep, and BMI
// ABOUTME: Stable-sorts candidate causes by descending confidence and keeps the top entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ThresholdsConfig;
use crate::nutritional_gaps::{Nutrient, NutritionalGap};
use crate::profile::{Gender, Profile};
use crate::risk_scoring::{is_high_stress, is_short_sleep};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Priority tier of a root cause
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Contributing factor
    Medium,
    /// Major factor
    High,
    /// Primary factor
    Critical,
}

/// A probable cause of hair loss
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RootCause {
    /// Cause label
    pub cause: String,
    /// Confidence percentage
    pub confidence: u8,
    /// Explanation shown to the user
    pub description: String,
    /// Priority tier
    pub priority: Priority,
}

impl RootCause {
    fn new(
        cause: &str,
        confidence: u8,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            cause: cause.to_owned(),
            confidence,
            description: description.into(),
            priority,
        }
    }
}

fn has_gap(gaps: &[NutritionalGap], nutrient: Nutrient) -> bool {
    gaps.iter().any(|gap| gap.nutrient == nutrient)
}

/// Collect candidate causes, then rank them by confidence
///
/// `bmi` must already be rounded to one decimal. Ties keep candidate order.
#[must_use]
pub fn identify_root_causes(
    profile: &Profile,
    gaps: &[NutritionalGap],
    bmi: f64,
    thresholds: &ThresholdsConfig,
) -> Vec<RootCause> {
    let vegetarian = profile.is_vegetarian();
    let mut causes = Vec::new();

    if has_gap(gaps, Nutrient::Protein) {
        let advice = if vegetarian {
            "Plant proteins need to be combined (lentils + rice, beans + quinoa) for complete amino acids."
        } else {
            "Include lean meats, fish, eggs, and dairy for complete protein profile."
        };
        causes.push(RootCause::new(
            "Insufficient Protein Diversity",
            82,
            format!("Your current protein intake lacks variety. {advice}"),
            Priority::High,
        ));
    }

    if has_gap(gaps, Nutrient::Iron) {
        let at_risk = profile.basic_info.gender == Gender::Female || vegetarian;
        let advice = if vegetarian {
            "Plant iron (non-heme) has lower absorption - pair with vitamin C rich foods (citrus, tomatoes, peppers)."
        } else {
            "Include red meat, liver, or fortified cereals for better iron absorption."
        };
        causes.push(RootCause::new(
            "Iron Deficiency",
            if at_risk { 88 } else { 75 },
            format!("Low iron levels are disrupting your hair growth cycle. {advice}"),
            Priority::Critical,
        ));
    }

    if has_gap(gaps, Nutrient::VitaminB12) {
        causes.push(RootCause::new(
            "Vitamin B12 Deficiency",
            90,
            "B12 is primarily found in animal products. Deficiency leads to poor cell division and affects hair follicle regeneration. Supplement or fortified foods are essential.",
            Priority::Critical,
        ));
    }

    if is_high_stress(profile) {
        causes.push(RootCause::new(
            "Chronic Stress (Telogen Effluvium)",
            78,
            "Elevated cortisol from chronic stress is pushing hair follicles into resting (telogen) phase prematurely, causing excessive shedding.",
            Priority::High,
        ));
    }

    if is_short_sleep(profile, thresholds) {
        causes.push(RootCause::new(
            "Sleep Deprivation",
            72,
            "Inadequate sleep disrupts growth hormone secretion needed for cellular repair and hair follicle regeneration.",
            Priority::Medium,
        ));
    }

    if bmi < thresholds.bmi_underweight || bmi > thresholds.bmi_obese {
        let status = if bmi < thresholds.bmi_underweight {
            "Underweight"
        } else {
            "Overweight"
        };
        causes.push(RootCause::new(
            "BMI Imbalance",
            68,
            format!(
                "{status} status affects hormonal regulation and nutrient distribution to hair follicles."
            ),
            Priority::Medium,
        ));
    }

    // Stable sort: equal confidences keep insertion order
    causes.sort_by_key(|cause| Reverse(cause.confidence));
    causes.truncate(thresholds.max_root_causes);
    causes
}
