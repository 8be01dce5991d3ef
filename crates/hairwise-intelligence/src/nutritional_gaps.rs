// ABOUTME: Nutrition gap pass detecting protein, iron, omega-3, B12, zinc, and biotin shortfalls
// ABOUTME: Produces ordered NutritionalGap entries with diet-aware recommended targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ThresholdsConfig;
use crate::nutrition_calculator::DailyNeeds;
use crate::profile::{B12Intake, Gender, IntakeLevel, Omega3Frequency, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient tracked by the gap pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Nutrient {
    /// Protein
    Protein,
    /// Iron
    Iron,
    /// Omega-3 fatty acids
    #[serde(rename = "Omega-3 Fatty Acids")]
    Omega3,
    /// Vitamin B12
    #[serde(rename = "Vitamin B12")]
    VitaminB12,
    /// Zinc
    Zinc,
    /// Biotin
    #[serde(rename = "Biotin (Vitamin B7)")]
    Biotin,
}

impl Nutrient {
    /// Display name used in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::Iron => "Iron",
            Self::Omega3 => "Omega-3 Fatty Acids",
            Self::VitaminB12 => "Vitamin B12",
            Self::Zinc => "Zinc",
            Self::Biotin => "Biotin (Vitamin B7)",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How urgently a gap needs attention
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth correcting
    Medium,
    /// Likely contributing to hair loss
    High,
    /// Needs immediate attention
    Critical,
}

/// A detected nutritional shortfall
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalGap {
    /// Nutrient concerned
    pub nutrient: Nutrient,
    /// Description of the current state
    pub current: String,
    /// Recommended daily target
    pub recommended: String,
    /// Severity tier
    pub severity: Severity,
    /// What the nutrient does for hair
    pub impact: String,
}

impl NutritionalGap {
    fn new(
        nutrient: Nutrient,
        current: &str,
        recommended: String,
        severity: Severity,
        impact: &str,
    ) -> Self {
        Self {
            nutrient,
            current: current.to_owned(),
            recommended,
            severity,
            impact: impact.to_owned(),
        }
    }

    /// Whether the gap is critical
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// Detect nutritional gaps in a fixed order: protein, iron, omega-3, B12, zinc, biotin
#[must_use]
pub fn detect_nutritional_gaps(
    profile: &Profile,
    needs: &DailyNeeds,
    thresholds: &ThresholdsConfig,
) -> Vec<NutritionalGap> {
    let diet = &profile.diet;
    let vegetarian = profile.is_vegetarian();
    let mut gaps = Vec::new();

    if diet.protein_sources.len() < thresholds.min_protein_sources {
        let source_kind = if vegetarian {
            "plant sources"
        } else {
            "diverse sources"
        };
        gaps.push(NutritionalGap::new(
            Nutrient::Protein,
            "Insufficient variety",
            format!("{}g per day from {source_kind}", needs.protein_g),
            Severity::High,
            "Hair structure, keratin production, follicle strength",
        ));
    }

    if !diet.iron_rich_foods {
        let recommended = if vegetarian {
            format!("{}mg per day (with vitamin C for absorption)", needs.iron_mg)
        } else {
            format!("{}mg per day", needs.iron_mg)
        };
        let severity = if profile.basic_info.gender == Gender::Female || vegetarian {
            Severity::Critical
        } else {
            Severity::High
        };
        gaps.push(NutritionalGap::new(
            Nutrient::Iron,
            "Likely deficient",
            recommended,
            severity,
            "Hair growth cycle, oxygen delivery to follicles",
        ));
    }

    if diet.omega3_sources == Omega3Frequency::Rarely {
        let recommended = if vegetarian {
            "2-3 tbsp flaxseeds/chia seeds daily"
        } else {
            "2-3 servings fatty fish per week OR 250-500mg EPA+DHA"
        };
        gaps.push(NutritionalGap::new(
            Nutrient::Omega3,
            "Insufficient",
            recommended.to_owned(),
            Severity::Medium,
            "Scalp health, inflammation reduction, shine",
        ));
    }

    // Unreported B12 counts as no intake
    if vegetarian && matches!(diet.b12_intake, None | Some(B12Intake::No)) {
        gaps.push(NutritionalGap::new(
            Nutrient::VitaminB12,
            "Deficient (common in vegetarians)",
            "2.4mcg daily (fortified foods or supplement)".to_owned(),
            Severity::Critical,
            "Cell production, red blood cell formation, hair growth",
        ));
    }

    if diet.processed_foods == IntakeLevel::High {
        let recommended = if vegetarian {
            "10-12mg daily (pumpkin seeds, chickpeas, cashews)"
        } else {
            "8-11mg daily (oysters, beef, pumpkin seeds)"
        };
        gaps.push(NutritionalGap::new(
            Nutrient::Zinc,
            "Potentially low",
            recommended.to_owned(),
            Severity::Medium,
            "Hair tissue growth and repair, oil gland function",
        ));
    }

    if diet.vegetables == IntakeLevel::Low {
        gaps.push(NutritionalGap::new(
            Nutrient::Biotin,
            "Low",
            "30-100mcg daily from whole foods".to_owned(),
            Severity::Medium,
            "Keratin production, hair strength",
        ));
    }

    gaps
}
