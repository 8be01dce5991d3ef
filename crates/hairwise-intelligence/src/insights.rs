// ABOUTME: Summary insights derived from root causes, gaps, and the risk score
// ABOUTME: Maps risk into success-probability and timeframe bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ThresholdsConfig;
use crate::nutritional_gaps::NutritionalGap;
use crate::root_causes::RootCause;
use serde::{Deserialize, Serialize};

/// Fallback primary issue when no root cause was identified
pub const DEFAULT_PRIMARY_ISSUE: &str = "Nutritional imbalance detected";

/// Headline findings for the report summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Label of the top root cause
    pub primary_issue: String,
    /// Gap count summary
    pub key_finding: String,
    /// Confidence band of the analysis
    pub confidence: String,
    /// Chance of improvement
    pub success_probability: String,
    /// Expected time to results
    pub expected_timeframe: String,
}

/// Outlook band selected by risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outlook {
    Favorable,
    Guarded,
    Serious,
}

impl Outlook {
    fn from_risk(risk_score: u32, thresholds: &ThresholdsConfig) -> Self {
        if risk_score < thresholds.insight_low_risk {
            Self::Favorable
        } else if risk_score < thresholds.insight_moderate_risk {
            Self::Guarded
        } else {
            Self::Serious
        }
    }

    const fn success_probability(self) -> &'static str {
        match self {
            Self::Favorable => "Very High (85-90%)",
            Self::Guarded => "High (70-80%)",
            Self::Serious => "Moderate (55-70%) - Consider medical consultation",
        }
    }

    const fn timeframe(self) -> &'static str {
        match self {
            Self::Favorable => "10-14 weeks",
            Self::Guarded => "12-16 weeks",
            Self::Serious => "16-20 weeks with medical support",
        }
    }
}

/// Summarize an analysis
#[must_use]
pub fn generate_insights(
    root_causes: &[RootCause],
    gaps: &[NutritionalGap],
    risk_score: u32,
    thresholds: &ThresholdsConfig,
) -> Insights {
    let critical = gaps.iter().filter(|gap| gap.is_critical()).count();
    let key_finding = if critical > 0 {
        format!("{critical} critical deficiencies identified - requires immediate attention")
    } else {
        format!("{} nutritional gaps affecting hair health", gaps.len())
    };
    let outlook = Outlook::from_risk(risk_score, thresholds);

    Insights {
        primary_issue: root_causes
            .first()
            .map_or(DEFAULT_PRIMARY_ISSUE, |cause| cause.cause.as_str())
            .to_owned(),
        key_finding,
        confidence: "85-92%".to_owned(),
        success_probability: outlook.success_probability().to_owned(),
        expected_timeframe: outlook.timeframe().to_owned(),
    }
}
