// ABOUTME: Fixed five-phase recovery timeline spanning sixteen weeks
// ABOUTME: Appends a duration caveat to every phase when the risk score is high
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Caveat appended to each phase's changes when risk is high
pub const SEVERITY_CAVEAT: &str = " (May take 20-25% longer due to severity of deficiencies.)";

/// One phase of the recovery timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelinePhase {
    /// Week range, e.g. `5-8`
    pub week: String,
    /// Phase name
    pub phase: String,
    /// What happens physiologically
    pub changes: String,
    /// What the user should notice
    pub visible: String,
}

/// (week, phase, changes, visible)
const PHASES: [(&str, &str, &str, &str); 5] = [
    (
        "1-2",
        "Adaptation Phase",
        "Body adjusting to improved nutrition and hydration. Nutrient absorption increasing.",
        "Slight improvement in scalp health, reduced dryness",
    ),
    (
        "3-4",
        "Stabilization Phase",
        "Nutrient levels stabilizing in bloodstream. Hair shedding beginning to decrease.",
        "Less hair fall during washing and brushing",
    ),
    (
        "5-8",
        "Early Growth Phase",
        "Hair follicles entering anagen (growth) phase. Miniaturized hairs starting to thicken.",
        "Baby hair growth at hairline, improved hair texture",
    ),
    (
        "9-12",
        "Visible Improvement Phase",
        "Improved hair strength and elasticity. Keratin production optimized.",
        "Noticeably healthier, shinier hair. Less breakage.",
    ),
    (
        "13-16",
        "Significant Progress Phase",
        "Full growth cycle completion for many follicles. Consistent growth pattern.",
        "Increased hair density and volume. Visible regrowth.",
    ),
];

/// Build the timeline; phases are extended when `risk_score` exceeds `extension_threshold`
#[must_use]
pub fn generate_timeline(risk_score: u32, extension_threshold: u32) -> Vec<TimelinePhase> {
    let extended = risk_score > extension_threshold;
    PHASES
        .iter()
        .map(|(week, phase, changes, visible)| TimelinePhase {
            week: (*week).to_owned(),
            phase: (*phase).to_owned(),
            changes: if extended {
                format!("{changes}{SEVERITY_CAVEAT}")
            } else {
                (*changes).to_owned()
            },
            visible: (*visible).to_owned(),
        })
        .collect()
}
