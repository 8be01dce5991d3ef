// ABOUTME: Recommendation engine turning gaps and lifestyle findings into actionable advice
// ABOUTME: Builds nutrition, sleep, and stress recommendations plus lifestyle change targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine
//!
//! One nutrition recommendation is generated per gap, in gap order, followed
//! by a sleep recommendation when sleep is short and a stress recommendation
//! when stress is high.

use crate::config::ThresholdsConfig;
use crate::food_sources::food_sources;
use crate::nutritional_gaps::{Nutrient, NutritionalGap, Severity};
use crate::profile::{DietPreference, Profile};
use crate::risk_scoring::{is_high_stress, is_short_sleep};
use serde::{Deserialize, Serialize};

/// Recommendation category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecommendationCategory {
    /// Diet and supplementation
    Nutrition,
    /// Sleep hygiene
    Sleep,
    /// Stress reduction
    #[serde(rename = "Stress Management")]
    StressManagement,
}

/// A single recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Category
    pub category: RecommendationCategory,
    /// Short title
    pub title: String,
    /// One-paragraph explanation
    pub description: String,
    /// Concrete steps, in order
    pub action_items: Vec<String>,
    /// Food sources, for nutrition recommendations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_sources: Option<Vec<String>>,
    /// When results should show
    pub expected_impact: String,
}

/// A lifestyle area with its current and target state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleChange {
    /// Area name
    pub area: String,
    /// Current state from the profile
    pub current: String,
    /// Target state
    pub target: String,
    /// Practical tips
    pub tips: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn critical_note(nutrient: Nutrient, diet: DietPreference) -> &'static str {
    match (nutrient, diet.is_vegetarian()) {
        (Nutrient::Iron, true) => {
            "Always pair with vitamin C (lemon, orange, tomatoes) for 3-4x better absorption"
        }
        (Nutrient::VitaminB12, true) => {
            "CRITICAL: Take B12 supplement (1000mcg weekly) - not negotiable for vegetarians"
        }
        _ => "Consider timing: Protein best absorbed post-workout, iron away from calcium/tea",
    }
}

/// Build the nutrition recommendation for one gap
#[must_use]
pub fn nutrition_recommendation(gap: &NutritionalGap, diet: DietPreference) -> Recommendation {
    let sources = food_sources(gap.nutrient, diet);
    let primary = sources.iter().take(3).copied().collect::<Vec<_>>().join(", ");
    let alternatives = sources
        .iter()
        .skip(3)
        .take(3)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    let expected_impact = if gap.severity == Severity::Critical {
        "Improvement in 8-12 weeks"
    } else {
        "Visible results in 12-16 weeks"
    };

    Recommendation {
        category: RecommendationCategory::Nutrition,
        title: format!("Address {} Deficiency", gap.nutrient),
        description: format!(
            "Target: {}. This nutrient is essential for {}.",
            gap.recommended,
            gap.impact.to_lowercase()
        ),
        action_items: vec![
            format!("Include 2-3 servings daily from: {primary}"),
            format!("Alternative sources: {alternatives}"),
            critical_note(gap.nutrient, diet).to_owned(),
        ],
        food_sources: Some(owned(sources)),
        expected_impact: expected_impact.to_owned(),
    }
}

fn sleep_recommendation() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::Sleep,
        title: "Optimize Sleep for Hair Growth".to_owned(),
        description: "Increase sleep to 7-8 hours. Growth hormone peaks during deep sleep - critical for hair follicle regeneration.".to_owned(),
        action_items: owned(&[
            "Fixed sleep schedule: Bed by 10:30 PM, wake by 6:30 AM",
            "No screens 1 hour before bed (blue light disrupts melatonin)",
            "Keep bedroom dark, cool (18-20°C), and quiet",
            "Avoid caffeine after 2 PM",
        ]),
        food_sources: None,
        expected_impact: "Reduced hair fall within 4-6 weeks, improved texture in 8-10 weeks"
            .to_owned(),
    }
}

fn stress_recommendation() -> Recommendation {
    Recommendation {
        category: RecommendationCategory::StressManagement,
        title: "Lower Cortisol to Prevent Telogen Effluvium".to_owned(),
        description: "Chronic stress triggers telogen effluvium - mass shedding 2-3 months after stressful period.".to_owned(),
        action_items: owned(&[
            "Daily meditation: 10-15 minutes (Headspace, Calm apps)",
            "Yoga or light exercise 3-4x/week",
            "Adaptogenic herbs: Ashwagandha (300-500mg) or Rhodiola",
            "Journaling before bed to process thoughts",
        ]),
        food_sources: None,
        expected_impact: "Reduced shedding within 8-12 weeks as cortisol normalizes".to_owned(),
    }
}

/// Generate all recommendations for a profile
#[must_use]
pub fn generate_recommendations(
    profile: &Profile,
    gaps: &[NutritionalGap],
    thresholds: &ThresholdsConfig,
) -> Vec<Recommendation> {
    let diet = profile.diet_preference();
    let mut recommendations: Vec<Recommendation> = gaps
        .iter()
        .map(|gap| nutrition_recommendation(gap, diet))
        .collect();

    if is_short_sleep(profile, thresholds) {
        recommendations.push(sleep_recommendation());
    }
    if is_high_stress(profile) {
        recommendations.push(stress_recommendation());
    }

    recommendations
}

/// Hydration, sleep, and exercise targets with the profile's current values
#[must_use]
pub fn generate_lifestyle_changes(profile: &Profile) -> Vec<LifestyleChange> {
    let lifestyle = &profile.lifestyle;
    vec![
        LifestyleChange {
            area: "Hydration".to_owned(),
            current: format!("{}L/day", lifestyle.water_intake_liters),
            target: "2.5-3L/day".to_owned(),
            tips: owned(&[
                "Start morning with 500ml water",
                "Drink 250ml every 2 hours",
                "Herbal teas count toward intake",
            ]),
        },
        LifestyleChange {
            area: "Sleep".to_owned(),
            current: format!("{} hours", lifestyle.sleep_hours),
            target: "7-8 hours".to_owned(),
            tips: owned(&[
                "Fixed bedtime: 10:30 PM",
                "No caffeine after 2 PM",
                "Dark, cool bedroom (18-20°C)",
            ]),
        },
        LifestyleChange {
            area: "Exercise".to_owned(),
            current: lifestyle.activity_level.label().to_owned(),
            target: "30 min/day moderate activity".to_owned(),
            tips: owned(&[
                "Morning walk or yoga",
                "Scalp massage 5 min during shower (increases blood flow)",
                "Avoid excessive heat styling",
            ]),
        },
    ]
}
