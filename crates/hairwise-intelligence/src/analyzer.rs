// ABOUTME: Hair health analyzer orchestrating every rule pass into an AnalysisResult
// ABOUTME: Pure and deterministic; logs pass summaries without personal fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hair Health Analyzer
//!
//! Runs the passes in order: BMI, derived needs, nutrition gaps, lifestyle and
//! health-history risk, risk finalization, root causes, recommendations, diet
//! plan, timeline, and insights. The profile is borrowed immutably and no
//! state survives between calls.

use crate::config::AnalyzerConfig;
use crate::diet_plan::{generate_diet_plan, DietPlan};
use crate::insights::{generate_insights, Insights};
use crate::nutrition_calculator::{calculate_bmi, calculate_daily_needs, BmiCategory};
use crate::nutritional_gaps::{detect_nutritional_gaps, NutritionalGap};
use crate::profile::{Profile, ProfileError};
use crate::recommendation_engine::{
    generate_lifestyle_changes, generate_recommendations, LifestyleChange, Recommendation,
};
use crate::risk_scoring::assess_risk;
use crate::root_causes::{identify_root_causes, RootCause};
use crate::timeline::{generate_timeline, TimelinePhase};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What can be said about uploaded scalp images
///
/// Image analysis is not implemented; the engine only reports whether images
/// were supplied and never invents findings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ScalpAssessment {
    /// No images were uploaded
    NoImages,
    /// Images were uploaded but not analyzed
    #[serde(rename_all = "camelCase")]
    NotAnalyzed {
        /// Number of uploaded images
        image_count: usize,
    },
}

impl ScalpAssessment {
    fn from_profile(profile: &Profile) -> Self {
        match profile.scalp_images.len() {
            0 => Self::NoImages,
            image_count => Self::NotAnalyzed { image_count },
        }
    }
}

/// Complete analysis report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// BMI rounded to one decimal
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Risk score in 0..=100
    pub risk_score: u32,
    /// Ranked root causes, highest confidence first
    pub root_causes: Vec<RootCause>,
    /// Detected gaps in detection order
    pub nutritional_gaps: Vec<NutritionalGap>,
    /// Recommendations, nutrition first
    pub recommendations: Vec<Recommendation>,
    /// Daily targets and sample meals
    pub diet_plan: DietPlan,
    /// Hydration, sleep, and exercise targets
    pub lifestyle_changes: Vec<LifestyleChange>,
    /// Five-phase recovery timeline
    pub timeline: Vec<TimelinePhase>,
    /// Headline findings
    pub insights: Insights,
    /// Scalp image presence
    pub scalp_assessment: ScalpAssessment,
}

/// Rule-based hair health analyzer
#[derive(Debug, Clone)]
pub struct HairHealthAnalyzer {
    config: AnalyzerConfig,
}

impl Default for HairHealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HairHealthAnalyzer {
    /// Create an analyzer backed by the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::global().clone(),
        }
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a profile
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotPositive` if weight or height is zero,
    /// negative, or not finite
    #[instrument(skip_all, fields(diet = ?profile.diet_preference()))]
    pub fn analyze(&self, profile: &Profile) -> Result<AnalysisResult, ProfileError> {
        let config = &self.config;
        let thresholds = &config.thresholds;

        let bmi = calculate_bmi(profile.basic_info.weight_kg, profile.basic_info.height_cm)?;
        let bmi_category = BmiCategory::from_bmi(bmi, thresholds);
        let needs = calculate_daily_needs(profile, config)?;
        debug!(
            bmi,
            calories = needs.calories,
            protein_g = needs.protein_g,
            iron_mg = needs.iron_mg,
            "Derived daily needs"
        );

        let nutritional_gaps = detect_nutritional_gaps(profile, &needs, thresholds);
        let risk = assess_risk(
            profile,
            nutritional_gaps.len(),
            &config.risk_weights,
            thresholds,
        );
        let risk_score = risk.total();
        debug!(
            gaps = nutritional_gaps.len(),
            lifestyle = risk.lifestyle,
            health_history = risk.health_history,
            nutrition = risk.nutrition,
            risk_score,
            "Scored risk"
        );

        let root_causes = identify_root_causes(profile, &nutritional_gaps, bmi, thresholds);
        let recommendations = generate_recommendations(profile, &nutritional_gaps, thresholds);
        let diet_plan = generate_diet_plan(profile.diet_preference(), &needs);
        let lifestyle_changes = generate_lifestyle_changes(profile);
        let timeline = generate_timeline(risk_score, thresholds.timeline_extension_risk);
        let insights = generate_insights(&root_causes, &nutritional_gaps, risk_score, thresholds);

        info!(
            risk_score,
            gaps = nutritional_gaps.len(),
            root_causes = root_causes.len(),
            recommendations = recommendations.len(),
            "Hair health analysis complete"
        );

        Ok(AnalysisResult {
            bmi,
            bmi_category,
            risk_score,
            root_causes,
            nutritional_gaps,
            recommendations,
            diet_plan,
            lifestyle_changes,
            timeline,
            insights,
            scalp_assessment: ScalpAssessment::from_profile(profile),
        })
    }
}

/// Analyze a profile with the global configuration
///
/// # Errors
///
/// Returns `ProfileError::NotPositive` if weight or height is unusable
pub fn analyze_hair_health(profile: &Profile) -> Result<AnalysisResult, ProfileError> {
    HairHealthAnalyzer::new().analyze(profile)
}
