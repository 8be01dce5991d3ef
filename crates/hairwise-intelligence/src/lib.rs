// ABOUTME: Hair-health analysis engine: profile model, rule passes, and recommendations
// ABOUTME: Extracted from main crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hairwise Intelligence
//!
//! Deterministic, rule-based scoring engine. A validated [`Profile`] goes in,
//! an [`AnalysisResult`] comes out.
//!
//! ## Modules
//!
//! - **profile** / **`profile_form`**: typed profile and wizard boundary validation
//! - **config**: thresholds, weights, and formula coefficients
//! - **`nutrition_calculator`**: BMI, calories, protein and iron targets
//! - **`nutritional_gaps`**, **`risk_scoring`**, **`root_causes`**: scoring passes
//! - **`recommendation_engine`**, **`diet_plan`**, **timeline**, **insights**: report sections
//! - **analyzer**: orchestration

/// Analyzer configuration
pub mod config;

/// Typed profile model
pub mod profile;

/// Wizard payload and boundary validation
pub mod profile_form;

/// BMI, BMR, TDEE, protein and iron calculations
pub mod nutrition_calculator;

/// Diet-aware food source tables
pub mod food_sources;

/// Nutrition gap detection
pub mod nutritional_gaps;

/// Lifestyle and health-history risk scoring
pub mod risk_scoring;

/// Root cause ranking
pub mod root_causes;

/// Recommendations and lifestyle changes
pub mod recommendation_engine;

/// Diet plan templates and daily targets
pub mod diet_plan;

/// Recovery timeline
pub mod timeline;

/// Summary insights
pub mod insights;

/// Pass orchestration
pub mod analyzer;

pub use analyzer::{analyze_hair_health, AnalysisResult, HairHealthAnalyzer, ScalpAssessment};
pub use config::{AnalyzerConfig, ConfigError};
pub use profile::{Profile, ProfileError};
pub use profile_form::ProfileForm;
