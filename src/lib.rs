// ABOUTME: Main library entry point for the Hairwise hair-health analysis tool
// ABOUTME: Re-exports the engine and adds logging setup and profile loading for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hairwise
//!
//! Deterministic hair-health analysis. A wizard profile (basic info,
//! lifestyle, health history, diet, scalp images) goes in; a risk score,
//! ranked root causes, nutritional gaps, recommendations, a diet plan, a
//! recovery timeline, and summary insights come out.
//!
//! ## Architecture
//!
//! - **`hairwise-core`**: unified `AppError` / `ErrorCode`, shared constants
//! - **`hairwise-intelligence`**: profile model, rule passes, `HairHealthAnalyzer`
//! - **this crate**: structured logging, profile loading, and the `hairwise` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hairwise::profile_loader::parse_profile;
//! use hairwise::{errors::AppResult, HairHealthAnalyzer};
//!
//! fn main() -> AppResult<()> {
//!     let json = std::fs::read_to_string("profile.json")?;
//!     let profile = parse_profile(&json)?;
//!     let result = HairHealthAnalyzer::new().analyze(&profile)?;
//!     println!("risk score: {}", result.risk_score);
//!     Ok(())
//! }
//! ```

/// Exit status and JSON body for failed CLI commands
pub mod error_report;

/// Structured logging configuration
pub mod logging;

/// Loading wizard profiles from files and stdin
pub mod profile_loader;

/// Re-export core error types
pub use hairwise_core::errors;

/// Re-export core constants
pub use hairwise_core::constants;

/// Re-export the analysis engine
pub use hairwise_intelligence as intelligence;

pub use hairwise_intelligence::{
    analyze_hair_health, AnalysisResult, AnalyzerConfig, HairHealthAnalyzer, Profile,
    ProfileError, ProfileForm,
};
