// ABOUTME: Validate command for the hairwise CLI
// ABOUTME: Checks a profile against the wizard rules and prints a short summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hairwise::errors::AppResult;
use hairwise::intelligence::profile::DietPreference;
use hairwise::profile_loader::load_profile;
use serde::Serialize;
use std::path::Path;

/// Summary printed when a profile passes validation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationSummary {
    valid: bool,
    diet_preference: DietPreference,
    protein_sources: usize,
    medications: usize,
    scalp_images: usize,
}

/// Validate the profile at `input` and print a summary to stdout
pub fn run(input: &Path) -> AppResult<()> {
    let profile = load_profile(input)?;
    let summary = ValidationSummary {
        valid: true,
        diet_preference: profile.diet_preference(),
        protein_sources: profile.diet.protein_sources.len(),
        medications: profile.health.medications.len(),
        scalp_images: profile.scalp_images.len(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
