// ABOUTME: Analyze command for the hairwise CLI
// ABOUTME: Loads a profile, runs the analyzer, and prints the report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hairwise::errors::AppResult;
use hairwise::profile_loader::load_profile;
use hairwise::HairHealthAnalyzer;
use std::path::Path;
use tracing::info;

/// Analyze the profile at `input` and print the report to stdout
pub fn run(input: &Path, pretty: bool) -> AppResult<()> {
    let profile = load_profile(input)?;
    let result = HairHealthAnalyzer::new().analyze(&profile)?;
    info!(
        risk_score = result.risk_score,
        root_causes = result.root_causes.len(),
        "Report ready"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}
