// ABOUTME: Application-wide constants for the Hairwise platform
// ABOUTME: Service names and environment variable names shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the command-line service
    pub const HAIRWISE_CLI: &str = "hairwise";
}

/// Environment variables read by the logging setup
pub mod env_vars {
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line number in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Emit span enter and close events
    pub const LOG_INCLUDE_SPANS: &str = "LOG_INCLUDE_SPANS";
    /// Override the service name reported in logs
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// Sentinel path meaning "read from standard input"
pub const STDIN_PATH: &str = "-";
