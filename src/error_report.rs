// ABOUTME: Maps application errors to the CLI's exit status and stderr JSON body
// ABOUTME: Keeps the process-facing error contract in the library so it can be tested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorResponse};

/// Exit status used when an error code falls outside the `u8` range
const FALLBACK_EXIT_STATUS: u8 = 1;

/// What the binary emits for a failed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Process exit status derived from the error code
    pub exit_status: u8,
    /// Single-line JSON `ErrorResponse`, or the plain message if encoding fails
    pub body: String,
}

impl From<AppError> for ErrorReport {
    fn from(error: AppError) -> Self {
        let exit_status = u8::try_from(error.code.exit_code()).unwrap_or(FALLBACK_EXIT_STATUS);
        let fallback = error.to_string();
        let body = serde_json::to_string(&ErrorResponse::from(error)).unwrap_or(fallback);
        Self { exit_status, body }
    }
}
