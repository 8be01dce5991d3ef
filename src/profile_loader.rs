// ABOUTME: Loads wizard profile JSON from a file or standard input
// ABOUTME: Maps I/O, JSON, and validation failures into AppError with stable codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile loading
//!
//! The CLI accepts the same JSON the wizard posts. A path of `-` reads from
//! standard input.

use hairwise_core::constants::STDIN_PATH;
use hairwise_core::errors::{AppError, AppResult, ErrorCode};
use hairwise_intelligence::{Profile, ProfileForm};
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read the raw input text from `path`, or stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file and `StorageError` for any other read failure
pub fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == STDIN_PATH {
        return read_from(io::stdin().lock(), "stdin");
    }

    let shown = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(contents) => {
            debug!(path = %shown, bytes = contents.len(), "Read profile file");
            Ok(contents)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(AppError::not_found(format!("Profile file {shown}"))
                .with_details(json!({ "path": shown }))
                .with_source(e))
        }
        Err(e) => Err(storage_error(&shown, e)),
    }
}

/// Read all text from an open reader such as stdin
///
/// # Errors
///
/// Returns `StorageError` if the reader fails or yields invalid UTF-8
pub fn read_from(mut reader: impl Read, source_name: &str) -> AppResult<String> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| storage_error(source_name, e))?;
    debug!(source = source_name, bytes = buffer.len(), "Read profile");
    Ok(buffer)
}

fn storage_error(source_name: &str, error: io::Error) -> AppError {
    AppError::new(
        ErrorCode::StorageError,
        format!("Failed to read {source_name}: {error}"),
    )
    .with_source(error)
}

/// Parse wizard JSON into the raw form
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is not valid wizard JSON
pub fn parse_profile_form(json: &str) -> AppResult<ProfileForm> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate wizard JSON into a [`Profile`]
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed JSON or unknown choices,
/// `MissingRequiredField` and `ValueOutOfRange` for incomplete or out-of-range values
pub fn parse_profile(json: &str) -> AppResult<Profile> {
    let form = parse_profile_form(json)?;
    Ok(Profile::try_from(&form)?)
}

/// Read, parse, and validate a profile from `path` (or stdin for `-`)
///
/// # Errors
///
/// Propagates errors from [`read_input`] and [`parse_profile`]
pub fn load_profile(path: &Path) -> AppResult<Profile> {
    parse_profile(&read_input(path)?)
}

