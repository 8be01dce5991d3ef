// ABOUTME: Tests for loading wizard profiles from disk
// ABOUTME: Verifies error codes for missing files, malformed JSON, and invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use hairwise::error_report::ErrorReport;
use hairwise::errors::{AppError, ErrorCode, ErrorResponse};
use hairwise::profile_loader::{load_profile, parse_profile, parse_profile_form, read_from};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_profile(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Input Source Tests
// ============================================================================

#[test]
fn test_load_profile_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_profile(
        &temp_dir,
        "profile.json",
        &common::vegetarian_wizard_json().to_string(),
    );

    let profile = load_profile(&path).unwrap();
    assert_eq!(profile, common::vegetarian_profile());
}

#[test]
fn test_missing_file_is_resource_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("absent.json");

    let err = load_profile(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.code.exit_code(), 66);
    assert_eq!(err.details["path"], path.display().to_string());
}

#[test]
fn test_directory_is_storage_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = load_profile(temp_dir.path()).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_reader_input_matches_file_input() {
    let payload = common::vegetarian_wizard_json().to_string();
    let text = read_from(Cursor::new(payload.into_bytes()), "stdin").unwrap();

    let profile = parse_profile(&text).unwrap();
    assert_eq!(profile, common::vegetarian_profile());
}

#[test]
fn test_non_utf8_reader_is_storage_error() {
    let err = read_from(Cursor::new(vec![0xff, 0xfe, 0xfd]), "stdin").unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.code.exit_code(), 74);
}

// ============================================================================
// Parsing and Validation Tests
// ============================================================================

#[test]
fn test_malformed_json_is_invalid_format() {
    let err = parse_profile("{\"basicInfo\": ").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.details.get("line").is_some());

    let err = parse_profile_form("\"just text\"").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_validation_errors_carry_field_details() {
    let mut payload = common::vegetarian_wizard_json();
    payload["lifestyle"]["waterIntake"] = serde_json::json!("9");

    let err = parse_profile(&payload.to_string()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.code.exit_code(), 65);
    assert_eq!(err.details["field"], "lifestyle.waterIntake");

    let response = serde_json::to_value(ErrorResponse::from(err)).unwrap();
    assert_eq!(response["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(response["error"]["details"]["field"], "lifestyle.waterIntake");
}

#[test]
fn test_empty_object_reports_first_missing_field() {
    let err = parse_profile("{}").unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.details["field"], "basicInfo.fullName");
}

#[test]
fn test_loaded_profile_analyzes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_profile(
        &temp_dir,
        "wizard.json",
        &common::vegetarian_wizard_json().to_string(),
    );
    let profile = load_profile(&path).unwrap();
    let result = hairwise::analyze_hair_health(&profile).unwrap();
    assert_eq!(result.nutritional_gaps.len(), 3);
}

// ============================================================================
// Error Report Tests
// ============================================================================

#[test]
fn test_missing_file_report_has_exit_status_and_json_body() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = load_profile(&temp_dir.path().join("absent.json")).unwrap_err();

    let report = ErrorReport::from(err);
    assert_eq!(report.exit_status, 66);
    assert!(!report.body.contains('\n'));
    assert!(report.body.contains("\"code\":\"RESOURCE_NOT_FOUND\""));
}

#[test]
fn test_validation_report_body_round_trips() {
    let mut payload = common::vegetarian_wizard_json();
    payload["basicInfo"]["age"] = serde_json::json!("12");
    let err = parse_profile(&payload.to_string()).unwrap_err();

    let report = ErrorReport::from(err);
    assert_eq!(report.exit_status, 65);
    let response: ErrorResponse = serde_json::from_str(&report.body).unwrap();
    assert_eq!(response.error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(response.error.details["field"], "basicInfo.age");
}

#[test]
fn test_report_omits_empty_details() {
    let report = ErrorReport::from(AppError::internal("analysis failed"));
    assert_eq!(report.exit_status, 70);

    let body: serde_json::Value = serde_json::from_str(&report.body).unwrap();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(body["error"].get("details").is_none());
}
