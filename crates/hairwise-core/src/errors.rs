// ABOUTME: Unified error type and error codes shared by the engine and the CLI
// ABOUTME: Provides AppError, ErrorCode, and the serialized ErrorResponse shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that crosses a crate boundary is expressed as an [`AppError`]
//! carrying a stable [`ErrorCode`]. Domain crates keep their own `thiserror`
//! enums and convert into `AppError` at the edge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a semantic check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input could not be parsed or held an unknown choice
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value fell outside its documented range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resources (4000-4999)
    /// Input file or stream could not be found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading input from disk or stdin failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code used by the command-line front end
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 65,
            Self::ResourceNotFound => 66,
            Self::StorageError => 74,
            Self::ConfigInvalid => 78,
            Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Reading input failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (field names, bounds, offending values)
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        let code = if error.is_data() || error.is_syntax() || error.is_eof() {
            ErrorCode::InvalidFormat
        } else {
            ErrorCode::SerializationError
        };
        Self::new(code, error.to_string()).with_details(serde_json::json!({
            "line": error.line(),
            "column": error.column(),
        }))
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serialized error shape printed by the CLI
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_separate_client_and_system_errors() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::StorageError.exit_code(), 74);
        assert_eq!(ErrorCode::InternalError.exit_code(), 70);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::new(ErrorCode::MissingRequiredField, "height is required")
            .with_details(serde_json::json!({ "field": "basicInfo.height" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("MISSING_REQUIRED_FIELD"));
        assert!(json.contains("basicInfo.height"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::internal("boom"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_json_syntax_error_maps_to_invalid_format() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_io_not_found_maps_to_resource_not_found() {
        let error = AppError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert!(error.source.is_some());
    }
}
