// ABOUTME: Core types and constants for the Hairwise hair-health analysis platform
// ABOUTME: Foundation crate with error handling and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hairwise Core
//!
//! Foundation crate shared by the analysis engine and the command-line front end.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service identifiers and other application-wide values

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
