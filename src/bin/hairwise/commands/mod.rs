// ABOUTME: Re-exports command modules for the hairwise CLI
// ABOUTME: Provides the analyze and validate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod validate;
