// ABOUTME: Configuration error types for analytics policy validation
// ABOUTME: Defines error variants for unknown policies, bad ranges and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analytics validation.

use thiserror::Error;
use tracker_core::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., negative burn rate)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Unknown policy name or unparsable value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
