// ABOUTME: Unified error types for the tracker core and its mutation entry points
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the tracker returns [`AppResult`]. Errors carry a stable
//! [`ErrorCode`] so the presentation layer can choose its own user-facing message, plus a
//! human-readable message and the identifier of the offending resource when there is one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed user input such as a non-numeric weight
    #[serde(rename = "INVALID_ENTRY")]
    InvalidEntry = 3000,
    /// A day or selection index outside the workout plan
    #[serde(rename = "OUT_OF_RANGE_INDEX")]
    OutOfRangeIndex = 3003,

    // Resource Management (4000-4999)
    /// Exercise id absent from the targeted day
    #[serde(rename = "NOT_FOUND")]
    NotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value rejected during validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Snapshot could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidEntry => "The provided entry is invalid",
            Self::OutOfRangeIndex => "The requested index is outside the workout plan",
            Self::NotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error was caused by caller input rather than the tracker itself
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEntry | Self::OutOfRangeIndex | Self::NotFound
        )
    }
}

/// Unified error type for the tracker
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the resource involved (day index, exercise id, field name)
    pub resource_id: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
        }
    }

    /// Attach the identifier of the offending resource
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Index outside the bounds of a collection
    #[must_use]
    pub fn out_of_range(what: &str, index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::OutOfRangeIndex,
            format!("{what} index {index} is out of range (plan has {len})"),
        )
        .with_resource_id(index.to_string())
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Malformed entry input
    #[must_use]
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidEntry, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_client_classification() {
        assert!(ErrorCode::OutOfRangeIndex.is_client_error());
        assert!(ErrorCode::NotFound.is_client_error());
        assert!(ErrorCode::InvalidEntry.is_client_error());
        assert!(!ErrorCode::SerializationError.is_client_error());
    }

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::not_found("Exercise 'x' in day 0");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The requested resource was not found"));
        assert!(rendered.contains("Exercise 'x' in day 0 not found"));
    }

    #[test]
    fn test_out_of_range_carries_index() {
        let error = AppError::out_of_range("Day", 9, 5);
        assert_eq!(error.code, ErrorCode::OutOfRangeIndex);
        assert_eq!(error.resource_id.as_deref(), Some("9"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidEntry).unwrap();
        assert_eq!(json, "\"INVALID_ENTRY\"");
    }
}
