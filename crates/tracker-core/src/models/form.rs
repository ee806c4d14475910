// ABOUTME: Free-text progress form parsing into validated ledger candidates
// ABOUTME: Converts user-typed weight, body-fat and measurement strings into NewProgressEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::progress::{Measurements, NewProgressEntry};
use crate::errors::{AppError, AppResult};

/// Progress form exactly as typed by the user
///
/// Every field is raw text. Blank optional fields are treated as not measured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    /// Body weight in kilograms (required)
    #[serde(default)]
    pub weight: String,
    /// Body-fat percentage
    #[serde(default)]
    pub body_fat: String,
    /// Chest circumference in centimetres
    #[serde(default)]
    pub chest: String,
    /// Waist circumference in centimetres
    #[serde(default)]
    pub waist: String,
    /// Upper arm circumference in centimetres
    #[serde(default)]
    pub arms: String,
    /// Thigh circumference in centimetres
    #[serde(default)]
    pub thighs: String,
}

impl EntryForm {
    /// Form with only a weight filled in
    #[must_use]
    pub fn with_weight(weight: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// Parse the form into a ledger candidate dated `date`
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the field when weight is blank, or any filled field is
    /// not a positive finite number.
    pub fn parse(&self, date: NaiveDate) -> AppResult<NewProgressEntry> {
        let weight_kg = parse_optional("weight", &self.weight)?.ok_or_else(|| {
            AppError::invalid_entry("weight is required").with_resource_id("weight")
        })?;

        let measurements = Measurements {
            chest: parse_optional("chest", &self.chest)?,
            waist: parse_optional("waist", &self.waist)?,
            arms: parse_optional("arms", &self.arms)?,
            thighs: parse_optional("thighs", &self.thighs)?,
        };

        let entry = NewProgressEntry {
            date,
            weight_kg,
            body_fat_percent: parse_optional("body_fat", &self.body_fat)?,
            measurements: (!measurements.is_empty()).then_some(measurements),
            photos: Vec::new(),
        };
        entry.validate()?;
        Ok(entry)
    }
}

fn parse_optional(field: &str, raw: &str) -> AppResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        AppError::invalid_entry(format!("{field} must be numeric, got '{trimmed}'"))
            .with_resource_id(field.to_owned())
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(
            AppError::invalid_entry(format!("{field} must be a positive number, got {trimmed}"))
                .with_resource_id(field.to_owned()),
        );
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 22).unwrap()
    }

    #[test]
    fn test_blank_optional_fields_are_none() {
        let entry = EntryForm::with_weight(" 74.6 ").parse(date()).unwrap();
        assert!((entry.weight_kg - 74.6).abs() < f64::EPSILON);
        assert!(entry.body_fat_percent.is_none());
        assert!(entry.measurements.is_none());
    }

    #[test]
    fn test_non_numeric_weight_names_field() {
        let err = EntryForm::with_weight("seventy").parse(date()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEntry);
        assert_eq!(err.resource_id.as_deref(), Some("weight"));
    }

    #[test]
    fn test_missing_weight_is_rejected() {
        let form = EntryForm {
            waist: "84".into(),
            ..EntryForm::default()
        };
        assert!(form.parse(date()).is_err());
    }

    #[test]
    fn test_partial_measurements() {
        let form = EntryForm {
            weight: "74.6".into(),
            waist: "84.5".into(),
            thighs: "inf".into(),
            ..EntryForm::default()
        };
        let err = form.parse(date()).unwrap_err();
        assert_eq!(err.resource_id.as_deref(), Some("thighs"));

        let form = EntryForm {
            thighs: String::new(),
            ..form
        };
        let measurements = form.parse(date()).unwrap().measurements.unwrap();
        assert_eq!(measurements.waist, Some(84.5));
        assert!(measurements.chest.is_none());
    }
}
