// ABOUTME: Body-progress models for dated weigh-ins, measurements and photos
// ABOUTME: ProgressEntry, NewProgressEntry, Measurements, and PhotoRef definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::ledger::UNWEIGHED_SENTINEL_KG;
use crate::errors::{AppError, AppResult};

/// Serde adapter storing binary photo payloads as standard base64
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(de::Error::custom)
    }
}

/// Opaque reference to a progress photo supplied by the capture collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoRef {
    /// Location of the image (file path, data URI, remote URL)
    Uri(String),
    /// Raw encoded image bytes
    Blob(#[serde(with = "base64_bytes")] Vec<u8>),
}

impl PhotoRef {
    /// Reference by URI
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Size hint for logging: URI length or payload byte count
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Uri(uri) => uri.len(),
            Self::Blob(bytes) => bytes.len(),
        }
    }

    /// Whether the reference carries no data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body circumference measurements in centimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Waist circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Upper arm circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    /// Thigh circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

impl Measurements {
    /// Whether no measurement was taken
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chest.is_none() && self.waist.is_none() && self.arms.is_none() && self.thighs.is_none()
    }

    fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("chest", self.chest),
            ("waist", self.waist),
            ("arms", self.arms),
            ("thighs", self.thighs),
        ] {
            if let Some(v) = value {
                ensure_positive(field, v)?;
            }
        }
        Ok(())
    }
}

/// One dated snapshot in the progress ledger
///
/// `weight_kg` is `None` for entries created by attaching a photo before any weigh-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Calendar date, unique within the ledger
    pub date: NaiveDate,
    /// Body weight, absent for photo-only entries
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Body-fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Circumference measurements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    /// Attached photos in attachment order
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

impl ProgressEntry {
    /// Photo-only entry with no weigh-in
    #[must_use]
    pub fn unweighed(date: NaiveDate, photo: PhotoRef) -> Self {
        Self {
            date,
            weight_kg: None,
            body_fat_percent: None,
            measurements: None,
            photos: vec![photo],
        }
    }

    /// Whether the entry carries a weigh-in
    #[must_use]
    pub const fn is_weighed(&self) -> bool {
        self.weight_kg.is_some()
    }

    /// Weight with the legacy `0.0` sentinel standing in for a missing weigh-in
    #[must_use]
    pub fn weight_or_sentinel(&self) -> f64 {
        self.weight_kg.unwrap_or(UNWEIGHED_SENTINEL_KG)
    }

    /// Numeric validation of a stored entry, as applied to a candidate on record
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the first field that is not a positive finite number,
    /// or a body-fat percentage of 100 or more.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(weight) = self.weight_kg {
            ensure_positive("weight", weight)?;
        }
        validate_body_composition(self.body_fat_percent, self.measurements.as_ref())
    }
}

/// Candidate entry submitted to the ledger
///
/// Weight is mandatory here; only photo attachment can create unweighed entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProgressEntry {
    /// Calendar date of the weigh-in
    pub date: NaiveDate,
    /// Body weight
    pub weight_kg: f64,
    /// Body-fat percentage
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Circumference measurements
    #[serde(default)]
    pub measurements: Option<Measurements>,
    /// Photos captured with the weigh-in, appended after any existing ones
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

impl NewProgressEntry {
    /// Weigh-in with no optional fields
    #[must_use]
    pub const fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            date,
            weight_kg,
            body_fat_percent: None,
            measurements: None,
            photos: Vec::new(),
        }
    }

    /// Set the body-fat percentage
    #[must_use]
    pub fn with_body_fat(mut self, body_fat_percent: f64) -> Self {
        self.body_fat_percent = Some(body_fat_percent);
        self
    }

    /// Set the measurement set
    #[must_use]
    pub fn with_measurements(mut self, measurements: Measurements) -> Self {
        self.measurements = Some(measurements);
        self
    }

    /// Basic numeric validation of every field
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the first field that is not a positive finite number,
    /// or a body-fat percentage of 100 or more.
    pub fn validate(&self) -> AppResult<()> {
        ensure_positive("weight", self.weight_kg)?;
        validate_body_composition(self.body_fat_percent, self.measurements.as_ref())
    }

    /// Convert into a ledger entry
    #[must_use]
    pub fn into_entry(self) -> ProgressEntry {
        ProgressEntry {
            date: self.date,
            weight_kg: Some(self.weight_kg),
            body_fat_percent: self.body_fat_percent,
            measurements: self.measurements.filter(|m| !m.is_empty()),
            photos: self.photos,
        }
    }
}

fn validate_body_composition(
    body_fat_percent: Option<f64>,
    measurements: Option<&Measurements>,
) -> AppResult<()> {
    if let Some(body_fat) = body_fat_percent {
        ensure_positive("body_fat", body_fat)?;
        if body_fat >= 100.0 {
            return Err(
                AppError::invalid_entry("body_fat must be below 100%").with_resource_id("body_fat")
            );
        }
    }
    measurements.map_or(Ok(()), Measurements::validate)
}

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(
            AppError::invalid_entry(format!("{field} must be a positive number, got {value}"))
                .with_resource_id(field.to_owned()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_blob_photo_serializes_as_base64() {
        let photo = PhotoRef::Blob(vec![0xff, 0xd8, 0xff]);
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, r#"{"blob":"/9j/"}"#);
        let back: PhotoRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, photo);
    }

    #[test]
    fn test_unweighed_entry_reports_sentinel() {
        let entry = ProgressEntry::unweighed(date(), PhotoRef::uri("front.jpg"));
        assert!(!entry.is_weighed());
        assert!((entry.weight_or_sentinel() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation_rejects_non_positive_weight() {
        let err = NewProgressEntry::new(date(), 0.0).validate().unwrap_err();
        assert_eq!(err.resource_id.as_deref(), Some("weight"));
        assert!(NewProgressEntry::new(date(), f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_body_fat_over_hundred() {
        let entry = NewProgressEntry::new(date(), 75.0).with_body_fat(120.0);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_empty_measurements_are_dropped() {
        let entry = NewProgressEntry::new(date(), 75.0)
            .with_measurements(Measurements::default())
            .into_entry();
        assert!(entry.measurements.is_none());
    }
}
