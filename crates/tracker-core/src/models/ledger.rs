// ABOUTME: Chronological progress ledger with merge-on-date semantics
// ABOUTME: Inserts weigh-ins, merges same-day writes, and attaches photos to dated entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progress Ledger
//!
//! The ledger holds at most one [`ProgressEntry`] per calendar date and keeps entries
//! sorted ascending by date after every call. A second weigh-in for an existing date
//! overwrites the numeric fields of that entry while keeping the photos already attached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::progress::{NewProgressEntry, PhotoRef, ProgressEntry};
use crate::errors::{AppError, AppResult};

/// How a weigh-in was applied to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// A new dated entry was inserted
    Inserted,
    /// An existing entry for the same date was overwritten
    Merged,
}

/// How a photo was applied to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoOutcome {
    /// Appended to the photos of an existing entry
    Appended,
    /// A new unweighed entry was created to hold the photo
    Created,
}

/// Chronologically ordered collection of progress entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProgressEntry>", into = "Vec<ProgressEntry>")]
pub struct ProgressLedger {
    entries: Vec<ProgressEntry>,
}

impl TryFrom<Vec<ProgressEntry>> for ProgressLedger {
    type Error = AppError;

    fn try_from(entries: Vec<ProgressEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<ProgressLedger> for Vec<ProgressEntry> {
    fn from(ledger: ProgressLedger) -> Self {
        ledger.entries
    }
}

impl ProgressLedger {
    /// Empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a ledger from entries in any order
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if two entries share a date or an entry fails the numeric
    /// validation applied when recording (weight, body fat, measurements).
    pub fn from_entries(mut entries: Vec<ProgressEntry>) -> AppResult<Self> {
        for entry in &entries {
            entry.validate().map_err(|err| {
                AppError::invalid_entry(format!("entry for {}: {}", entry.date, err.message))
                    .with_resource_id(entry.date.to_string())
            })?;
        }

        entries.sort_by_key(|e| e.date);
        if let Some(pair) = entries.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(AppError::invalid_entry(format!(
                "duplicate progress entry for {}",
                pair[0].date
            ))
            .with_resource_id(pair[0].date.to_string()));
        }
        Ok(Self { entries })
    }

    /// Entries in ascending date order
    #[must_use]
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Number of dated entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry recorded on `date`
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&ProgressEntry> {
        self.position(date).ok().map(|i| &self.entries[i])
    }

    /// Most recent entry, weighed or not
    #[must_use]
    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.last()
    }

    /// Most recent entry with a weigh-in
    #[must_use]
    pub fn latest_weighed(&self) -> Option<&ProgressEntry> {
        self.entries.iter().rev().find(|e| e.is_weighed())
    }

    /// Earliest entry with a weigh-in
    #[must_use]
    pub fn first_weighed(&self) -> Option<&ProgressEntry> {
        self.entries.iter().find(|e| e.is_weighed())
    }

    /// Total photos attached across all entries
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.entries.iter().map(|e| e.photos.len()).sum()
    }

    /// Insert a weigh-in or merge it into the entry already recorded for its date
    ///
    /// On merge the weight, body-fat and measurement fields are overwritten as a whole;
    /// existing photos are kept and the candidate's photos are appended after them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the candidate fails numeric validation. The ledger is
    /// unchanged in that case.
    pub fn record_entry(&mut self, candidate: NewProgressEntry) -> AppResult<RecordOutcome> {
        candidate.validate()?;

        match self.position(candidate.date) {
            Ok(index) => {
                let existing = &mut self.entries[index];
                existing.weight_kg = Some(candidate.weight_kg);
                existing.body_fat_percent = candidate.body_fat_percent;
                existing.measurements = candidate.measurements.filter(|m| !m.is_empty());
                existing.photos.extend(candidate.photos);
                Ok(RecordOutcome::Merged)
            }
            Err(index) => {
                self.entries.insert(index, candidate.into_entry());
                Ok(RecordOutcome::Inserted)
            }
        }
    }

    /// Attach a photo to the entry for `date`, creating an unweighed entry if needed
    pub fn attach_photo(&mut self, photo: PhotoRef, date: NaiveDate) -> PhotoOutcome {
        match self.position(date) {
            Ok(index) => {
                self.entries[index].photos.push(photo);
                PhotoOutcome::Appended
            }
            Err(index) => {
                self.entries
                    .insert(index, ProgressEntry::unweighed(date, photo));
                PhotoOutcome::Created
            }
        }
    }

    fn position(&self, date: NaiveDate) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&date, |e| e.date)
    }
}
