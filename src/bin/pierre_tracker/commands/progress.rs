// ABOUTME: Progress ledger commands for pierre-tracker
// ABOUTME: Weigh-in logging from free-text fields and photo attachment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use pierre_tracker::FitnessSession;
use serde_json::{json, Value};
use tracker_core::models::{EntryForm, PhotoRef};

/// Weigh-in fields exactly as typed on the command line
pub struct LogArgs {
    pub weight: String,
    pub body_fat: Option<String>,
    pub chest: Option<String>,
    pub waist: Option<String>,
    pub arms: Option<String>,
    pub thighs: Option<String>,
}

impl From<LogArgs> for EntryForm {
    fn from(args: LogArgs) -> Self {
        Self {
            weight: args.weight,
            body_fat: args.body_fat.unwrap_or_default(),
            chest: args.chest.unwrap_or_default(),
            waist: args.waist.unwrap_or_default(),
            arms: args.arms.unwrap_or_default(),
            thighs: args.thighs.unwrap_or_default(),
        }
    }
}

/// Parse and record a weigh-in
pub fn log(session: &mut FitnessSession, args: LogArgs, date: Option<NaiveDate>) -> Result<Value> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let outcome = session.record_form(&EntryForm::from(args), date)?;
    Ok(json!({
        "date": date,
        "outcome": outcome,
        "entry": session.ledger().get(date),
        "entries": session.ledger().len(),
    }))
}

/// Attach a photo by URI or by file contents
pub fn photo(
    session: &mut FitnessSession,
    uri: Option<String>,
    file: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<Value> {
    let photo = match (uri, file) {
        (_, Some(path)) => PhotoRef::Blob(
            fs::read(path).with_context(|| format!("Failed to read photo {}", path.display()))?,
        ),
        (Some(uri), None) => PhotoRef::Uri(uri),
        (None, None) => bail!("Either a photo URI or --file is required"),
    };

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let outcome = session.attach_photo(photo, date);
    let photos = session
        .ledger()
        .get(date)
        .map_or(0, |entry| entry.photos.len());

    Ok(json!({
        "date": date,
        "outcome": outcome,
        "photos_on_date": photos,
        "total_photos": session.ledger().photo_count(),
    }))
}
