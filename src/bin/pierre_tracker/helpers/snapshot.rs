// ABOUTME: Snapshot persistence for pierre-tracker
// ABOUTME: Loads a session from a JSON file or the demo seed, and writes it back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pierre_tracker::config::TrackerConfig;
use pierre_tracker::{seed, FitnessSession, SessionSnapshot};
use tracing::info;

/// Restore the session stored at `path`, or seed the demo session when there is none
pub fn load(path: Option<&Path>, config: &TrackerConfig) -> Result<FitnessSession> {
    match path {
        Some(path) if path.exists() => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            let snapshot = SessionSnapshot::from_json(&json)
                .with_context(|| format!("Invalid snapshot {}", path.display()))?;
            info!(path = %path.display(), "Restoring session from snapshot");
            Ok(FitnessSession::restore(snapshot, config)?)
        }
        _ => {
            info!("Starting from demo data");
            Ok(seed::demo_session(config)?)
        }
    }
}

/// Write the session's canonical state to `path`
pub fn save(path: &Path, session: &FitnessSession) -> Result<()> {
    let json = session.snapshot().to_json()?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(())
}
