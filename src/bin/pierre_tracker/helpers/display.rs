// ABOUTME: Output formatting helpers for pierre-tracker
// ABOUTME: Writes command results to stdout as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use anyhow::Result;
use serde_json::Value;

/// Print a command result as pretty JSON followed by a newline
pub fn print_json(value: &Value) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
