// ABOUTME: Pierre Tracker CLI - drives a tracker session from the command line
// ABOUTME: Loads or seeds a session, runs one command, prints JSON and saves the snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Weekly stats for the demo session
//! pierre-tracker stats
//!
//! # Mark Monday's bench press done and keep the result
//! pierre-tracker --snapshot state.json toggle 0 1
//!
//! # Log a weigh-in with body fat and waist measurement
//! pierre-tracker --snapshot state.json log --weight 74.6 --body-fat 17.2 --waist 84
//!
//! # Attach a progress photo to today's entry
//! pierre-tracker --snapshot state.json photo file:///photos/front.jpg
//!
//! # BMI for an arbitrary weight and height
//! pierre-tracker bmi --weight 75 --height 180
//!
//! # Full weekly report
//! pierre-tracker report
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pierre_tracker::config::TrackerConfig;
use pierre_tracker::logging::LoggingConfig;
use tracing::info;

use helpers::snapshot;

#[derive(Parser)]
#[command(
    name = "pierre-tracker",
    about = "Pierre workout tracker CLI",
    long_about = "Runs one tracker command against a session loaded from a JSON snapshot, or against the demo data when no snapshot exists yet."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Session snapshot file; seeded from the demo data when missing
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Weekly statistics for the current plan
    Stats,

    /// Show a plan day (defaults to the selected day)
    Day {
        /// Day index in the plan
        index: Option<usize>,
    },

    /// Toggle an exercise's completion
    Toggle {
        /// Day index in the plan
        day: usize,

        /// Exercise id within that day
        exercise: String,
    },

    /// Clear all completion flags and start a new week
    ResetWeek,

    /// Record a weigh-in
    Log {
        /// Body weight in kg (required)
        #[arg(long)]
        weight: String,

        /// Body-fat percentage
        #[arg(long)]
        body_fat: Option<String>,

        /// Chest circumference in cm
        #[arg(long)]
        chest: Option<String>,

        /// Waist circumference in cm
        #[arg(long)]
        waist: Option<String>,

        /// Arm circumference in cm
        #[arg(long)]
        arms: Option<String>,

        /// Thigh circumference in cm
        #[arg(long)]
        thighs: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Attach a progress photo
    Photo {
        /// Photo URI
        #[arg(required_unless_present = "file")]
        uri: Option<String>,

        /// Read the photo bytes from a local file instead of storing a URI
        #[arg(long, conflicts_with = "uri")]
        file: Option<PathBuf>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Body mass index (defaults to the session's current weight and profile height)
    Bmi {
        /// Weight in kg
        #[arg(long, requires = "height")]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long, requires = "weight")]
        height: Option<f64>,
    },

    /// Replace the daily nutrition goals
    Goals {
        /// Daily calories
        #[arg(long)]
        calories: f64,

        /// Daily protein in grams
        #[arg(long)]
        protein: f64,

        /// Daily carbohydrates in grams
        #[arg(long)]
        carbs: f64,

        /// Daily fat in grams
        #[arg(long)]
        fat: f64,
    },

    /// Today's intake against the nutrition goals
    Nutrition {
        /// Calories consumed
        #[arg(long, default_value = "0")]
        calories: f64,

        /// Protein consumed in grams
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbohydrates consumed in grams
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fat consumed in grams
        #[arg(long, default_value = "0")]
        fat: f64,
    },

    /// Dashboard headline numbers
    Dashboard,

    /// Weekly report with goals, series and achievements
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut config = TrackerConfig::from_env()?;
    config.logging = logging;

    let mut session = snapshot::load(cli.snapshot.as_deref(), &config)?;

    let output = match cli.command {
        Command::Stats => commands::workout::stats(&session),
        Command::Day { index } => commands::workout::day(&session, index)?,
        Command::Toggle { day, exercise } => {
            commands::workout::toggle(&mut session, day, &exercise)?
        }
        Command::ResetWeek => commands::workout::reset_week(&mut session),
        Command::Log {
            weight,
            body_fat,
            chest,
            waist,
            arms,
            thighs,
            date,
        } => commands::progress::log(
            &mut session,
            commands::progress::LogArgs {
                weight,
                body_fat,
                chest,
                waist,
                arms,
                thighs,
            },
            date,
        )?,
        Command::Photo { uri, file, date } => {
            commands::progress::photo(&mut session, uri, file.as_deref(), date)?
        }
        Command::Bmi { weight, height } => {
            commands::insights::bmi(&session, weight.zip(height))?
        }
        Command::Goals {
            calories,
            protein,
            carbs,
            fat,
        } => commands::insights::set_goals(&mut session, calories, protein, carbs, fat)?,
        Command::Nutrition {
            calories,
            protein,
            carbs,
            fat,
        } => commands::insights::nutrition(&session, calories, protein, carbs, fat),
        Command::Dashboard => commands::insights::dashboard(&session),
        Command::Report => commands::insights::report(&session),
    };

    helpers::display::print_json(&output)?;

    if let Some(path) = &cli.snapshot {
        snapshot::save(path, &session)?;
        info!(path = %path.display(), "Snapshot saved");
    }

    Ok(())
}
