// ABOUTME: Main library entry point for the Pierre workout tracker
// ABOUTME: Session ownership, mutation engine, query surface, reports and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Tracker
//!
//! State and derivation core for a personal workout tracker: a weekly training plan with
//! per-exercise completion, a dated ledger of weigh-ins and progress photos, nutrition
//! targets, and the aggregates derived from them.
//!
//! ## Architecture
//!
//! - **`tracker_core`**: entity model, errors and constants
//! - **`tracker_analytics`**: pure aggregation (weekly stats, BMI, series, achievements)
//! - **session**: the single owner of canonical state and every mutation entry point
//! - **queries** and **report**: read-only projections for presentation
//! - **notifications**: change events published after each committed mutation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_tracker::config::TrackerConfig;
//! use pierre_tracker::seed;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let mut session = seed::demo_session(&config)?;
//!
//!     session.toggle_exercise(0, "1")?;
//!     println!("{:?}", session.weekly_stats());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Logging configuration and initialization
pub mod logging;

/// State change events and observers
pub mod notifications;

/// Read-only projections over a session
pub mod queries;

/// Weekly report snapshot
pub mod report;

/// Demo plan, ledger and profile
pub mod seed;

/// Session ownership and mutation entry points
pub mod session;

pub use notifications::{ChannelObserver, StateChange, StateObserver};
pub use queries::{goal_ratio, Dashboard, GoalProgress, MacroProgress, RatioClamp};
pub use report::WeeklyReport;
pub use session::{FitnessSession, FitnessSessionBuilder, SessionSnapshot};
