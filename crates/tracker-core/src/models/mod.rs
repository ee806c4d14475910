// ABOUTME: Core data models for the Pierre workout tracker
// ABOUTME: Re-exports the workout plan, progress ledger, nutrition and profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The workout plan and the progress ledger are the only authoritative stores. Everything
//! else here is either configuration (`NutritionGoals`), external input (`UserProfile`,
//! `NutritionIntake`, `EntryForm`) or a derived record (`WeeklyStats`).
//!
//! ## Design Principles
//!
//! - **Derived state is private**: day completion and ledger ordering can only change
//!   through methods that re-establish them
//! - **Validate then mutate**: every mutating method checks its input before touching state
//! - **Serializable**: all models round-trip through JSON for snapshots

// Domain modules
mod exercise;
mod form;
mod ledger;
mod nutrition;
mod profile;
mod progress;
mod stats;
mod workout;

// Workout domain
pub use exercise::{Difficulty, Exercise};
pub use workout::{weekday_name, ExerciseToggled, WorkoutDay, WorkoutPlan};

// Progress domain
pub use form::EntryForm;
pub use ledger::{PhotoOutcome, ProgressLedger, RecordOutcome};
pub use progress::{Measurements, NewProgressEntry, PhotoRef, ProgressEntry};

// Nutrition domain
pub use nutrition::{NutritionGoals, NutritionIntake};

// Profile and derived stats
pub use profile::UserProfile;
pub use stats::WeeklyStats;
