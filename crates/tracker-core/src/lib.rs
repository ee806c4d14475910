// ABOUTME: Core types and constants for the Pierre workout tracker
// ABOUTME: Foundation crate with error handling, entity model, and tracker constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing the entity model shared by the analytics engine and the
//! session layer. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Tracker-wide defaults organized by domain
//! - **models**: Workout plan, progress entries, nutrition targets, and weekly stats

/// Unified error handling system with standard error codes
pub mod errors;

/// Tracker constants and default values organized by domain
pub mod constants;

/// Core data models (`WorkoutPlan`, `ProgressEntry`, `NutritionGoals`, etc.)
pub mod models;
