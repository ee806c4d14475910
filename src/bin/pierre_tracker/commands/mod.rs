// ABOUTME: Re-exports command modules for pierre-tracker
// ABOUTME: Workout, progress and insight command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod insights;
pub mod progress;
pub mod workout;
