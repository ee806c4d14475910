// ABOUTME: Pluggable aggregation algorithms used by the weekly stats calculator
// ABOUTME: Burn models, duration and consistency policies, and BMI classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each policy is a trait with a configuration-selected built-in enum. Callers can supply
//! their own implementation of any trait to the calculator.

/// Body mass index and category thresholds
pub mod bmi;
/// Calorie burn heuristics
pub mod burn;
/// Consistency score policies
pub mod consistency;
/// Average workout duration policies
pub mod duration;

pub use bmi::{compute_bmi, BmiCategory, BmiReading};
pub use burn::{BurnAlgorithm, BurnModel};
pub use consistency::{ConsistencyPolicy, ConsistencyStrategy};
pub use duration::{DurationPolicy, DurationStrategy};
