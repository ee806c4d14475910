// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default burn rates, duration estimates, BMI thresholds and weekly goal targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.
//! Every value here is a default; the analytics configuration can override most of them.

/// Calorie burn heuristics
pub mod burn_rate {
    /// Estimated kcal per completed exercise (flat heuristic, not a physiological model)
    pub const DEFAULT_KCAL_PER_EXERCISE: f64 = 45.0;
    /// Estimated kcal per prescribed set of a completed exercise
    pub const DEFAULT_KCAL_PER_SET: f64 = 15.0;
}

/// Workout duration estimates
pub mod duration {
    /// Configured average workout duration in minutes
    pub const DEFAULT_WORKOUT_MINUTES: f64 = 65.0;
    /// Assumed working time per set in seconds
    pub const DEFAULT_WORK_SECONDS_PER_SET: u32 = 45;
    /// Rest assumed between sets when an exercise has no rest time
    pub const DEFAULT_REST_SECONDS: u32 = 60;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;
}

/// Consistency score bounds
pub mod consistency {
    /// Configured consistency score used by the fixed policy
    pub const DEFAULT_SCORE: u8 = 85;
    /// Upper bound of the score
    pub const MAX_SCORE: u8 = 100;
}

/// Body mass index category thresholds (kg/m²)
pub mod bmi {
    /// Below this value the reading is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value (and at or above underweight) the reading is normal
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value (and at or above normal) the reading is overweight
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
    /// Centimetres per metre
    pub const CM_PER_METRE: f64 = 100.0;
}

/// Weekly report goal targets
pub mod weekly_goals {
    /// Target share of completed exercises (percent)
    pub const COMPLETION_PERCENT: f64 = 80.0;
    /// Target calories burned during the week
    pub const CALORIES_BURNED: f64 = 3000.0;
    /// Target consistency score
    pub const CONSISTENCY_SCORE: f64 = 90.0;
    /// Target average workout time in minutes
    pub const WORKOUT_MINUTES: f64 = 60.0;
}

/// Achievement thresholds
pub mod achievements {
    /// Weight lost between first and latest weigh-in (kg)
    pub const WEIGHT_LOSS_KG: f64 = 5.0;
    /// Number of progress photos attached
    pub const PHOTO_COUNT: usize = 3;
    /// Minimum consistency score
    pub const CONSISTENCY_SCORE: u8 = 90;
}

/// Progress ledger conventions
pub mod ledger {
    /// Weight shown for photo-only entries that were never weighed
    pub const UNWEIGHED_SENTINEL_KG: f64 = 0.0;
}

/// Chart defaults
pub mod chart {
    /// Padding added above and below the weight range (kg)
    pub const DEFAULT_WEIGHT_PADDING_KG: f64 = 2.0;
    /// Relative position used when a series has no vertical extent
    pub const FLAT_SERIES_POSITION: f64 = 0.5;
}
