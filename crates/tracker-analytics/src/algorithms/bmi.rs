// ABOUTME: Body mass index calculation and WHO adult category classification
// ABOUTME: Computes BMI from kilograms and centimetres, rounded to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use tracker_core::constants::bmi::{CM_PER_METRE, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use tracker_core::errors::{AppError, AppResult};

/// Adult BMI category
///
/// Thresholds: below 18.5 underweight, 18.5 up to 25 normal, 25 up to 30 overweight,
/// 30 and above obese.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in `[18.5, 25)`
    Normal,
    /// BMI in `[25, 30)`
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A BMI value with its category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiReading {
    /// BMI rounded to one decimal place
    pub value: f64,
    /// Category of the rounded value
    pub category: BmiCategory,
}

/// Compute BMI as `weight_kg / (height_cm / 100)^2`, rounded to one decimal
///
/// The category is derived from the rounded value so that the displayed number and the
/// displayed label always agree.
///
/// # Errors
///
/// Returns `InvalidEntry` if either input is not a positive finite number.
///
/// # Example
///
/// ```rust
/// use tracker_analytics::algorithms::bmi::{compute_bmi, BmiCategory};
///
/// let reading = compute_bmi(75.0, 180.0)?;
/// assert!((reading.value - 23.1).abs() < 1e-9);
/// assert_eq!(reading.category, BmiCategory::Normal);
/// # Ok::<(), tracker_core::errors::AppError>(())
/// ```
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> AppResult<BmiReading> {
    for (field, value) in [("weight", weight_kg), ("height", height_cm)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_entry(format!(
                "{field} must be a positive number to compute BMI, got {value}"
            ))
            .with_resource_id(field));
        }
    }

    let height_m = height_cm / CM_PER_METRE;
    let raw = weight_kg / (height_m * height_m);
    let value = (raw * 10.0).round() / 10.0;

    Ok(BmiReading {
        value,
        category: BmiCategory::from_bmi(value),
    })
}
