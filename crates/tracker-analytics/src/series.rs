// ABOUTME: Chart-ready series derived from the progress ledger and workout plan
// ABOUTME: Weight trend with safe display bounds, per-day completion rates and weight change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chart Series
//!
//! Series borrow the canonical stores and are computed on every iteration, so they can
//! never show stale data. Photo-only ledger entries carry no weigh-in and are skipped by
//! the weight series rather than plotted at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracker_core::constants::chart::{DEFAULT_WEIGHT_PADDING_KG, FLAT_SERIES_POSITION};
use tracker_core::models::{weekday_name, ProgressEntry, ProgressLedger, WorkoutPlan};

/// One point of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    /// Weigh-in date
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

/// Restartable view of the weighed entries of a ledger in ascending date order
#[derive(Debug, Clone, Copy)]
pub struct WeightSeries<'a> {
    entries: &'a [ProgressEntry],
}

/// Weight trend of `ledger`
#[must_use]
pub fn weight_series(ledger: &ProgressLedger) -> WeightSeries<'_> {
    WeightSeries {
        entries: ledger.entries(),
    }
}

impl<'a> WeightSeries<'a> {
    /// Fresh iterator over the points
    pub fn iter(&self) -> impl Iterator<Item = WeightPoint> + 'a {
        let entries = self.entries;
        entries.iter().filter_map(|entry| {
            entry.weight_kg.map(|weight_kg| WeightPoint {
                date: entry.date,
                weight_kg,
            })
        })
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect the points
    #[must_use]
    pub fn to_vec(&self) -> Vec<WeightPoint> {
        self.iter().collect()
    }

    /// Vertical display bounds, `None` for an empty series
    ///
    /// `padding` kilograms are added below the minimum and above the maximum. Negative or
    /// non-finite padding counts as zero. If the padded range is still empty (one point,
    /// or identical weights, with no padding) the default padding is applied instead.
    #[must_use]
    pub fn bounds(&self, padding: f64) -> Option<WeightBounds> {
        let (min, max) = self.iter().fold(None, |acc, point| match acc {
            None => Some((point.weight_kg, point.weight_kg)),
            Some((lo, hi)) => Some((f64::min(lo, point.weight_kg), f64::max(hi, point.weight_kg))),
        })?;

        let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
        let padding = if max - min + 2.0 * padding > 0.0 {
            padding
        } else {
            DEFAULT_WEIGHT_PADDING_KG
        };

        Some(WeightBounds {
            min: min - padding,
            max: max + padding,
        })
    }
}

impl<'a> IntoIterator for &WeightSeries<'a> {
    type Item = WeightPoint;
    type IntoIter = Box<dyn Iterator<Item = WeightPoint> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Vertical range of a weight chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBounds {
    /// Lower edge in kilograms
    pub min: f64,
    /// Upper edge in kilograms
    pub max: f64,
}

impl WeightBounds {
    /// Relative position of `weight_kg` in `0.0..=1.0`, 0 at the bottom edge
    ///
    /// A zero-height range maps every weight to the middle.
    #[must_use]
    pub fn position(&self, weight_kg: f64) -> f64 {
        let range = self.max - self.min;
        if !range.is_finite() || range <= f64::EPSILON || !weight_kg.is_finite() {
            return FLAT_SERIES_POSITION;
        }
        ((weight_kg - self.min) / range).clamp(0.0, 1.0)
    }
}

/// Completion of one plan day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCompletion {
    /// Weekday name
    pub day: String,
    /// Training focus
    pub focus: String,
    /// Completed exercises
    pub completed: usize,
    /// Planned exercises
    pub total: usize,
    /// Completed over planned, in percent
    pub rate_percent: f64,
}

/// Per-day completion rates in schedule order
#[must_use]
pub fn completion_series(plan: &WorkoutPlan) -> Vec<DayCompletion> {
    plan.days()
        .iter()
        .map(|day| {
            let completed = day.completed_count();
            let total = day.total_count();
            let rate_percent = if total == 0 {
                0.0
            } else {
                completed as f64 / total as f64 * 100.0
            };
            DayCompletion {
                day: weekday_name(day.day()).to_owned(),
                focus: day.focus().to_owned(),
                completed,
                total,
                rate_percent,
            }
        })
        .collect()
}

/// Latest weighed entry minus the first, 0 with fewer than two weigh-ins
///
/// Negative values are weight lost.
#[must_use]
pub fn weight_change(ledger: &ProgressLedger) -> f64 {
    match (ledger.first_weighed(), ledger.latest_weighed()) {
        (Some(first), Some(latest)) if first.date != latest.date => {
            latest.weight_or_sentinel() - first.weight_or_sentinel()
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use tracker_core::models::{
        Difficulty, Exercise, NewProgressEntry, PhotoRef, WorkoutDay,
    };

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn ledger(weights: &[(u32, f64)]) -> ProgressLedger {
        let mut ledger = ProgressLedger::new();
        for &(day, weight) in weights {
            ledger.record_entry(NewProgressEntry::new(d(day), weight)).unwrap();
        }
        ledger
    }

    #[test]
    fn test_empty_series() {
        let ledger = ProgressLedger::new();
        let series = weight_series(&ledger);
        assert!(series.is_empty());
        assert_eq!(series.iter().count(), 0);
        assert!(series.bounds(2.0).is_none());
    }

    #[test]
    fn test_single_point_has_safe_bounds() {
        let ledger = ledger(&[(1, 75.5)]);
        let series = weight_series(&ledger);
        assert_eq!(series.len(), 1);

        let bounds = series.bounds(0.0).unwrap();
        assert!(bounds.max > bounds.min);
        assert!((bounds.position(75.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_series_is_restartable_and_skips_photo_entries() {
        let mut ledger = ledger(&[(8, 75.2), (1, 75.5)]);
        ledger.attach_photo(PhotoRef::uri("side.jpg"), d(4));

        let series = weight_series(&ledger);
        let first: Vec<_> = series.iter().map(|p| p.date).collect();
        let second: Vec<_> = (&series).into_iter().map(|p| p.date).collect();
        assert_eq!(first, vec![d(1), d(8)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_position_maps_into_unit_range() {
        let bounds = WeightBounds { min: 70.0, max: 80.0 };
        assert!((bounds.position(75.0) - 0.5).abs() < 1e-9);
        assert!(bounds.position(60.0).abs() < f64::EPSILON);
        assert!((bounds.position(95.0) - 1.0).abs() < f64::EPSILON);

        let flat = WeightBounds { min: 75.0, max: 75.0 };
        assert!((flat.position(75.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weight_change_ignores_unweighed_entries() {
        let mut ledger = ledger(&[(1, 75.5), (15, 74.8)]);
        ledger.attach_photo(PhotoRef::uri("front.jpg"), d(20));
        assert!((weight_change(&ledger) - (-0.7)).abs() < 1e-9);
        assert!(weight_change(&self::ledger(&[(1, 75.5)])).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_series_rates() {
        let mut done = Exercise::new("1", "Push-up", 3, "15", Difficulty::Beginner, ["Chest"]);
        done.completed = true;
        let open = Exercise::new("2", "Dip", 3, "10", Difficulty::Intermediate, ["Triceps"]);
        let day = WorkoutDay::new(Weekday::Mon, "Upper Body", vec![done, open]).unwrap();

        let series = completion_series(&WorkoutPlan::new(vec![day]));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].day, "Monday");
        assert!((series[0].rate_percent - 50.0).abs() < f64::EPSILON);
    }
}
