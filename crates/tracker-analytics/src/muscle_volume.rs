// ABOUTME: Weekly training volume per muscle group
// ABOUTME: Counts planned and completed sessions and exercises for each targeted muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracker_core::models::WorkoutPlan;

/// Training volume for one muscle group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroupVolume {
    /// Muscle group label
    pub muscle_group: String,
    /// Plan days with at least one exercise targeting the group
    pub days_trained: usize,
    /// Of those days, how many are completed
    pub days_completed: usize,
    /// Exercises targeting the group across the week
    pub exercises: usize,
}

#[derive(Default)]
struct Tally {
    days_trained: usize,
    days_completed: usize,
    exercises: usize,
}

/// Volume per muscle group, sorted by group name
#[must_use]
pub fn muscle_group_volume(plan: &WorkoutPlan) -> Vec<MuscleGroupVolume> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

    for day in plan.days() {
        let mut groups_today = BTreeSet::new();
        for exercise in day.exercises() {
            for group in &exercise.muscle_groups {
                tallies.entry(group.as_str()).or_default().exercises += 1;
                groups_today.insert(group.as_str());
            }
        }
        for group in groups_today {
            let tally = tallies.entry(group).or_default();
            tally.days_trained += 1;
            if day.is_completed() {
                tally.days_completed += 1;
            }
        }
    }

    tallies
        .into_iter()
        .map(|(group, tally)| MuscleGroupVolume {
            muscle_group: group.to_owned(),
            days_trained: tally.days_trained,
            days_completed: tally.days_completed,
            exercises: tally.exercises,
        })
        .collect()
}
