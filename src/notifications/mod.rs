// ABOUTME: State change notifications emitted after every successful session mutation
// ABOUTME: StateChange events, the StateObserver trait, and a channel-backed observer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Notifications
//!
//! The session publishes a [`StateChange`] after each mutation has fully succeeded. A
//! rejected mutation publishes nothing. Observers are called synchronously in
//! registration order, after the session has invalidated its own derived caches.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use tracker_core::models::{ExerciseToggled, NutritionGoals, PhotoOutcome, RecordOutcome};

/// A committed change to canonical session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateChange {
    /// An exercise completion flag flipped
    ExerciseToggled(ExerciseToggled),
    /// Every completion flag was cleared for a new week
    WeekReset {
        /// Exercise completion ratio of the finished week, 0.0 to 1.0
        completion_ratio: f64,
    },
    /// A weigh-in was inserted or merged
    EntryRecorded {
        /// Entry date
        date: NaiveDate,
        /// Whether the entry was new
        outcome: RecordOutcome,
    },
    /// A photo was attached
    PhotoAttached {
        /// Entry date
        date: NaiveDate,
        /// Whether an entry had to be created
        outcome: PhotoOutcome,
    },
    /// Nutrition targets were replaced
    NutritionGoalsUpdated(NutritionGoals),
}

impl StateChange {
    /// Whether the change invalidates plan-derived views such as weekly stats
    #[must_use]
    pub const fn affects_plan(&self) -> bool {
        matches!(self, Self::ExerciseToggled(_) | Self::WeekReset { .. })
    }

    /// Short event name for logging
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ExerciseToggled(_) => "exercise_toggled",
            Self::WeekReset { .. } => "week_reset",
            Self::EntryRecorded { .. } => "entry_recorded",
            Self::PhotoAttached { .. } => "photo_attached",
            Self::NutritionGoalsUpdated(_) => "nutrition_goals_updated",
        }
    }
}

/// Receives committed state changes
pub trait StateObserver {
    /// Called once per committed change
    fn on_change(&mut self, change: &StateChange);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange),
{
    fn on_change(&mut self, change: &StateChange) {
        self(change);
    }
}

/// Forwards changes over a `std::sync::mpsc` channel
///
/// Once the receiver is dropped, further changes are discarded.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<StateChange>,
    disconnected: bool,
}

impl ChannelObserver {
    /// Observer plus the receiving end of its channel
    #[must_use]
    pub fn channel() -> (Self, Receiver<StateChange>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender,
                disconnected: false,
            },
            receiver,
        )
    }

    /// Observer for an existing sender
    #[must_use]
    pub const fn new(sender: Sender<StateChange>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }
}

impl StateObserver for ChannelObserver {
    fn on_change(&mut self, change: &StateChange) {
        if self.disconnected {
            return;
        }
        if self.sender.send(change.clone()).is_err() {
            warn!(
                event = change.kind(),
                "State change receiver dropped, discarding further notifications"
            );
            self.disconnected = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_changes_are_flagged() {
        assert!(StateChange::WeekReset {
            completion_ratio: 0.5
        }
        .affects_plan());
        assert!(!StateChange::NutritionGoalsUpdated(NutritionGoals::default()).affects_plan());
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (mut observer, receiver) = ChannelObserver::channel();
        let change = StateChange::WeekReset {
            completion_ratio: 1.0,
        };
        observer.on_change(&change);
        assert_eq!(receiver.try_recv().unwrap(), change);

        drop(receiver);
        observer.on_change(&change);
        observer.on_change(&change);
        assert!(observer.disconnected);
    }
}
