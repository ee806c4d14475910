// ABOUTME: Explicitly owned tracker session holding the plan, ledger, goals and profile
// ABOUTME: Mutation entry points, cached weekly stats, observers, and snapshot/restore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Session
//!
//! [`FitnessSession`] is the single owner of canonical tracker state. Presentation code
//! reads through the accessors and routes every change through the mutation methods, each
//! of which validates its input before touching state. A rejected mutation leaves the
//! session exactly as it was and publishes nothing.
//!
//! Weekly stats are computed lazily and cached until a plan-affecting change is
//! published.

use std::cell::OnceCell;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use tracker_analytics::algorithms::consistency::exercise_completion_ratio;
use tracker_analytics::config::AnalyticsConfig;
use tracker_analytics::WeeklyStatsCalculator;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::{
    EntryForm, ExerciseToggled, NewProgressEntry, NutritionGoals, PhotoOutcome, PhotoRef,
    ProgressLedger, RecordOutcome, UserProfile, WeeklyStats, WorkoutPlan,
};
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::notifications::{StateChange, StateObserver};

/// Owner of the workout plan, progress ledger and everything derived from them
pub struct FitnessSession {
    id: Uuid,
    plan: WorkoutPlan,
    ledger: ProgressLedger,
    nutrition_goals: NutritionGoals,
    profile: UserProfile,
    selected_day: usize,
    analytics: AnalyticsConfig,
    calculator: WeeklyStatsCalculator,
    completion_history: Vec<f64>,
    stats_cache: OnceCell<WeeklyStats>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl fmt::Debug for FitnessSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitnessSession")
            .field("id", &self.id)
            .field("days", &self.plan.len())
            .field("entries", &self.ledger.len())
            .field("selected_day", &self.selected_day)
            .field("calculator", &self.calculator)
            .field("stats_cached", &self.stats_cache.get().is_some())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl FitnessSession {
    /// Start building a session
    #[must_use]
    pub fn builder() -> FitnessSessionBuilder {
        FitnessSessionBuilder::default()
    }

    /// Rebuild a session from a stored snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails the same validation as [`FitnessSessionBuilder::build`].
    pub fn restore(snapshot: SessionSnapshot, config: &TrackerConfig) -> AppResult<Self> {
        Self::builder()
            .config(config)
            .plan(snapshot.plan)
            .ledger(snapshot.ledger)
            .nutrition_goals(snapshot.nutrition_goals)
            .profile(snapshot.profile)
            .completion_history(snapshot.completion_history)
            .selected_day(snapshot.selected_day)
            .build()
    }

    /// Serializable copy of the canonical state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            plan: self.plan.clone(),
            ledger: self.ledger.clone(),
            nutrition_goals: self.nutrition_goals,
            profile: self.profile.clone(),
            completion_history: self.completion_history.clone(),
            selected_day: self.selected_day,
        }
    }

    // ================================================================================
    // Accessors
    // ================================================================================

    /// Session identifier, regenerated on every build or restore
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The weekly plan
    #[must_use]
    pub const fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    /// The progress ledger
    #[must_use]
    pub const fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    /// Daily nutrition targets
    #[must_use]
    pub const fn nutrition_goals(&self) -> &NutritionGoals {
        &self.nutrition_goals
    }

    /// Profile of the signed-in user
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Index of the day currently shown
    #[must_use]
    pub const fn selected_day(&self) -> usize {
        self.selected_day
    }

    /// Completion ratio of every finished week, oldest first
    #[must_use]
    pub fn completion_history(&self) -> &[f64] {
        &self.completion_history
    }

    /// Analytics configuration the session was built with
    #[must_use]
    pub const fn analytics_config(&self) -> &AnalyticsConfig {
        &self.analytics
    }

    /// Weekly stats for the current plan, recomputed only after plan changes
    #[must_use]
    pub fn weekly_stats(&self) -> WeeklyStats {
        *self.stats_cache.get_or_init(|| {
            debug!(session_id = %self.id, "Recomputing weekly stats");
            self.calculator.compute(&self.plan, &self.completion_history)
        })
    }

    // ================================================================================
    // Workout mutations
    // ================================================================================

    /// Flip an exercise's completion flag
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` for a bad day index and `NotFound` for an exercise id
    /// that is not part of that day.
    pub fn toggle_exercise(
        &mut self,
        day_index: usize,
        exercise_id: &str,
    ) -> AppResult<ExerciseToggled> {
        let toggled = self
            .plan
            .toggle_exercise(day_index, exercise_id)
            .inspect_err(|err| {
                warn!(day_index, exercise_id, error = %err, "Rejected exercise toggle");
            })?;

        info!(
            day_index,
            exercise_id,
            completed = toggled.exercise_completed,
            day_completed = toggled.day_completed,
            "Exercise toggled"
        );
        self.publish(StateChange::ExerciseToggled(toggled.clone()));
        Ok(toggled)
    }

    /// Clear every completion flag to start a new week
    ///
    /// Returns the exercise completion ratio of the week just finished. The ratio is kept
    /// in the completion history unless the plan is empty.
    pub fn reset_week(&mut self) -> f64 {
        let completion_ratio = exercise_completion_ratio(&self.plan);
        if !self.plan.is_empty() {
            self.completion_history.push(completion_ratio);
        }
        self.plan.reset_completion();

        info!(
            completion_ratio,
            weeks_recorded = self.completion_history.len(),
            "Week reset"
        );
        self.publish(StateChange::WeekReset { completion_ratio });
        completion_ratio
    }

    /// Show a different day
    ///
    /// # Errors
    ///
    /// Returns `OutOfRangeIndex` if `index` is not a day of the plan.
    pub fn select_day(&mut self, index: usize) -> AppResult<()> {
        self.plan.day(index)?;
        self.selected_day = index;
        debug!(day_index = index, "Day selected");
        Ok(())
    }

    // ================================================================================
    // Progress mutations
    // ================================================================================

    /// Insert a weigh-in or merge it into the entry already recorded for its date
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the candidate fails numeric validation.
    pub fn record_entry(&mut self, candidate: NewProgressEntry) -> AppResult<RecordOutcome> {
        let date = candidate.date;
        let outcome = self.ledger.record_entry(candidate).inspect_err(|err| {
            warn!(%date, error = %err, "Rejected progress entry");
        })?;

        info!(
            %date,
            merged = outcome == RecordOutcome::Merged,
            entries = self.ledger.len(),
            "Progress entry recorded"
        );
        self.publish(StateChange::EntryRecorded { date, outcome });
        Ok(outcome)
    }

    /// Parse the weigh-in form and record it for `date`
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the first malformed field.
    pub fn record_form(&mut self, form: &EntryForm, date: NaiveDate) -> AppResult<RecordOutcome> {
        let candidate = form.parse(date).inspect_err(|err| {
            warn!(
                %date,
                field = err.resource_id.as_deref().unwrap_or("unknown"),
                "Rejected progress form"
            );
        })?;
        self.record_entry(candidate)
    }

    /// Attach a photo to the entry for `date`, creating an unweighed entry if needed
    pub fn attach_photo(&mut self, photo: PhotoRef, date: NaiveDate) -> PhotoOutcome {
        let photo_bytes = photo.len();
        let outcome = self.ledger.attach_photo(photo, date);

        info!(
            %date,
            created = outcome == PhotoOutcome::Created,
            photo_bytes,
            "Progress photo attached"
        );
        self.publish(StateChange::PhotoAttached { date, outcome });
        outcome
    }

    /// Attach a photo to today's entry in local time
    pub fn attach_photo_today(&mut self, photo: PhotoRef) -> PhotoOutcome {
        self.attach_photo(photo, Local::now().date_naive())
    }

    /// Replace the daily nutrition targets
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if any target is negative or not finite.
    pub fn set_nutrition_goals(&mut self, goals: NutritionGoals) -> AppResult<()> {
        goals.validate().inspect_err(|err| {
            warn!(error = %err, "Rejected nutrition goals");
        })?;
        self.nutrition_goals = goals;

        info!(
            calories = goals.calories,
            protein = goals.protein,
            carbs = goals.carbs,
            fat = goals.fat,
            "Nutrition goals updated"
        );
        self.publish(StateChange::NutritionGoalsUpdated(goals));
        Ok(())
    }

    // ================================================================================
    // Notifications
    // ================================================================================

    /// Register an observer for every committed change
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&mut self, change: StateChange) {
        if change.affects_plan() && self.stats_cache.take().is_some() {
            debug!(event = change.kind(), "Weekly stats cache invalidated");
        }
        for observer in &mut self.observers {
            observer.on_change(&change);
        }
    }
}

/// Builder for [`FitnessSession`]
#[derive(Debug, Default)]
pub struct FitnessSessionBuilder {
    plan: WorkoutPlan,
    ledger: ProgressLedger,
    nutrition_goals: NutritionGoals,
    profile: UserProfile,
    completion_history: Vec<f64>,
    analytics: AnalyticsConfig,
    calculator: Option<WeeklyStatsCalculator>,
    default_selected_day: Option<usize>,
    selected_day: Option<usize>,
}

impl FitnessSessionBuilder {
    /// Weekly plan
    #[must_use]
    pub fn plan(mut self, plan: WorkoutPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Progress ledger
    #[must_use]
    pub fn ledger(mut self, ledger: ProgressLedger) -> Self {
        self.ledger = ledger;
        self
    }

    /// Nutrition targets
    #[must_use]
    pub fn nutrition_goals(mut self, goals: NutritionGoals) -> Self {
        self.nutrition_goals = goals;
        self
    }

    /// User profile
    #[must_use]
    pub fn profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Ratios of previously finished weeks, each between 0 and 1
    #[must_use]
    pub fn completion_history(mut self, history: Vec<f64>) -> Self {
        self.completion_history = history;
        self
    }

    /// Analytics policies and the default selected day
    #[must_use]
    pub fn config(mut self, config: &TrackerConfig) -> Self {
        self.analytics = config.analytics.clone();
        self.default_selected_day = config.default_selected_day;
        self
    }

    /// Calculator with custom strategies, replacing the one built from configuration
    #[must_use]
    pub fn calculator(mut self, calculator: WeeklyStatsCalculator) -> Self {
        self.calculator = Some(calculator);
        self
    }

    /// Day shown initially, overriding the configured default and today's weekday
    #[must_use]
    pub fn selected_day(mut self, index: usize) -> Self {
        self.selected_day = Some(index);
        self
    }

    /// Validate and build the session
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` for invalid nutrition goals or history ratios,
    /// `OutOfRangeIndex` for a selected day outside the plan, and `ConfigInvalid` for an
    /// invalid analytics configuration.
    pub fn build(self) -> AppResult<FitnessSession> {
        self.analytics.validate()?;
        self.nutrition_goals.validate()?;

        if let Some(ratio) = self
            .completion_history
            .iter()
            .find(|r| !(r.is_finite() && (0.0..=1.0).contains(*r)))
        {
            return Err(AppError::invalid_entry(format!(
                "completion history ratio {ratio} is outside 0..=1"
            ))
            .with_resource_id("completion_history"));
        }

        let selected_day = match self.selected_day.or(self.default_selected_day) {
            Some(index) if !self.plan.is_empty() => {
                self.plan.day(index)?;
                index
            }
            Some(_) | None => self
                .plan
                .day_index_for(Local::now().weekday())
                .unwrap_or(0),
        };

        let calculator = self
            .calculator
            .unwrap_or_else(|| WeeklyStatsCalculator::from_config(&self.analytics));

        let session = FitnessSession {
            id: Uuid::new_v4(),
            plan: self.plan,
            ledger: self.ledger,
            nutrition_goals: self.nutrition_goals,
            profile: self.profile,
            selected_day,
            analytics: self.analytics,
            calculator,
            completion_history: self.completion_history,
            stats_cache: OnceCell::new(),
            observers: Vec::new(),
        };

        info!(
            session_id = %session.id,
            days = session.plan.len(),
            exercises = session.plan.total_exercises(),
            entries = session.ledger.len(),
            selected_day,
            "Fitness session ready"
        );
        Ok(session)
    }
}

/// Canonical session state as handed to a persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Weekly plan with completion flags
    pub plan: WorkoutPlan,
    /// Progress ledger
    pub ledger: ProgressLedger,
    /// Nutrition targets
    #[serde(default)]
    pub nutrition_goals: NutritionGoals,
    /// User profile
    #[serde(default)]
    pub profile: UserProfile,
    /// Ratios of previously finished weeks
    #[serde(default)]
    pub completion_history: Vec<f64>,
    /// Day shown when the snapshot was taken
    #[serde(default)]
    pub selected_day: usize,
}

impl SessionSnapshot {
    /// Render as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, validating the plan and ledger invariants
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON or a snapshot that breaks a plan or
    /// ledger invariant.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
