//! Engine orchestration
//!
//! [`CoachEngine`] is the call site that composes the persistence gateway
//! with the three pure functions. No engine component calls another directly:
//! the engine reads the log, invokes the metrics, plan, or feedback stage,
//! and writes the result back only after it is fully computed, so an
//! abandoned request leaves no partial state behind.

use crate::catalog::catalog;
use crate::error::EngineError;
use crate::feedback::FeedbackGenerator;
use crate::metrics::MetricsEngine;
use crate::planner::PlanGenerator;
use crate::store::PersistenceGateway;
use crate::types::{CoachFeedback, PerformanceMetrics, ProgressEntry, TrainingPlan};
use chrono::{Days, NaiveDate, Utc};
use std::collections::HashSet;

/// Trailing window used to populate weekly-target `current` values, in days
const SNAPSHOT_WINDOW_DAYS: u64 = 7;

/// Stateful coaching engine over a persistence gateway.
pub struct CoachEngine<S: PersistenceGateway> {
    store: S,
}

impl<S: PersistenceGateway> CoachEngine<S> {
    /// Create an engine over the given gateway
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Append one practice session to the log
    pub fn record_session(&mut self, entry: ProgressEntry) {
        self.store.add_progress_entry(entry);
    }

    /// Compute the current performance snapshot from the stored log
    pub fn metrics(&self) -> PerformanceMetrics {
        MetricsEngine::compute(&self.store.progress())
    }

    /// Regenerate the training plan from the stored profile, populate each
    /// target's `current` value from the trailing week of the log, save the
    /// plan, and return it.
    pub fn refresh_plan(&mut self) -> Result<TrainingPlan, EngineError> {
        let user = self.store.user().ok_or(EngineError::MissingProfile)?;
        let mut plan = PlanGenerator::generate(&user, &catalog())?;

        let entries = self.store.progress();
        populate_current_values(&mut plan, &entries);

        self.store.save_training_plan(plan.clone());
        Ok(plan)
    }

    /// Regenerate coaching feedback dated today, save it, and return it
    pub fn refresh_feedback(&mut self) -> Result<CoachFeedback, EngineError> {
        self.refresh_feedback_on(Utc::now().date_naive())
    }

    /// Regenerate coaching feedback for an explicit date.
    ///
    /// The date drives quote selection; passing it explicitly keeps the
    /// operation reproducible for callers that need it.
    pub fn refresh_feedback_on(&mut self, on: NaiveDate) -> Result<CoachFeedback, EngineError> {
        let user = self.store.user().ok_or(EngineError::MissingProfile)?;
        let entries = self.store.progress();
        let metrics = MetricsEngine::compute(&entries);
        let feedback = FeedbackGenerator::generate(&user, &entries, &metrics, on);

        self.store.save_feedback(feedback.clone());
        Ok(feedback)
    }
}

/// Fill `current` on each weekly target from the trailing 7 calendar days of
/// the log (ending at the most recent entry's date). Unknown metric labels
/// are left untouched.
fn populate_current_values(plan: &mut TrainingPlan, entries: &[ProgressEntry]) {
    let Some(end) = entries.iter().map(|e| e.date).max() else {
        return;
    };
    let start = end
        .checked_sub_days(Days::new(SNAPSHOT_WINDOW_DAYS - 1))
        .unwrap_or(end);
    let window: Vec<&ProgressEntry> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .collect();

    let active_days: HashSet<NaiveDate> = window
        .iter()
        .filter(|e| e.net_hours_clamped() > 0.0)
        .map(|e| e.date)
        .collect();

    for target in &mut plan.weekly_targets {
        target.current = match target.metric.as_str() {
            "Sessions" => active_days.len() as f64,
            "Net Hours" => window.iter().map(|e| e.net_hours_clamped()).sum(),
            "Drills Completed" => window.iter().map(|e| f64::from(e.drills_completed)).sum(),
            "Runs Scored" => window.iter().map(|e| f64::from(e.runs_scored)).sum(),
            "Wickets Taken" => window.iter().map(|e| f64::from(e.wickets_taken)).sum(),
            "Catches" => window.iter().map(|e| f64::from(e.catches)).sum(),
            _ => target.current,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{Role, SkillLevel, User};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn make_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Arjun".to_string(),
            age: 27,
            role,
            skill_level: SkillLevel::Intermediate,
            weekly_hours: 6.0,
            fitness_goal: "Hold form through the season".to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_entry(user_id: Uuid, date: NaiveDate, runs: u32) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            user_id,
            date,
            net_hours: 1.5,
            runs_scored: runs,
            wickets_taken: 1,
            catches: 0,
            drills_completed: 3,
            mood_rating: 7,
            self_rating: 6,
            fatigue_level: 2,
            notes: String::new(),
        }
    }

    #[test]
    fn test_refresh_plan_requires_profile() {
        let mut engine = CoachEngine::new(MemoryStore::new());
        assert!(matches!(
            engine.refresh_plan(),
            Err(EngineError::MissingProfile)
        ));
    }

    #[test]
    fn test_refresh_plan_saves_and_returns_same_plan() {
        let mut store = MemoryStore::new();
        store.save_user(make_user(Role::Batsman));
        let mut engine = CoachEngine::new(store);

        let plan = engine.refresh_plan().unwrap();
        assert_eq!(engine.store().training_plan(), Some(plan));
    }

    #[test]
    fn test_refresh_plan_populates_current_values_from_log() {
        let user = make_user(Role::Batsman);
        let user_id = user.id;
        let mut store = MemoryStore::new();
        store.save_user(user);
        let mut engine = CoachEngine::new(store);

        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
        engine.record_session(make_entry(user_id, day(10), 25));
        engine.record_session(make_entry(user_id, day(11), 40));
        // Outside the trailing 7-day window ending on day 11
        engine.record_session(make_entry(user_id, day(1), 99));

        let plan = engine.refresh_plan().unwrap();
        let current = |metric: &str| {
            plan.weekly_targets
                .iter()
                .find(|t| t.metric == metric)
                .map(|t| t.current)
                .unwrap()
        };

        assert_eq!(current("Sessions"), 2.0);
        assert_eq!(current("Net Hours"), 3.0);
        assert_eq!(current("Drills Completed"), 6.0);
        assert_eq!(current("Runs Scored"), 65.0);
    }

    #[test]
    fn test_refresh_feedback_saves_record() {
        let user = make_user(Role::Bowler);
        let user_id = user.id;
        let mut store = MemoryStore::new();
        store.save_user(user);
        let mut engine = CoachEngine::new(store);
        engine.record_session(make_entry(
            user_id,
            NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            0,
        ));

        let feedback = engine
            .refresh_feedback_on(NaiveDate::from_ymd_opt(2024, 7, 12).unwrap())
            .unwrap();
        assert_eq!(engine.store().feedback(), Some(feedback.clone()));
        assert_eq!(feedback.user_id, user_id);
    }

    #[test]
    fn test_feedback_without_profile_is_an_error() {
        let mut engine = CoachEngine::new(MemoryStore::new());
        assert!(matches!(
            engine.refresh_feedback(),
            Err(EngineError::MissingProfile)
        ));
    }

    #[test]
    fn test_metrics_reflect_recorded_sessions() {
        let user = make_user(Role::Batsman);
        let user_id = user.id;
        let mut store = MemoryStore::new();
        store.save_user(user);
        let mut engine = CoachEngine::new(store);

        assert_eq!(engine.metrics(), PerformanceMetrics::ZERO);

        engine.record_session(make_entry(
            user_id,
            NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            10,
        ));
        assert!(engine.metrics().discipline > 0.0);
    }
}
