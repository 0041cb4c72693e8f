//! Persistence gateway
//!
//! The engine never performs I/O itself; it reads and writes through the
//! [`PersistenceGateway`] trait. The hosting application supplies the real
//! implementation. [`MemoryStore`] is the reference implementation used by
//! the engine tests and the CLI, with a JSON snapshot for persistence across
//! runs.

use crate::types::{CoachFeedback, ProgressEntry, TrainingPlan, User};
use serde::{Deserialize, Serialize};

/// Single-profile store contract consumed by the engine.
///
/// The profile, plan, and feedback records are singletons with get/replace
/// semantics; the progress log is append-only and returned in insertion
/// order (the engine sorts by date itself, keeping insertion order for ties).
pub trait PersistenceGateway {
    /// Stored user profile, if one has been saved
    fn user(&self) -> Option<User>;

    /// Replace the singleton profile
    fn save_user(&mut self, user: User);

    /// Full progress log in insertion order; empty if none exist
    fn progress(&self) -> Vec<ProgressEntry>;

    /// Append one record; existing records are never mutated or removed
    fn add_progress_entry(&mut self, entry: ProgressEntry);

    /// Current training plan, if one has been saved
    fn training_plan(&self) -> Option<TrainingPlan>;

    /// Replace the singleton training plan
    fn save_training_plan(&mut self, plan: TrainingPlan);

    /// Current coach feedback, if one has been saved
    fn feedback(&self) -> Option<CoachFeedback>;

    /// Replace the singleton coach feedback
    fn save_feedback(&mut self, feedback: CoachFeedback);
}

/// In-memory reference store with JSON snapshot persistence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    user: Option<User>,
    progress: Vec<ProgressEntry>,
    training_plan: Option<TrainingPlan>,
    feedback: Option<CoachFeedback>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load store state from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize store state to a JSON snapshot
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl PersistenceGateway for MemoryStore {
    fn user(&self) -> Option<User> {
        self.user.clone()
    }

    fn save_user(&mut self, user: User) {
        self.user = Some(user);
    }

    fn progress(&self) -> Vec<ProgressEntry> {
        self.progress.clone()
    }

    fn add_progress_entry(&mut self, entry: ProgressEntry) {
        self.progress.push(entry);
    }

    fn training_plan(&self) -> Option<TrainingPlan> {
        self.training_plan.clone()
    }

    fn save_training_plan(&mut self, plan: TrainingPlan) {
        self.training_plan = Some(plan);
    }

    fn feedback(&self) -> Option<CoachFeedback> {
        self.feedback.clone()
    }

    fn save_feedback(&mut self, feedback: CoachFeedback) {
        self.feedback = Some(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, SkillLevel};
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn make_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Tara".to_string(),
            age: 19,
            role: Role::Wicketkeeper,
            skill_level: SkillLevel::Beginner,
            weekly_hours: 4.0,
            fitness_goal: "Quicker glovework".to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_entry(user_id: Uuid, day: u32) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            user_id,
            date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            net_hours: 1.0,
            runs_scored: 0,
            wickets_taken: 0,
            catches: 4,
            drills_completed: 2,
            mood_rating: 6,
            self_rating: 6,
            fatigue_level: 3,
            notes: String::new(),
        }
    }

    #[test]
    fn test_user_save_then_get_identity() {
        let mut store = MemoryStore::new();
        assert!(store.user().is_none());

        let user = make_user();
        store.save_user(user.clone());
        assert_eq!(store.user(), Some(user));
    }

    #[test]
    fn test_save_user_replaces_singleton() {
        let mut store = MemoryStore::new();
        store.save_user(make_user());
        let replacement = make_user();
        store.save_user(replacement.clone());
        assert_eq!(store.user(), Some(replacement));
    }

    #[test]
    fn test_progress_append_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        // Appended out of date order on purpose
        let late = make_entry(user_id, 20);
        let early = make_entry(user_id, 5);
        store.add_progress_entry(late.clone());
        store.add_progress_entry(early.clone());

        assert_eq!(store.progress(), vec![late, early]);
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let mut store = MemoryStore::new();
        let user = make_user();
        store.save_user(user.clone());
        store.add_progress_entry(make_entry(user.id, 3));

        let json = store.to_json().unwrap();
        let loaded = MemoryStore::from_json(&json).unwrap();

        assert_eq!(loaded.user(), store.user());
        assert_eq!(loaded.progress(), store.progress());
    }
}
