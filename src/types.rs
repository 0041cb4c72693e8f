//! Core types for the CoverCoach engine
//!
//! This module defines the data structures that flow through the engine:
//! the user profile, the practice log, derived performance metrics, and the
//! generated plan and feedback records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playing role for a cricket user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder")]
    AllRounder,
    Wicketkeeper,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
            Role::Wicketkeeper => "Wicketkeeper",
        }
    }
}

/// Self-declared skill level for a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    /// Target multiplier applied to role-specific weekly targets
    pub fn target_multiplier(&self) -> f64 {
        match self {
            SkillLevel::Beginner => 1.0,
            SkillLevel::Intermediate => 1.5,
            SkillLevel::Advanced => 2.0,
        }
    }
}

/// Drill difficulty rating (static catalog data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Drill category (static catalog data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillCategory {
    Batting,
    Bowling,
    Fielding,
    Fitness,
}

impl DrillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrillCategory::Batting => "Batting",
            DrillCategory::Bowling => "Bowling",
            DrillCategory::Fielding => "Fielding",
            DrillCategory::Fitness => "Fitness",
        }
    }
}

/// Single-instance user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub role: Role,
    pub skill_level: SkillLevel,
    /// Hours available for training per week (must be positive to plan)
    pub weekly_hours: f64,
    /// Free-text fitness goal
    pub fitness_goal: String,
    pub created_at: DateTime<Utc>,
}

/// Immutable, append-only practice session record.
///
/// The role-conditional counters (`runs_scored`, `wickets_taken`, `catches`)
/// are always present and default to zero; which of them is meaningful is a
/// display concern driven by the user's role, not an analytic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Net practice hours (>= 0)
    pub net_hours: f64,
    #[serde(default)]
    pub runs_scored: u32,
    #[serde(default)]
    pub wickets_taken: u32,
    #[serde(default)]
    pub catches: u32,
    pub drills_completed: u32,
    /// Mood rating on a 1-10 scale
    pub mood_rating: u8,
    /// Self-assessed session rating on a 1-10 scale
    pub self_rating: u8,
    /// Fatigue level on a 1-5 scale
    pub fatigue_level: u8,
    #[serde(default)]
    pub notes: String,
}

impl ProgressEntry {
    /// Self rating clamped to its declared 1-10 range
    pub fn self_rating_clamped(&self) -> f64 {
        f64::from(self.self_rating.clamp(1, 10))
    }

    /// Net hours with negative inputs treated as zero
    pub fn net_hours_clamped(&self) -> f64 {
        self.net_hours.max(0.0)
    }
}

/// Normalized performance scores derived from the practice log.
///
/// Always recomputed from the log; never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Share of the trailing 14-day window with active training (0-100)
    pub consistency: f64,
    /// Drill-completion adherence against the daily expectation (0-100)
    pub discipline: f64,
    /// Signed percentage change in self rating, first half vs second (-100..100)
    pub improvement: f64,
    /// Signed point-delta in average self rating between consecutive
    /// 7-entry windows (not a percentage)
    pub weekly_trend: f64,
}

impl PerformanceMetrics {
    pub const ZERO: PerformanceMetrics = PerformanceMetrics {
        consistency: 0.0,
        discipline: 0.0,
        improvement: 0.0,
        weekly_trend: 0.0,
    };
}

/// Static catalog drill (immutable reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drill {
    /// Stable catalog slug
    pub id: String,
    pub name: String,
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    pub difficulty: Difficulty,
    pub category: DrillCategory,
}

/// One weekly target line in a training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTarget {
    pub metric: String,
    /// Latest known measurement, populated by the caller from the log
    pub current: f64,
    /// Derived from the user's profile
    pub target: f64,
    pub unit: String,
}

/// One day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    /// Human-readable activity descriptions, in planned order
    pub activities: Vec<String>,
    /// Total planned duration in hours
    pub duration: f64,
}

/// Weekly training plan, regenerated wholesale on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub drills: Vec<Drill>,
    pub weekly_targets: Vec<WeeklyTarget>,
    /// Exactly seven entries, Monday through Sunday
    pub schedule: Vec<DaySchedule>,
    pub created_at: DateTime<Utc>,
}

/// Coaching feedback record, regenerated wholesale on each request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachFeedback {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Feedback paragraph addressed to the user
    pub feedback: String,
    /// Exactly three suggestion strings
    pub suggestions: Vec<String>,
    /// Exactly two focus-area labels
    pub focus_areas: Vec<String>,
    pub motivational_quote: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(self_rating: u8) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            net_hours: -2.0,
            runs_scored: 0,
            wickets_taken: 0,
            catches: 0,
            drills_completed: 3,
            mood_rating: 5,
            self_rating,
            fatigue_level: 3,
            notes: String::new(),
        }
    }

    #[test]
    fn test_self_rating_clamped_to_declared_range() {
        assert_eq!(make_entry(0).self_rating_clamped(), 1.0);
        assert_eq!(make_entry(200).self_rating_clamped(), 10.0);
    }

    #[test]
    fn test_negative_hours_treated_as_zero() {
        let entry = make_entry(5);
        assert_eq!(entry.net_hours_clamped(), 0.0);
    }

    #[test]
    fn test_role_serde_round_trip() {
        let json = serde_json::to_string(&Role::AllRounder).unwrap();
        assert_eq!(json, "\"All-Rounder\"");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::AllRounder);
    }

    #[test]
    fn test_optional_counters_default_to_zero() {
        let json = r#"{
            "id": "7f1f8a2e-9f43-4ab0-b8ff-7b8d8e1c0001",
            "user_id": "7f1f8a2e-9f43-4ab0-b8ff-7b8d8e1c0002",
            "date": "2024-06-01",
            "net_hours": 1.5,
            "drills_completed": 2,
            "mood_rating": 7,
            "self_rating": 6,
            "fatigue_level": 2
        }"#;
        let entry: ProgressEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.runs_scored, 0);
        assert_eq!(entry.wickets_taken, 0);
        assert_eq!(entry.catches, 0);
        assert_eq!(entry.notes, "");
    }
}
