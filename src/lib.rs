//! CoverCoach - Rule-based analytics and coaching engine for cricket training
//!
//! CoverCoach turns an append-only log of practice sessions into normalized
//! performance scores, a personalized coaching message, and a role- and
//! skill-aware weekly training plan. Everything is rule-based, deterministic,
//! and bounded: no machine learning, no network calls, no hidden randomness.
//!
//! ## Modules
//!
//! - **MetricsEngine**: practice log → consistency / discipline / improvement
//!   / weekly trend scores
//! - **PlanGenerator**: user profile + static drill catalog → weekly plan
//! - **FeedbackGenerator**: profile + log + metrics → coaching feedback
//! - **CoachEngine**: orchestration over a [`store::PersistenceGateway`]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod metrics;
pub mod planner;
pub mod store;
pub mod types;

pub use catalog::catalog;
pub use engine::CoachEngine;
pub use error::EngineError;
pub use feedback::FeedbackGenerator;
pub use metrics::{MetricsEngine, ACTIVITY_WINDOW_DAYS, EXPECTED_DAILY_DRILLS};
pub use planner::PlanGenerator;
pub use store::{MemoryStore, PersistenceGateway};
pub use types::{
    CoachFeedback, DaySchedule, Difficulty, Drill, DrillCategory, PerformanceMetrics,
    ProgressEntry, Role, SkillLevel, TrainingPlan, User, WeeklyTarget,
};

/// Engine version embedded in CLI output
pub const COACH_VERSION: &str = env!("CARGO_PKG_VERSION");
