//! Error types for CoverCoach

use thiserror::Error;

/// Errors that can occur in the coaching engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("No user profile has been saved")]
    MissingProfile,

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
