//! Error types used throughout the service

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the user profile service
///
/// Every path (reads, writes and reference data) reports failures through
/// this one taxonomy so callers see the same kinds regardless of the
/// operation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum UserServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserServiceError {
    /// Build the canonical "user doesn't exist" error for `username`.
    pub fn user_not_found(username: &str) -> Self {
        Self::NotFound(format!("user {username} doesn't exist"))
    }

    /// Whether this error reports an absent record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Stable label suitable for metrics and logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Conflict(_) => "conflict",
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for user service operations
pub type Result<T> = std::result::Result<T, UserServiceError>;
