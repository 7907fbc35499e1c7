//! Custom error types for boardtrack
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for boardtrack operations
#[derive(Error, Debug)]
pub enum BoardtrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Uniqueness conflict errors
    #[error("{entity_type} already exists: {identifier}")]
    Conflict {
        entity_type: &'static str,
        identifier: String,
    },

    /// An administrator attempted to revoke their own access
    #[error("User '{0}' cannot revoke their own administrator access")]
    SelfDemotion(String),

    /// A user attempted to remove their own account
    #[error("User '{0}' cannot delete their own account")]
    SelfDeletion(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BoardtrackError {
    /// Create a "not found" error for boards
    pub fn board_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Board",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a conflict error for a board name that is already taken
    pub fn duplicate_board_name(identifier: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type: "Board name",
            identifier: identifier.into(),
        }
    }

    /// Create a conflict error for a serial number that is already registered
    pub fn duplicate_serial(identifier: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type: "Serial number",
            identifier: identifier.into(),
        }
    }

    /// Create a conflict error for a username that is already taken
    pub fn duplicate_username(identifier: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type: "Username",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a uniqueness conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BoardtrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BoardtrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for boardtrack operations
pub type BoardtrackResult<T> = Result<T, BoardtrackError>;
