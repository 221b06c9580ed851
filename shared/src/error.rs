//! Error types for the engine
//!
//! Unmapped reference data is not an error (table defaults apply), and
//! incompatible offers are filtered out rather than reported.

use thiserror::Error;

/// Errors surfaced by engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A numeric or textual field is out of its valid range
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// The acting user may not trigger this operation
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The record is not in a state that allows the requested transition
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl CoreError {
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CoreError::Unauthorized(message.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        CoreError::InvalidStateTransition(message.into())
    }
}

/// Result type alias for engine operations
pub type CoreResult<T> = Result<T, CoreError>;
