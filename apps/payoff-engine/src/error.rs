//! Payoff engine errors.

use thiserror::Error;

/// Errors raised while building positions or evaluating payoffs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoffError {
    /// Malformed input rejected at construction time.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Checked arithmetic overflowed.
    #[error("Arithmetic overflow while computing {operation}")]
    Arithmetic {
        /// Operation that overflowed.
        operation: String,
    },

    /// Parallel executor could not be started.
    #[error("Failed to initialize simulation thread pool: {message}")]
    Executor {
        /// Error message.
        message: String,
    },
}

impl PayoffError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an arithmetic overflow error.
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Arithmetic {
            operation: operation.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
