//! Error types for length parsing.

use thiserror::Error;

/// Errors that can occur while reading a length from user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The input is not a positive magnitude with a known unit.
    #[error("invalid dimension {input:?}: {reason}")]
    InvalidDimension {
        /// The raw text as received.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl UnitError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        UnitError::InvalidDimension {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for unit operations.
pub type Result<T> = std::result::Result<T, UnitError>;
