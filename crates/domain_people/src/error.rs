//! People domain errors
//!
//! Two kinds of failure exist in this domain: a caller broke a precondition
//! (an argument was missing, out of range, out of order or malformed) or a
//! caller read a feature that was never initialized.

use core_kernel::TemporalError;
use thiserror::Error;

/// Errors that can occur in the people domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// A precondition on an argument was violated
    #[error("{0}")]
    InvalidArgument(String),

    /// Free-text input could not be parsed into a name
    #[error("First and last name are required; was [{input}]")]
    InvalidFormat {
        /// The original, untrimmed input
        input: String,
    },

    /// A feature was accessed before it was initialized
    #[error("{0}")]
    InvalidState(String),
}

impl IdentityError {
    /// Creates an InvalidArgument error with a message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        IdentityError::InvalidArgument(message.into())
    }

    /// Creates an InvalidFormat error carrying the rejected input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        IdentityError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Creates an InvalidState error with a message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        IdentityError::InvalidState(message.into())
    }

    /// Returns true for precondition violations, including malformed names
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            IdentityError::InvalidArgument(_) | IdentityError::InvalidFormat { .. }
        )
    }

    /// Returns true when an uninitialized feature was accessed
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, IdentityError::InvalidState(_))
    }
}

impl From<TemporalError> for IdentityError {
    fn from(error: TemporalError) -> Self {
        IdentityError::InvalidArgument(error.to_string())
    }
}

/// Result alias for people domain operations
pub type IdentityResult<T> = Result<T, IdentityError>;
