//! Error types.
//!
//! Scheduling has a single failure mode: malformed input rejected at the
//! entry point. A job that cannot be placed is not an error; it is recorded
//! as a rejection in the [`Schedule`](crate::models::Schedule).

use thiserror::Error;

/// Errors surfaced by the sequencer and its configuration loader.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Malformed input: absent job collection or negative horizon.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl SequenceError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        SequenceError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Short, stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SequenceError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            SequenceError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<figment::Error> for SequenceError {
    fn from(err: figment::Error) -> Self {
        SequenceError::Config(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;
