//! Crate-level error type.

use thiserror::Error;

use crate::io::ParseError;
use crate::validation::ValidationError;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, SchedError>;

/// Errors surfaced by the process set builder and host collaborators.
///
/// The simulators themselves are infallible once a [`ProcessSet`](crate::models::ProcessSet)
/// exists; everything that can go wrong happens while building or rendering one.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchedError {
    /// The process set failed one or more integrity checks.
    #[error("invalid process set: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Textual input could not be parsed into arrival/burst pairs.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading input or writing a report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SchedError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SchedError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
