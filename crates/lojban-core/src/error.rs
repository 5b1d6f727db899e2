//! Error types for the trainer core
//!
//! Parsing a sentence never fails: unknown words and structural problems are
//! reported as diagnostics inside a `ParseResult`. The variants below cover
//! the few operations around it that can be handed bad input.

use thiserror::Error;

/// Core error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A category name that is not one of the closed set of word categories
    #[error("Unknown word category '{0}'")]
    UnknownCategory(String),

    /// A result could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
