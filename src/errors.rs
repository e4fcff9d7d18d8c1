//! Error types
//!
//! A single error enum covers every failure of a summarization run.

use thiserror::Error;

/// Errors produced by the summarization pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexRankError {
    /// The document text (or the delimiter in single-delimiter mode) is empty.
    /// No pipeline work is attempted.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A configuration value was rejected. `field` names the offending option.
    #[error("invalid configuration for `{field}`: {message}")]
    Configuration { field: String, message: String },

    /// A numeric condition that has no defined fallback value.
    #[error("computation error: {0}")]
    Computation(String),
}

impl LexRankError {
    /// Shorthand for a configuration error on `field`.
    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for [`LexRankError::EmptyInput`].
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LexRankError>;
