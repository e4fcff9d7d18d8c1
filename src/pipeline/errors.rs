//! Structured configuration diagnostics.
//!
//! A [`ConfigSpecError`] carries a stable [`ErrorCode`], the JSON pointer of
//! the offending field, a human-readable message, and an optional hint. These
//! are what the [`ValidationEngine`](super::validation::ValidationEngine)
//! collects; the first error-severity entry becomes a
//! [`LexRankError::Configuration`].

use serde::Serialize;
use thiserror::Error;

use crate::errors::LexRankError;

/// Stable, machine-readable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A limit (`max_lines`, `max_characters`) is negative.
    NegativeLimit,
    /// A float parameter lies outside its allowed range.
    OutOfRange,
    /// A value is NaN or infinite.
    NotFinite,
    /// A value could not be parsed as a number.
    Malformed,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NegativeLimit => "negative_limit",
            Self::OutOfRange => "out_of_range",
            Self::NotFinite => "not_finite",
            Self::Malformed => "malformed",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// One configuration problem, addressed by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{}] {path}: {message}", .code.as_str())]
pub struct ConfigSpecError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Field name without the leading `/`.
    pub fn field(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

impl From<ConfigSpecError> for LexRankError {
    fn from(err: ConfigSpecError) -> Self {
        let message = match &err.hint {
            Some(hint) => format!("{} ({hint})", err.message),
            None => err.message.clone(),
        };
        LexRankError::configuration(err.field(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_path() {
        let err = ConfigSpecError::new(ErrorCode::NegativeLimit, "/max_lines", "must be >= 0");
        assert_eq!(err.to_string(), "[negative_limit] /max_lines: must be >= 0");
    }

    #[test]
    fn test_into_lexrank_error_names_field() {
        let err = ConfigSpecError::new(ErrorCode::OutOfRange, "/damping", "must be in (0, 1)")
            .with_hint("0.85 is customary");
        match LexRankError::from(err) {
            LexRankError::Configuration { field, message } => {
                assert_eq!(field, "damping");
                assert!(message.contains("0.85 is customary"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serializes_without_empty_hint() {
        let err = ConfigSpecError::new(ErrorCode::UnknownField, "/bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());
    }
}
