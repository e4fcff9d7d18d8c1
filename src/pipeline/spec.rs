//! Externally supplied configuration.
//!
//! A [`ConfigSpec`] is the loose shape in which options arrive from outside
//! the process (JSON bodies, form-style key/value pairs). Every field is
//! optional and numeric limits are signed, so negative values are observed
//! and rejected by the [`super::validation::ValidationEngine`] instead of
//! being silently dropped. [`ConfigSpec::into_config`] turns a valid spec
//! into a [`LexRankConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "maxLines": 3,
//!   "maxCharacters": 200,
//!   "threshold": 0.1,
//!   "tolerance": 0.0001,
//!   "damping": 0.85,
//!   "lambda": 0.7,
//!   "strict": false
//! }
//! ```
//!
//! Both snake_case and camelCase keys are accepted, as are the singular
//! `maxLine` / `maxCharacter` spellings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::ValidationEngine;
use crate::errors::{LexRankError, Result};
use crate::types::LexRankConfig;

/// Loosely-typed configuration input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSpec {
    #[serde(default, alias = "maxLines", alias = "maxLine", skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<i64>,

    #[serde(
        default,
        alias = "maxCharacters",
        alias = "maxCharacter",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_characters: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,

    #[serde(default, alias = "maxIterations", skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<i64>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    Float,
    Flag,
}

/// Map an accepted key spelling to its canonical field name and kind.
fn canonical_field(key: &str) -> Option<(&'static str, FieldKind)> {
    let field = match key {
        "max_lines" | "maxLines" | "maxLine" => ("max_lines", FieldKind::Integer),
        "max_characters" | "maxCharacters" | "maxCharacter" => {
            ("max_characters", FieldKind::Integer)
        }
        "max_iterations" | "maxIterations" => ("max_iterations", FieldKind::Integer),
        "threshold" => ("threshold", FieldKind::Float),
        "tolerance" => ("tolerance", FieldKind::Float),
        "damping" => ("damping", FieldKind::Float),
        "lambda" => ("lambda", FieldKind::Float),
        "strict" => ("strict", FieldKind::Flag),
        _ => return None,
    };
    Some(field)
}

impl ConfigSpec {
    /// Parse a JSON object.
    ///
    /// A value of the wrong type is reported against the field it was given
    /// for.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Self::locate_json_error(json, err))
    }

    fn locate_json_error(json: &str, err: serde_json::Error) -> LexRankError {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(json) {
            for (key, value) in &map {
                let Some((field, kind)) = canonical_field(key) else {
                    continue;
                };
                let well_typed = match kind {
                    FieldKind::Integer => value.is_null() || value.as_i64().is_some(),
                    FieldKind::Float => value.is_null() || value.as_f64().is_some(),
                    FieldKind::Flag => value.is_boolean(),
                };
                if !well_typed {
                    return LexRankError::configuration(
                        field,
                        format!("malformed value {value}"),
                    );
                }
            }
        }
        LexRankError::configuration("config", err.to_string())
    }

    /// Parse form-style string pairs, e.g. `("maxLine", "3")`.
    ///
    /// Empty values leave the field unset. Unrecognized keys are kept as
    /// unknown fields for the validator to report.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut spec = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let raw = value.as_ref().trim();
            let Some((field, kind)) = canonical_field(key) else {
                spec.unknown_fields
                    .insert(key.to_string(), serde_json::Value::String(raw.to_string()));
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            match kind {
                FieldKind::Integer => {
                    let parsed = raw.parse::<i64>().map_err(|e| {
                        LexRankError::configuration(field, format!("malformed integer {raw:?}: {e}"))
                    })?;
                    match field {
                        "max_lines" => spec.max_lines = Some(parsed),
                        "max_characters" => spec.max_characters = Some(parsed),
                        _ => spec.max_iterations = Some(parsed),
                    }
                }
                FieldKind::Float => {
                    let parsed = raw.parse::<f64>().map_err(|e| {
                        LexRankError::configuration(field, format!("malformed number {raw:?}: {e}"))
                    })?;
                    match field {
                        "threshold" => spec.threshold = Some(parsed),
                        "tolerance" => spec.tolerance = Some(parsed),
                        "damping" => spec.damping = Some(parsed),
                        _ => spec.lambda = Some(parsed),
                    }
                }
                FieldKind::Flag => {
                    spec.strict = raw.parse::<bool>().map_err(|e| {
                        LexRankError::configuration(field, format!("malformed flag {raw:?}: {e}"))
                    })?;
                }
            }
        }
        Ok(spec)
    }

    /// Validate and convert into a [`LexRankConfig`], filling defaults for
    /// unset fields.
    pub fn into_config(&self) -> Result<LexRankConfig> {
        ValidationEngine::with_defaults().validate(self).into_result()?;

        let defaults = LexRankConfig::default();
        Ok(LexRankConfig {
            max_lines: to_usize("max_lines", self.max_lines, defaults.max_lines)?,
            max_characters: to_usize(
                "max_characters",
                self.max_characters,
                defaults.max_characters,
            )?,
            threshold: self.threshold.unwrap_or(defaults.threshold),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            damping: self.damping.unwrap_or(defaults.damping),
            lambda: self.lambda.unwrap_or(defaults.lambda),
            max_iterations: to_usize(
                "max_iterations",
                self.max_iterations,
                defaults.max_iterations,
            )?,
        })
    }
}

fn to_usize(field: &str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v)
            .map_err(|_| LexRankError::configuration(field, format!("{v} does not fit in usize"))),
    }
}

impl From<&LexRankConfig> for ConfigSpec {
    fn from(cfg: &LexRankConfig) -> Self {
        Self {
            max_lines: Some(i64::try_from(cfg.max_lines).unwrap_or(i64::MAX)),
            max_characters: Some(i64::try_from(cfg.max_characters).unwrap_or(i64::MAX)),
            threshold: Some(cfg.threshold),
            tolerance: Some(cfg.tolerance),
            damping: Some(cfg.damping),
            lambda: Some(cfg.lambda),
            max_iterations: Some(i64::try_from(cfg.max_iterations).unwrap_or(i64::MAX)),
            strict: true,
            unknown_fields: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_spec() {
        let spec = ConfigSpec::from_json("{}").unwrap();
        assert_eq!(spec, ConfigSpec::default());
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let spec = ConfigSpec::from_json(
            r#"{ "maxLine": 3, "maxCharacters": 120, "lambda": 0.7 }"#,
        )
        .unwrap();
        assert_eq!(spec.max_lines, Some(3));
        assert_eq!(spec.max_characters, Some(120));
        assert_eq!(spec.lambda, Some(0.7));
        assert!(spec.unknown_fields.is_empty());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec = ConfigSpec::from_json(r#"{ "damping": 0.9, "bogus": 42 }"#).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus"));
    }

    #[test]
    fn test_malformed_json_value_names_field() {
        let err = ConfigSpec::from_json(r#"{ "threshold": "high" }"#).unwrap_err();
        match err {
            LexRankError::Configuration { field, .. } => assert_eq!(field, "threshold"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_pairs_parses_form_values() {
        let spec = ConfigSpec::from_pairs([
            ("maxLine", "2"),
            ("maxCharacter", "80"),
            ("threshold", "0.1"),
            ("tolerance", ""),
            ("damping", "0.85"),
            ("lambda", "0.5"),
        ])
        .unwrap();
        assert_eq!(spec.max_lines, Some(2));
        assert_eq!(spec.max_characters, Some(80));
        assert_eq!(spec.threshold, Some(0.1));
        assert_eq!(spec.tolerance, None);
        assert_eq!(spec.lambda, Some(0.5));
    }

    #[test]
    fn test_from_pairs_malformed_number_names_field() {
        let err = ConfigSpec::from_pairs([("damping", "0.8.5")]).unwrap_err();
        match err {
            LexRankError::Configuration { field, message } => {
                assert_eq!(field, "damping");
                assert!(message.contains("0.8.5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_into_config_fills_defaults() {
        let cfg = ConfigSpec::from_json(r#"{ "maxLines": 4 }"#)
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(cfg.max_lines, 4);
        assert_eq!(cfg, LexRankConfig::default().with_max_lines(4));
    }

    #[test]
    fn test_into_config_rejects_negative_limit() {
        let err = ConfigSpec::from_json(r#"{ "maxCharacters": -5 }"#)
            .unwrap()
            .into_config()
            .unwrap_err();
        match err {
            LexRankError::Configuration { field, .. } => assert_eq!(field, "max_characters"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_from_config() {
        let cfg = LexRankConfig::default().with_lambda(0.3).with_max_lines(5);
        let back = ConfigSpec::from(&cfg).into_config().unwrap();
        assert_eq!(back, cfg);
    }
}
