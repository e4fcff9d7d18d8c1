//! Configuration validation.
//!
//! Every [`ValidationRule`] registered with a [`ValidationEngine`] inspects
//! the whole [`ConfigSpec`] and records its findings in a shared
//! [`ValidationReport`]. Rules never stop the run early, so a single pass
//! reports every problem. [`ValidationReport::into_result`] then surfaces the
//! first error as a [`LexRankError::Configuration`](crate::LexRankError).
//!
//! ```rust
//! use rapid_lexrank::pipeline::spec::ConfigSpec;
//! use rapid_lexrank::pipeline::validation::ValidationEngine;
//!
//! let spec = ConfigSpec::from_json(r#"{ "maxLines": -1, "damping": 2.0 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert_eq!(report.errors().count(), 2);
//! ```

use serde::Serialize;

use super::errors::{ConfigSpecError, ErrorCode};
use super::spec::ConfigSpec;
use crate::errors::Result;

// ─── Findings ───────────────────────────────────────────────────────────────

/// Errors reject the configuration; warnings are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, tagged with the rule that raised it.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub rule: &'static str,
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigSpecError,
}

/// All findings of one validation pass, in rule order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Record an error raised by `rule`.
    pub fn error(&mut self, rule: &'static str, error: ConfigSpecError) {
        self.push(rule, Severity::Error, error);
    }

    /// Record a warning raised by `rule`.
    pub fn warn(&mut self, rule: &'static str, error: ConfigSpecError) {
        self.push(rule, Severity::Warning, error);
    }

    fn push(&mut self, rule: &'static str, severity: Severity, error: ConfigSpecError) {
        self.diagnostics.push(ValidationDiagnostic {
            rule,
            severity,
            error,
        });
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigSpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigSpecError> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigSpecError> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Findings raised by the rule called `rule`.
    pub fn by_rule<'a>(&'a self, rule: &'a str) -> impl Iterator<Item = &'a ValidationDiagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }

    /// Log every warning, then fail with the first error if there is one.
    pub fn into_result(self) -> Result<()> {
        for d in self.diagnostics.iter().filter(|d| d.severity == Severity::Warning) {
            tracing::warn!(rule = d.rule, path = %d.error.path, "{}", d.error.message);
        }
        match self.diagnostics.into_iter().find(|d| d.severity == Severity::Error) {
            Some(d) => Err(d.error.into()),
            None => Ok(()),
        }
    }
}

// ─── Rules and engine ───────────────────────────────────────────────────────

/// A check over a whole [`ConfigSpec`].
pub trait ValidationRule: Send + Sync {
    /// Stable identifier recorded on every finding, e.g. `"limits"`.
    fn name(&self) -> &'static str;

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport);
}

/// Ordered set of rules.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine without rules; everything passes.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in rules, in the order their findings are reported.
    pub fn with_defaults() -> Self {
        Self::empty()
            .with_rule(LimitsRule)
            .with_rule(IterationCapRule)
            .with_rule(UnitIntervalRule)
            .with_rule(ToleranceRule)
            .with_rule(UnknownFieldsRule)
    }

    /// Append `rule` after the registered ones.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, spec: &ConfigSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(spec, &mut report);
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── limits: non-negative ───────────────────────────────────────────────────

struct LimitsRule;

impl ValidationRule for LimitsRule {
    fn name(&self) -> &'static str {
        "limits"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        for (field, value) in [
            ("max_lines", spec.max_lines),
            ("max_characters", spec.max_characters),
        ] {
            if let Some(v) = value.filter(|&v| v < 0) {
                report.error(
                    self.name(),
                    ConfigSpecError::new(
                        ErrorCode::NegativeLimit,
                        format!("/{field}"),
                        format!("{field} must be >= 0, got {v}"),
                    )
                    .with_hint(format!("use 0 for no {field} limit")),
                );
            }
        }
    }
}

// ─── iteration cap: positive ────────────────────────────────────────────────

struct IterationCapRule;

impl ValidationRule for IterationCapRule {
    fn name(&self) -> &'static str {
        "iteration_cap"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        if let Some(v) = spec.max_iterations.filter(|&v| v <= 0) {
            report.error(
                self.name(),
                ConfigSpecError::new(
                    ErrorCode::OutOfRange,
                    "/max_iterations",
                    format!("max_iterations must be > 0, got {v}"),
                ),
            );
        }
    }
}

// ─── damping (0, 1), lambda and threshold [0, 1] ────────────────────────────

struct UnitIntervalRule;

impl ValidationRule for UnitIntervalRule {
    fn name(&self) -> &'static str {
        "unit_interval"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        // (field, value, open interval)
        let checks = [
            ("damping", spec.damping, true),
            ("lambda", spec.lambda, false),
            ("threshold", spec.threshold, false),
        ];

        for (field, value, open) in checks {
            let Some(v) = value else { continue };
            let path = format!("/{field}");
            if !v.is_finite() {
                report.error(
                    self.name(),
                    ConfigSpecError::new(
                        ErrorCode::NotFinite,
                        path,
                        format!("{field} must be a finite number, got {v}"),
                    ),
                );
                continue;
            }
            let (in_range, interval) = if open {
                (v > 0.0 && v < 1.0, "(0, 1)")
            } else {
                ((0.0..=1.0).contains(&v), "[0, 1]")
            };
            if !in_range {
                report.error(
                    self.name(),
                    ConfigSpecError::new(
                        ErrorCode::OutOfRange,
                        path,
                        format!("{field} must be in {interval}, got {v}"),
                    ),
                );
            }
        }
    }
}

// ─── tolerance: finite and positive ─────────────────────────────────────────

struct ToleranceRule;

impl ValidationRule for ToleranceRule {
    fn name(&self) -> &'static str {
        "tolerance"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        let Some(v) = spec.tolerance else { return };
        let err = if !v.is_finite() {
            ConfigSpecError::new(
                ErrorCode::NotFinite,
                "/tolerance",
                format!("tolerance must be a finite number, got {v}"),
            )
        } else if v <= 0.0 {
            ConfigSpecError::new(
                ErrorCode::OutOfRange,
                "/tolerance",
                format!("tolerance must be > 0, got {v}"),
            )
            .with_hint("power iteration never stops on a zero bound; try 0.0001")
        } else {
            return;
        };
        report.error(self.name(), err);
    }
}

// ─── unknown fields: error when strict, warning otherwise ───────────────────

struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &'static str {
        "unknown_fields"
    }

    fn check(&self, spec: &ConfigSpec, report: &mut ValidationReport) {
        let mut keys: Vec<&String> = spec.unknown_fields.keys().collect();
        keys.sort();
        for key in keys {
            let err = ConfigSpecError::new(
                ErrorCode::UnknownField,
                format!("/{key}"),
                format!("unrecognized field {key:?}"),
            );
            if spec.strict {
                report.error(self.name(), err);
            } else {
                report.warn(self.name(), err);
            }
        }
    }
}
