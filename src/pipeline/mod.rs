//! Staged summarization pipeline
//!
//! - [`artifacts`]: immutable per-stage outputs
//! - [`observer`]: stage hooks and timing
//! - [`runner`]: the [`Summarizer`] that executes the stages
//! - [`spec`], [`validation`], [`errors`]: loosely typed configuration input
//!   and its validation

pub mod artifacts;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use artifacts::{RankOutput, SummaryOutput};
pub use errors::{ConfigSpecError, ErrorCode};
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{summarize, Summarizer};
pub use spec::ConfigSpec;
pub use validation::{ValidationEngine, ValidationReport};
