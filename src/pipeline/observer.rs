//! Pipeline observer: stage hooks for timing and inspection.
//!
//! Observers are notified at stage boundaries and handed each artifact as
//! it is produced, without coupling to stage logic. Typical uses are stage
//! timing and capturing intermediates while debugging.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::{RankOutput, SentenceSet, SimilarityMatrix, TermWeights};
use crate::types::{RankedSentence, WordSequence};

pub const STAGE_SPLIT: &str = "split";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_WEIGHTS: &str = "weights";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_RERANK: &str = "rerank";
pub const STAGE_SELECT: &str = "select";

/// Receives stage boundaries and artifacts as a run progresses.
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &SentenceSet) {}
    fn on_words(&mut self, _words: &[WordSequence]) {}
    fn on_weights(&mut self, _weights: &TermWeights) {}
    fn on_similarity(&mut self, _matrix: &SimilarityMatrix) {}
    fn on_rank(&mut self, _rank: &RankOutput) {}
    fn on_rerank(&mut self, _reranked: &[RankedSentence]) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Metrics reported at the end of a stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn edges(mut self, n: usize) -> Self {
        self.report.edges = Some(n);
        self
    }

    pub fn iterations(mut self, n: usize) -> Self {
        self.report.iterations = Some(n);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Collects the report of every stage in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .edges(12)
            .iterations(7)
            .converged(true)
            .residual(1e-5)
            .build();

        assert_eq!(report.elapsed(), Duration::from_millis(3));
        assert_eq!(report.edges(), Some(12));
        assert_eq!(report.iterations(), Some(7));
        assert_eq!(report.converged(), Some(true));
        assert_eq!(report.sentences(), None);
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_SPLIT, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SPLIT, STAGE_RANK]);
        assert_eq!(
            obs.report(STAGE_RANK).map(StageReport::elapsed),
            Some(Duration::from_millis(2))
        );
        assert!(obs.report(STAGE_RANK).is_some());
        assert!(obs.report(STAGE_SELECT).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
