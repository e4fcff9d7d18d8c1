//! Pipeline runner: stage execution and artifact flow.
//!
//! [`Summarizer`] owns a validated [`LexRankConfig`], a [`SentenceSplitter`]
//! and a [`Segmenter`]. Calling [`Summarizer::run`] executes the stages in
//! order, threading artifacts between them and notifying a
//! [`PipelineObserver`] at each boundary:
//!
//! 1. Split the text into sentences
//! 2. Segment each sentence into words
//! 3. Build TF / IDF / TF-IDF weights
//! 4. Build the cosine similarity matrix
//! 5. Rank with LexRank
//! 6. Re-rank with MMR
//! 7. Select the line- and character-limited summaries

use crate::errors::Result;
use crate::nlp::segmenter::{segment_sentences, Segmenter, UnicodeWordSegmenter};
use crate::nlp::splitter::SentenceSplitter;
use crate::pipeline::artifacts::{SimilarityMatrix, SummaryOutput, TermWeights};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_RANK,
    STAGE_RERANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_SIMILARITY, STAGE_SPLIT, STAGE_WEIGHTS,
};
use crate::summarizer::lexrank::LexRankRanker;
use crate::summarizer::limits::{select_by_characters, select_by_lines};
use crate::summarizer::selector::MmrSelector;
use crate::types::{LexRankConfig, Summary};

/// Enter a tracing span for a pipeline stage. The span closes at the end of
/// the enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Summarizer
// ============================================================================

/// A configured summarization pipeline.
///
/// The configuration is validated once at construction; every later run is a
/// pure function of the input text.
#[derive(Debug, Clone)]
pub struct Summarizer<S = UnicodeWordSegmenter> {
    config: LexRankConfig,
    splitter: SentenceSplitter,
    segmenter: S,
}

impl Summarizer<UnicodeWordSegmenter> {
    /// Build a summarizer with the default splitter and Unicode word segmenter.
    pub fn new(config: LexRankConfig) -> Result<Self> {
        Self::with_segmenter(config, UnicodeWordSegmenter)
    }
}

impl<S: Segmenter> Summarizer<S> {
    /// Build a summarizer around a caller-supplied segmenter.
    pub fn with_segmenter(config: LexRankConfig, segmenter: S) -> Result<Self> {
        Ok(Self {
            config: config.validated()?,
            splitter: SentenceSplitter::new(),
            segmenter,
        })
    }

    /// Replace the sentence splitter (e.g. single-delimiter mode).
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    /// Summarize `text` without observation.
    pub fn summarize(&self, text: &str) -> Result<SummaryOutput> {
        self.run(text, &mut NoopObserver)
    }

    /// Execute every stage, reporting to `observer`.
    ///
    /// Fails with `EmptyInput` before any work when the text is empty. Text
    /// without a single terminated sentence yields an empty output.
    pub fn run(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryOutput> {
        let cfg = &self.config;

        // Stage 1: Split
        let sentences = {
            trace_stage!(STAGE_SPLIT);
            observer.on_stage_start(STAGE_SPLIT);
            let clock = StageClock::start();
            let sentences = self.splitter.split(text).map_err(|err| {
                tracing::warn!(error = %err, "skipping summarization");
                err
            })?;
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SPLIT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.is_empty() {
            tracing::debug!("no terminated sentence found");
            return Ok(SummaryOutput {
                converged: true,
                ..Default::default()
            });
        }

        // Stage 2: Segment
        let words = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let words = segment_sentences(&self.segmenter, &sentences);
            observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(clock.elapsed()));
            observer.on_words(&words);
            words
        };

        // Stage 3: Term weights
        let weights = {
            trace_stage!(STAGE_WEIGHTS);
            observer.on_stage_start(STAGE_WEIGHTS);
            let clock = StageClock::start();
            let weights = TermWeights::build(&words)?;
            observer.on_stage_end(STAGE_WEIGHTS, &StageReport::new(clock.elapsed()));
            observer.on_weights(&weights);
            weights
        };

        // Stage 4: Similarity
        let matrix = {
            trace_stage!(STAGE_SIMILARITY);
            observer.on_stage_start(STAGE_SIMILARITY);
            let clock = StageClock::start();
            let matrix = SimilarityMatrix::build(weights.tfidf());
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(matrix.len())
                .build();
            observer.on_stage_end(STAGE_SIMILARITY, &report);
            observer.on_similarity(&matrix);
            matrix
        };

        // Stage 5: LexRank
        let rank = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let rank = LexRankRanker::from_config(cfg).rank(&sentences, &matrix);
            let report = StageReportBuilder::new(clock.elapsed())
                .edges(rank.edges)
                .iterations(rank.iterations)
                .converged(rank.converged)
                .residual(rank.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&rank);
            rank
        };

        // Stage 6: MMR
        let reranked = {
            trace_stage!(STAGE_RERANK);
            observer.on_stage_start(STAGE_RERANK);
            let clock = StageClock::start();
            let reranked = MmrSelector::new(cfg.lambda).rerank(&rank.ranked, &matrix);
            observer.on_stage_end(STAGE_RERANK, &StageReport::new(clock.elapsed()));
            observer.on_rerank(&reranked);
            reranked
        };

        // Stage 7: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let line_limited = select_by_lines(&reranked, cfg.line_limit());
        let character_limited: Summary = match cfg.character_limit() {
            Some(budget) => select_by_characters(&rank.ranked, budget, sentences.char_count()),
            None => select_by_lines(&rank.ranked, None),
        };
        observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));

        tracing::debug!(
            sentences = sentences.len(),
            line_limited = line_limited.len(),
            character_limited = character_limited.len(),
            "summary selected"
        );

        Ok(SummaryOutput {
            lexrank: rank.ranked,
            mmr: reranked,
            line_limited,
            character_limited,
            iterations: rank.iterations,
            converged: rank.converged,
            delta: rank.delta,
        })
    }
}

/// Summarize `text` with `config` and the default segmenter.
pub fn summarize(text: &str, config: &LexRankConfig) -> Result<SummaryOutput> {
    Summarizer::new(config.clone())?.summarize(text)
}
