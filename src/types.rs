//! Core types shared across the pipeline

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::pipeline::spec::ConfigSpec;
use crate::pipeline::validation::ValidationEngine;

/// Position of a sentence in the document, stable from splitting to output.
pub type SentenceId = usize;

/// Ordered word surfaces of one sentence, as returned by the segmenter.
pub type WordSequence = Vec<String>;

/// One real value per word position of a sentence.
pub type WeightVector = Vec<f64>;

/// A sentence with its LexRank score
///
/// Serializes as `{"id": .., "sentence": .., "score": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    /// Position in the document sentence list
    pub id: SentenceId,
    /// Sentence text as produced by the splitter
    pub sentence: String,
    /// Stationary LexRank score
    pub score: f64,
}

impl RankedSentence {
    /// Create a new ranked sentence
    pub fn new(id: SentenceId, sentence: impl Into<String>, score: f64) -> Self {
        Self {
            id,
            sentence: sentence.into(),
            score,
        }
    }

    /// Character weight used by the character budget (Unicode scalar values)
    pub fn char_len(&self) -> usize {
        self.sentence.chars().count()
    }
}

/// A selected subset of sentences, ascending by `id`.
pub type Summary = Vec<RankedSentence>;

pub const DEFAULT_MAX_LINES: usize = 0;
pub const DEFAULT_MAX_CHARACTERS: usize = 0;
pub const DEFAULT_THRESHOLD: f64 = 0.001;
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_LAMBDA: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Summarization parameters
///
/// Construct with [`LexRankConfig::default`] and the `with_*` setters, then
/// call [`LexRankConfig::validate`] (the [`Summarizer`](crate::Summarizer)
/// does this once at construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexRankConfig {
    /// Maximum sentences in the line-limited summary (0 = unlimited)
    pub max_lines: usize,
    /// Character budget of the character-limited summary (0 = unlimited)
    pub max_characters: usize,
    /// Minimum similarity for an edge in the LexRank graph
    pub threshold: f64,
    /// L1 convergence bound for power iteration
    pub tolerance: f64,
    /// PageRank damping factor
    pub damping: f64,
    /// MMR trade-off: 1.0 = pure relevance, 0.0 = pure novelty
    pub lambda: f64,
    /// Hard cap on power iterations
    pub max_iterations: usize,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_characters: DEFAULT_MAX_CHARACTERS,
            threshold: DEFAULT_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
            damping: DEFAULT_DAMPING,
            lambda: DEFAULT_LAMBDA,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl LexRankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line limit (0 = unlimited)
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the character budget (0 = unlimited)
    pub fn with_max_characters(mut self, max_characters: usize) -> Self {
        self.max_characters = max_characters;
        self
    }

    /// Set the edge threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the MMR trade-off
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the power-iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Line limit as an option, `None` meaning unlimited
    pub fn line_limit(&self) -> Option<usize> {
        (self.max_lines > 0).then_some(self.max_lines)
    }

    /// Character budget as an option, `None` meaning unlimited
    pub fn character_limit(&self) -> Option<usize> {
        (self.max_characters > 0).then_some(self.max_characters)
    }

    /// Check every field, failing on the first rejected one.
    pub fn validate(&self) -> Result<()> {
        ValidationEngine::with_defaults()
            .validate(&ConfigSpec::from(self))
            .into_result()
    }

    /// Validate and return `self`.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
