//! First-class pipeline artifacts.
//!
//! Each stage produces a new immutable artifact consumed by the next one;
//! no stage mutates an earlier stage's output. All artifacts are scoped to a
//! single summarization run.
//!
//! | Stage | Artifact |
//! |-------|----------|
//! | split | [`SentenceSet`] |
//! | segment | `Vec<WordSequence>` |
//! | weights | [`TermWeights`] |
//! | similarity | [`SimilarityMatrix`] |
//! | rank | [`RankOutput`] |
//! | rerank | `Vec<RankedSentence>` |
//! | select | [`SummaryOutput`] |

use serde::Serialize;

pub use crate::nlp::splitter::SentenceSet;
pub use crate::summarizer::similarity::SimilarityMatrix;
pub use crate::summarizer::term_weights::TermWeights;

use crate::types::{RankedSentence, Summary};

/// LexRank output: sentences by descending score plus convergence info.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOutput {
    /// Every sentence, descending by score (ties ascending by id)
    pub ranked: Vec<RankedSentence>,
    /// Directed edges in the thresholded graph, self-loops included
    pub edges: usize,
    /// Power iterations performed
    pub iterations: usize,
    /// Whether the L1 change fell to the tolerance
    pub converged: bool,
    /// Final L1 change
    pub delta: f64,
    /// L1 change per iteration
    pub deltas: Vec<f64>,
}

impl RankOutput {
    /// Score of sentence `id`, if present
    pub fn score_of(&self, id: usize) -> Option<f64> {
        self.ranked.iter().find(|s| s.id == id).map(|s| s.score)
    }
}

/// Public-facing result of one summarization run.
///
/// `line_limited` and `character_limited` are computed independently from the
/// same upstream ranking; both are ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryOutput {
    /// LexRank order (descending score)
    pub lexrank: Vec<RankedSentence>,
    /// MMR selection order
    pub mmr: Vec<RankedSentence>,
    /// First `max_lines` of the MMR order, in document order
    pub line_limited: Summary,
    /// Knapsack selection under `max_characters`, in document order
    pub character_limited: Summary,
    pub iterations: usize,
    pub converged: bool,
    /// Final L1 change of the power iteration
    pub delta: f64,
}

impl SummaryOutput {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns `true` when the document yielded no sentences.
    pub fn is_empty(&self) -> bool {
        self.lexrank.is_empty()
    }
}
