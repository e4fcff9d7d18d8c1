//! LexRank sentence ranking
//!
//! Thresholds the similarity matrix into a directed graph (self-loops
//! included) and scores each sentence with standard PageRank.

use crate::graph::csr::SentenceGraph;
use crate::nlp::splitter::SentenceSet;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::artifacts::RankOutput;
use crate::summarizer::similarity::SimilarityMatrix;
use crate::types::{LexRankConfig, RankedSentence};

/// LexRank ranker
#[derive(Debug, Clone)]
pub struct LexRankRanker {
    /// Minimum similarity for an edge
    pub threshold: f64,
    pagerank: StandardPageRank,
}

impl Default for LexRankRanker {
    fn default() -> Self {
        Self::from_config(&LexRankConfig::default())
    }
}

impl LexRankRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &LexRankConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            pagerank: StandardPageRank::new()
                .with_damping(cfg.damping)
                .with_tolerance(cfg.tolerance)
                .with_max_iterations(cfg.max_iterations),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build the thresholded graph for `matrix`.
    pub fn graph(&self, matrix: &SimilarityMatrix) -> SentenceGraph {
        SentenceGraph::from_similarity(matrix, self.threshold)
    }

    /// Score every sentence and order them by descending score.
    ///
    /// Equal scores keep ascending id order.
    pub fn rank(&self, sentences: &SentenceSet, matrix: &SimilarityMatrix) -> RankOutput {
        let graph = self.graph(matrix);
        let result = self.pagerank.run(&graph);

        if !result.converged {
            tracing::warn!(
                iterations = result.iterations(),
                delta = result.delta(),
                "power iteration stopped at the iteration cap before converging"
            );
        }
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            iterations = result.iterations(),
            "lexrank scores computed"
        );

        let mut ranked: Vec<RankedSentence> = sentences
            .sentences()
            .iter()
            .enumerate()
            .map(|(id, text)| RankedSentence::new(id, text.as_str(), result.score(id)))
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        RankOutput {
            ranked,
            edges: graph.edge_count(),
            iterations: result.iterations(),
            converged: result.converged,
            delta: result.delta(),
            deltas: result.deltas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::splitter::SentenceSplitter;

    fn sentences(text: &str) -> SentenceSet {
        SentenceSplitter::new().split(text).unwrap()
    }

    #[test]
    fn test_hub_sentence_ranks_first() {
        // sentence 0 shares a position with 1 and 2; 1 and 2 do not overlap
        let set = sentences("hub. left. right.");
        let matrix = SimilarityMatrix::build(&[vec![1.0, 1.0], vec![1.0, 0.0], vec![0.0, 1.0]]);

        let output = LexRankRanker::new().with_threshold(0.5).rank(&set, &matrix);

        assert!(output.converged);
        assert_eq!(output.ranked[0].id, 0);
        assert_eq!(output.ranked[0].sentence, "hub");
    }

    #[test]
    fn test_scores_descending_and_cover_all_ids() {
        let set = sentences("a. b. c. d.");
        let matrix = SimilarityMatrix::build(&[
            vec![1.0, 0.2],
            vec![1.0, 0.1],
            vec![0.0, 1.0],
            vec![],
        ]);

        let output = LexRankRanker::new().with_threshold(0.3).rank(&set, &matrix);

        for pair in output.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let mut ids: Vec<_> = output.ranked.iter().map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_id_order() {
        let set = sentences("x. y. z.");
        let matrix = SimilarityMatrix::build(&[vec![], vec![], vec![]]);

        let output = LexRankRanker::new().rank(&set, &matrix);

        let ids: Vec<_> = output.ranked.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_graph_keeps_self_loops() {
        let matrix = SimilarityMatrix::build(&[vec![1.0], vec![]]);
        let graph = LexRankRanker::new().with_threshold(1.0).graph(&matrix);
        assert_eq!(graph.self_loop_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let output = LexRankRanker::new().rank(&SentenceSet::default(), &SimilarityMatrix::default());
        assert!(output.ranked.is_empty());
        assert!(output.converged);
    }
}
