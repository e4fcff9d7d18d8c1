//! MMR-based sentence re-ranking
//!
//! Implements Maximal Marginal Relevance (MMR) over the LexRank ordering:
//! starting from the top-scored sentence, repeatedly pick the unselected
//! sentence maximizing
//!
//! `λ * score(u) - (1-λ) * max_{s ∈ selected} sim(u, s)`
//!
//! until every sentence has been picked. The result is a full permutation;
//! truncation is left to the summary limits.

use crate::summarizer::similarity::SimilarityMatrix;
use crate::types::{RankedSentence, DEFAULT_LAMBDA};

/// MMR re-ranker
#[derive(Debug, Clone)]
pub struct MmrSelector {
    /// Lambda parameter for MMR (0 = diversity only, 1 = relevance only)
    lambda: f64,
}

impl Default for MmrSelector {
    fn default() -> Self {
        Self::new(DEFAULT_LAMBDA)
    }
}

impl MmrSelector {
    /// Create a selector, clamping lambda into [0, 1]
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: lambda.clamp(0.0, 1.0),
        }
    }

    /// Set lambda (relevance vs diversity tradeoff)
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda.clamp(0.0, 1.0);
        self
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Re-order `ranked` (descending LexRank score) by MMR.
    ///
    /// `matrix` supplies the pairwise TF-IDF cosine similarities, indexed by
    /// sentence id. Ties go to the candidate scanned first.
    pub fn rerank(&self, ranked: &[RankedSentence], matrix: &SimilarityMatrix) -> Vec<RankedSentence> {
        if ranked.is_empty() {
            return Vec::new();
        }

        let n = ranked.len();
        let mut order: Vec<usize> = Vec::with_capacity(n);
        let mut selected = vec![false; n];
        // Running max similarity of each candidate to the selected set
        let mut max_sim = vec![f64::NEG_INFINITY; n];

        let mut next = Some(0);
        while let Some(idx) = next {
            order.push(idx);
            selected[idx] = true;
            let picked_id = ranked[idx].id;
            for (i, candidate) in ranked.iter().enumerate() {
                max_sim[i] = max_sim[i].max(matrix.get(candidate.id, picked_id));
            }

            next = None;
            let mut best_mmr = f64::NEG_INFINITY;
            for (i, candidate) in ranked.iter().enumerate() {
                if selected[i] {
                    continue;
                }

                let mmr = self.lambda * candidate.score - (1.0 - self.lambda) * max_sim[i];

                if next.is_none() || mmr > best_mmr {
                    best_mmr = mmr;
                    next = Some(i);
                }
            }
        }

        order.into_iter().map(|i| ranked[i].clone()).collect()
    }
}
