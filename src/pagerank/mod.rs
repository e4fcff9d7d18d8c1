//! PageRank
//!
//! Power-iteration PageRank over the sentence graph.

pub mod standard;

/// Stationary scores plus the convergence trace that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// One score per node, summing to 1
    pub scores: Vec<f64>,
    /// L1 change of each iteration, in order
    pub deltas: Vec<f64>,
    /// Whether the last change was within tolerance
    pub converged: bool,
}

impl PageRankResult {
    pub fn iterations(&self) -> usize {
        self.deltas.len()
    }

    /// Last L1 change, 0 when no iteration ran
    pub fn delta(&self) -> f64 {
        self.deltas.last().copied().unwrap_or(0.0)
    }

    /// Score of `node`, 0 when out of range
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
