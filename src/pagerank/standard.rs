//! Standard PageRank algorithm
//!
//! Power iteration over unweighted out-links:
//!
//! `rank'(v) = (1-d)/N + d * (Σ_{u->v} rank(u)/outdeg(u) + dangling/N)`
//!
//! where `dangling` is the mass held by nodes without out-links, spread
//! evenly. The vector is renormalized after every step and iteration stops
//! once the L1 change is at most the tolerance, or at the iteration cap.

use super::PageRankResult;
use crate::graph::csr::SentenceGraph;
use crate::types::{DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Safety cap on iterations
    pub max_iterations: usize,
    /// Convergence bound on the L1 change
    pub tolerance: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Iterate from the uniform distribution until convergence or the cap.
    ///
    /// A capped run still returns its last vector, with `converged = false`.
    pub fn run(&self, graph: &SentenceGraph) -> PageRankResult {
        let n = graph.len();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                deltas: Vec::new(),
                converged: true,
            };
        }

        // Damped share each node passes to every out-neighbor, per unit of rank
        let shares: Vec<f64> = (0..n)
            .map(|node| match graph.out_degree(node) {
                0 => 0.0,
                degree => self.damping / degree as f64,
            })
            .collect();
        let dangling = graph.dangling();

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut deltas = Vec::new();
        let mut converged = false;

        while deltas.len() < self.max_iterations {
            let delta = self.step(graph, &shares, &dangling, &scores, &mut next);
            deltas.push(delta);
            std::mem::swap(&mut scores, &mut next);
            if delta <= self.tolerance {
                converged = true;
                break;
            }
        }

        PageRankResult {
            scores,
            deltas,
            converged,
        }
    }

    /// One power-iteration step from `scores` into `next`; returns the L1
    /// change.
    fn step(
        &self,
        graph: &SentenceGraph,
        shares: &[f64],
        dangling: &[usize],
        scores: &[f64],
        next: &mut [f64],
    ) -> f64 {
        let n = scores.len() as f64;
        let dangling_mass: f64 = dangling.iter().map(|&node| scores[node]).sum();
        next.fill((1.0 - self.damping) / n + self.damping * dangling_mass / n);

        for (node, (&rank, &share)) in scores.iter().zip(shares).enumerate() {
            if share == 0.0 {
                continue;
            }
            let flow = rank * share;
            for &target in graph.targets(node) {
                next[target as usize] += flow;
            }
        }

        let total: f64 = next.iter().sum();
        if total > 0.0 {
            next.iter_mut().for_each(|rank| *rank /= total);
        }

        scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> SentenceGraph {
        SentenceGraph::from_adjacency(&[vec![1], vec![2], vec![0]])
    }

    /// Spokes link to the hub; every node keeps a self-loop.
    fn star() -> SentenceGraph {
        SentenceGraph::from_adjacency(&[vec![0], vec![0, 1], vec![0, 2], vec![0, 3]])
    }

    #[test]
    fn test_cycle_is_uniform() {
        let result = StandardPageRank::new().run(&cycle());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hub_outranks_spokes() {
        let result = StandardPageRank::new().run(&star());

        assert!(result.converged);
        for spoke in 1..4 {
            assert!(result.score(0) > result.score(spoke));
        }
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_loops_only_is_uniform() {
        let graph = SentenceGraph::from_adjacency(&[vec![0], vec![1], vec![2]]);
        let result = StandardPageRank::new().run(&graph);

        assert_eq!(result.iterations(), 1);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dangling_mass_is_redistributed() {
        let graph = SentenceGraph::from_adjacency(&[vec![], vec![], vec![], vec![]]);
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&SentenceGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
        assert_eq!(result.iterations(), 0);
        assert_eq!(result.delta(), 0.0);
    }

    #[test]
    fn test_cap_returns_partial_result() {
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_tolerance(0.0)
            .run(&star());

        assert_eq!(result.iterations(), 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_deltas_non_increasing() {
        let result = StandardPageRank::new().with_tolerance(1e-12).run(&star());

        for pair in result.deltas.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12);
        }
        assert_eq!(result.delta(), *result.deltas.last().unwrap());
    }

    #[test]
    fn test_higher_damping_widens_hub_lead() {
        let graph = star();
        let low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let high = StandardPageRank::new().with_damping(0.95).run(&graph);

        assert!(high.score(0) - high.score(1) > low.score(0) - low.score(1));
    }
}
