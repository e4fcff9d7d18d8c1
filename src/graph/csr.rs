//! Compressed sparse row storage for the thresholded sentence graph
//!
//! Row `i` lists the out-edges of sentence `i` in ascending target order,
//! so every traversal is deterministic. The diagonal of a similarity matrix
//! is 1, hence any threshold up to 1 gives each sentence a self-loop.

use crate::summarizer::similarity::SimilarityMatrix;
use crate::types::SentenceId;

/// Directed sentence graph in CSR form
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceGraph {
    /// Out-edges of node `i` live at `row_ptr[i]..row_ptr[i + 1]`
    row_ptr: Vec<usize>,
    targets: Vec<u32>,
}

impl Default for SentenceGraph {
    fn default() -> Self {
        Self {
            row_ptr: vec![0],
            targets: Vec::new(),
        }
    }
}

impl SentenceGraph {
    /// Keep every pair whose similarity is at least `threshold`.
    ///
    /// Matrix rows are scanned left to right, so targets come out sorted
    /// without an extra pass.
    pub fn from_similarity(matrix: &SimilarityMatrix, threshold: f64) -> Self {
        let n = matrix.len();
        let mut graph = Self {
            row_ptr: Vec::with_capacity(n + 1),
            targets: Vec::new(),
        };
        graph.row_ptr.push(0);

        for i in 0..n {
            let kept = matrix
                .row(i)
                .iter()
                .enumerate()
                .filter(|&(_, &sim)| sim >= threshold)
                .map(|(j, _)| j as u32);
            graph.targets.extend(kept);
            graph.row_ptr.push(graph.targets.len());
        }
        graph
    }

    /// Build from explicit adjacency lists, one per node.
    ///
    /// Targets are sorted and deduplicated; out-of-range targets are dropped.
    pub fn from_adjacency(rows: &[Vec<u32>]) -> Self {
        let n = rows.len();
        let mut graph = Self::default();
        graph.row_ptr.reserve(n);

        for row in rows {
            let mut row: Vec<u32> = row.iter().copied().filter(|&t| (t as usize) < n).collect();
            row.sort_unstable();
            row.dedup();
            graph.targets.extend(row);
            graph.row_ptr.push(graph.targets.len());
        }
        graph
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.row_ptr.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Directed edges, self-loops included
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn out_degree(&self, node: SentenceId) -> usize {
        self.row_ptr[node + 1] - self.row_ptr[node]
    }

    /// Targets of `node`, ascending
    pub fn targets(&self, node: SentenceId) -> &[u32] {
        &self.targets[self.row_ptr[node]..self.row_ptr[node + 1]]
    }

    pub fn self_loop_count(&self) -> usize {
        (0..self.len())
            .filter(|&node| self.targets(node).binary_search(&(node as u32)).is_ok())
            .count()
    }

    /// Nodes without out-edges
    pub fn dangling(&self) -> Vec<SentenceId> {
        (0..self.len())
            .filter(|&node| self.out_degree(node) == 0)
            .collect()
    }
}
