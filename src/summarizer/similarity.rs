//! Sentence similarity
//!
//! Cosine similarity over positional TF-IDF vectors and the dense N×N
//! matrix built from it.

use rayon::prelude::*;

use crate::types::{SentenceId, WeightVector};

/// Sentence count from which upper-triangle rows are computed in parallel.
pub const PARALLEL_MIN_SENTENCES: usize = 64;

/// Cosine similarity of two positional weight vectors
///
/// The dot product runs over the positions both vectors have; each norm
/// covers its whole vector. Returns 0 when either norm is zero, so an empty
/// sentence is dissimilar to everything.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Square, symmetric similarity matrix with a unit diagonal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major values
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix from per-sentence TF-IDF vectors.
    ///
    /// Only the upper triangle is computed; each value is mirrored into the
    /// lower triangle.
    pub fn build(vectors: &[WeightVector]) -> Self {
        let n = vectors.len();

        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| cosine_similarity(&vectors[i], &vectors[j]))
                .collect()
        };

        let rows: Vec<Vec<f64>> = if n >= PARALLEL_MIN_SENTENCES {
            (0..n).into_par_iter().map(upper_row).collect()
        } else {
            (0..n).map(upper_row).collect()
        };

        let mut values = vec![0.0; n * n];
        for (i, row) in rows.into_iter().enumerate() {
            values[i * n + i] = 1.0;
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self { n, values }
    }

    /// Similarity of sentences `i` and `j`
    pub fn get(&self, i: SentenceId, j: SentenceId) -> f64 {
        self.values[i * self.n + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: SentenceId) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        assert_eq!(cosine_similarity(&[], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_uneven_lengths() {
        // dot over the shared first position only; norms over everything
        let a = [3.0, 4.0];
        let b = [1.0];
        let expected = 3.0 / (5.0 * 1.0);
        assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-12);
        assert!((cosine_similarity(&b, &a) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_diagonal_and_symmetry() {
        let vectors = vec![vec![0.3, 0.3, 0.1], vec![0.3, 0.3, 0.2], vec![], vec![0.5]];
        let m = SimilarityMatrix::build(&vectors);

        assert_eq!(m.len(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 1.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        // the empty sentence is similarity-0 to the others
        assert_eq!(m.get(2, 0), 0.0);
        assert_eq!(m.get(2, 3), 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vectors: Vec<WeightVector> = (0..PARALLEL_MIN_SENTENCES + 5)
            .map(|i| (0..(i % 7)).map(|j| ((i * 31 + j * 17) % 11) as f64 / 10.0).collect())
            .collect();

        let parallel = SimilarityMatrix::build(&vectors);

        for i in 0..vectors.len() {
            for j in (i + 1)..vectors.len() {
                assert_eq!(parallel.get(i, j), cosine_similarity(&vectors[i], &vectors[j]));
            }
        }
    }

    #[test]
    fn test_row_view() {
        let m = SimilarityMatrix::build(&[vec![1.0], vec![1.0]]);
        assert_eq!(m.row(0), &[1.0, 1.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let m = SimilarityMatrix::build(&[]);
        assert!(m.is_empty());
    }
}
