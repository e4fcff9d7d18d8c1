//! TF, IDF and TF-IDF weights per word occurrence
//!
//! Vectors are positional: entry `j` of sentence `i` belongs to the `j`-th
//! word of that sentence, not to a vocabulary index.
//!
//! Term frequency is corpus-level: the count of a word across the whole
//! document divided by the document's total word count. Every occurrence of
//! a word therefore carries the same TF wherever it appears. This differs
//! from the usual per-sentence TF and is intentional; summaries depend on it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{LexRankError, Result};
use crate::types::{WeightVector, WordSequence};

/// Parallel TF / IDF / TF-IDF vectors, one per sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights {
    tf: Vec<WeightVector>,
    idf: Vec<WeightVector>,
    tfidf: Vec<WeightVector>,
}

impl TermWeights {
    /// Compute all three weightings for the segmented document.
    pub fn build(words: &[WordSequence]) -> Result<Self> {
        let tf = term_frequencies(words);
        let idf = inverse_document_frequencies(words)?;
        let tfidf = tf
            .iter()
            .zip(&idf)
            .map(|(t, i)| t.iter().zip(i).map(|(t, i)| t * i).collect())
            .collect();

        Ok(Self { tf, idf, tfidf })
    }

    pub fn tf(&self) -> &[WeightVector] {
        &self.tf
    }

    pub fn idf(&self) -> &[WeightVector] {
        &self.idf
    }

    pub fn tfidf(&self) -> &[WeightVector] {
        &self.tfidf
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.tfidf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tfidf.is_empty()
    }
}

/// Corpus-level term frequency for every word occurrence.
pub fn term_frequencies(words: &[WordSequence]) -> Vec<WeightVector> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut total = 0usize;
    for sentence in words {
        for word in sentence {
            *counts.entry(word.as_str()).or_insert(0) += 1;
            total += 1;
        }
    }

    words
        .iter()
        .map(|sentence| {
            sentence
                .iter()
                .map(|word| {
                    let count = counts.get(word.as_str()).copied().unwrap_or(0);
                    // total > 0 whenever a word exists
                    count as f64 / total as f64
                })
                .collect()
        })
        .collect()
}

/// `ln(N / df) + 1` for every word occurrence, where `df` is the number of
/// sentences containing the word.
pub fn inverse_document_frequencies(words: &[WordSequence]) -> Result<Vec<WeightVector>> {
    let n = words.len();

    let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
    for sentence in words {
        let distinct: FxHashSet<&str> = sentence.iter().map(String::as_str).collect();
        for word in distinct {
            *document_frequency.entry(word).or_insert(0) += 1;
        }
    }

    words
        .iter()
        .map(|sentence| {
            sentence
                .iter()
                .map(|word| {
                    let df = document_frequency.get(word.as_str()).copied().unwrap_or(0);
                    inverse_document_frequency(n, df).map_err(|_| {
                        LexRankError::Computation(format!("document frequency of {word:?} is zero"))
                    })
                })
                .collect::<Result<WeightVector>>()
        })
        .collect()
}

/// `ln(n / df) + 1` for a word found in `df` of `n` sentences.
///
/// Words taken from the document always have `df >= 1`; a zero count means
/// the caller's frequency table and word list disagree.
pub fn inverse_document_frequency(n: usize, df: usize) -> Result<f64> {
    if df == 0 {
        return Err(LexRankError::Computation("document frequency is zero".into()));
    }
    Ok((n as f64 / df as f64).ln() + 1.0)
}
