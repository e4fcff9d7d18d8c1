//! Summarization components
//!
//! The ranking-and-selection core: TF-IDF weighting, sentence similarity,
//! LexRank scoring, MMR re-ranking, and length-limited selection.

pub mod lexrank;
pub mod limits;
pub mod selector;
pub mod similarity;
pub mod term_weights;
