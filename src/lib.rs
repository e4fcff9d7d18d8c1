//! # rapid_lexrank
//!
//! Extractive summarization: sentences are weighted with corpus-level TF-IDF,
//! scored by LexRank centrality over a thresholded similarity graph,
//! diversified with Maximal Marginal Relevance, and finally cut down to a
//! sentence-count or character budget (the latter by exact 0/1 knapsack).
//!
//! ## Quick start
//!
//! ```
//! use rapid_lexrank::{summarize, LexRankConfig};
//!
//! let config = LexRankConfig::default().with_max_lines(1);
//! let output = summarize("A cat sat. A cat ran. Dogs bark.", &config).unwrap();
//!
//! assert_eq!(output.line_limited.len(), 1);
//! assert_eq!(output.lexrank.len(), 3);
//! ```
//!
//! Word segmentation is pluggable through [`Segmenter`]; any
//! `Fn(&str) -> Vec<String>` works.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{LexRankError, Result};
pub use nlp::segmenter::{Segmenter, UnicodeWordSegmenter, WhitespaceSegmenter};
pub use nlp::splitter::{SentenceSet, SentenceSplitter};
pub use pipeline::{summarize, ConfigSpec, PipelineObserver, Summarizer, SummaryOutput};
pub use types::{LexRankConfig, RankedSentence, Summary};
