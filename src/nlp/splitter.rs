//! Sentence splitting
//!
//! The text is split on every recognized terminator, and only on those. The
//! fragment after the last terminator is always discarded, so text
//! that does not end with a terminator loses its final sentence. Empty
//! fragments between consecutive terminators are kept as empty sentences;
//! downstream stages treat them as sentences without words.

use crate::errors::{LexRankError, Result};
use crate::types::SentenceId;

/// Terminators recognized by [`SentenceSplitter::new`].
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?', '。', '．', '！', '？'];

/// Ordered sentences of one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceSet {
    sentences: Vec<String>,
    char_count: usize,
}

impl SentenceSet {
    /// Sentences in document order; the index is the sentence id.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn get(&self, id: SentenceId) -> Option<&str> {
        self.sentences.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Unicode scalar count of the document, terminators and the discarded
    /// tail included.
    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SplitMode {
    /// Split on any of these characters
    Terminators(Vec<char>),
    /// Split on this exact string, no normalization
    Delimiter(String),
}

/// Splits raw text into sentences
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceSplitter {
    mode: SplitMode,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    /// Splitter recognizing [`DEFAULT_TERMINATORS`]
    pub fn new() -> Self {
        Self {
            mode: SplitMode::Terminators(DEFAULT_TERMINATORS.to_vec()),
        }
    }

    /// Splitter recognizing a custom terminator set
    pub fn with_terminators(terminators: &[char]) -> Self {
        Self {
            mode: SplitMode::Terminators(terminators.to_vec()),
        }
    }

    /// Single-delimiter splitter: split on `delimiter` verbatim
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            mode: SplitMode::Delimiter(delimiter.into()),
        }
    }

    /// Split `text` into sentences.
    ///
    /// Fails with [`LexRankError::EmptyInput`] when the text, or the
    /// delimiter in single-delimiter mode, is empty.
    pub fn split(&self, text: &str) -> Result<SentenceSet> {
        if text.is_empty() {
            return Err(LexRankError::EmptyInput("text is empty".into()));
        }

        let mut fragments: Vec<String> = match &self.mode {
            SplitMode::Terminators(terminators) => text
                .split(|c: char| terminators.contains(&c))
                .map(str::to_string)
                .collect(),
            SplitMode::Delimiter(delimiter) => {
                if delimiter.is_empty() {
                    return Err(LexRankError::EmptyInput("delimiter is empty".into()));
                }
                text.split(delimiter.as_str()).map(str::to_string).collect()
            }
        };

        // The piece after the last delimiter is never a sentence.
        fragments.pop();

        Ok(SentenceSet {
            sentences: fragments,
            char_count: text.chars().count(),
        })
    }
}
