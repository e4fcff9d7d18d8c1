//! Word segmentation boundary
//!
//! Turning a sentence into word surfaces is delegated to a [`Segmenter`].
//! Locale-specific rules (e.g. morphological analysis for languages written
//! without spaces) live behind that trait; the ranking core only sees the
//! resulting [`WordSequence`]s. Two simple implementations are provided.

use unicode_segmentation::UnicodeSegmentation;

use super::splitter::SentenceSet;
use crate::types::WordSequence;

/// Splits a sentence into word surfaces.
///
/// Implementations must be deterministic: identical input yields identical
/// output.
pub trait Segmenter {
    fn segment(&self, sentence: &str) -> WordSequence;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> WordSequence,
{
    fn segment(&self, sentence: &str) -> WordSequence {
        self(sentence)
    }
}

/// Segments on Unicode word boundaries (UAX #29), dropping punctuation and
/// whitespace. Ideographic scripts come out one character per word.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn segment(&self, sentence: &str) -> WordSequence {
        sentence.unicode_words().map(str::to_string).collect()
    }
}

/// Segments on whitespace only; punctuation stays attached to words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, sentence: &str) -> WordSequence {
        sentence.split_whitespace().map(str::to_string).collect()
    }
}

/// Segment every sentence, one segmenter call per sentence, in order.
pub fn segment_sentences<S>(segmenter: &S, sentences: &SentenceSet) -> Vec<WordSequence>
where
    S: Segmenter + ?Sized,
{
    sentences
        .sentences()
        .iter()
        .map(|s| segmenter.segment(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::splitter::SentenceSplitter;
    use std::cell::Cell;

    #[test]
    fn test_unicode_words_drop_punctuation() {
        let words = UnicodeWordSegmenter.segment(" Hello, world: it's fine");
        assert_eq!(words, vec!["Hello", "world", "it's", "fine"]);
    }

    #[test]
    fn test_whitespace_keeps_punctuation() {
        let words = WhitespaceSegmenter.segment(" Hello, world");
        assert_eq!(words, vec!["Hello,", "world"]);
    }

    #[test]
    fn test_empty_sentence_gives_empty_sequence() {
        assert!(UnicodeWordSegmenter.segment("").is_empty());
        assert!(UnicodeWordSegmenter.segment("  ,  ").is_empty());
    }

    #[test]
    fn test_closure_segmenter() {
        let seg = |s: &str| -> WordSequence { s.split('-').map(str::to_string).collect() };
        assert_eq!(seg.segment("a-b"), vec!["a", "b"]);
    }

    #[test]
    fn test_segment_sentences_calls_once_per_sentence() {
        let calls = Cell::new(0usize);
        let seg = |s: &str| -> WordSequence {
            calls.set(calls.get() + 1);
            UnicodeWordSegmenter.segment(s)
        };
        let set = SentenceSplitter::new().split("A cat sat. Dogs bark.").unwrap();

        let words = segment_sentences(&seg, &set);

        assert_eq!(calls.get(), 2);
        assert_eq!(words, vec![vec!["A", "cat", "sat"], vec!["Dogs", "bark"]]);
    }
}
