//! Natural Language Processing components
//!
//! This module provides sentence splitting and the word segmentation
//! boundary.

pub mod segmenter;
pub mod splitter;
