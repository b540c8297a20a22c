//! Segmentation strategies
//!
//! Every splitter takes text and a maximum chunk length in characters and
//! returns trimmed, non-empty chunks in their original order. Splitters
//! assume `max_length > 0`; [`crate::Chunker`] substitutes configured
//! defaults before calling them.

mod fixed;
mod fold;
mod hierarchical;
mod paragraph;
mod sentence;
mod word;

pub use fixed::split_fixed;
pub use fold::{fold_delimiters, BASIC_DELIMITERS, STREAMING_DELIMITERS};
pub use hierarchical::split_hierarchical;
pub use paragraph::{split_paragraphs, split_paragraphs_streaming};
pub use sentence::{group_sentences, split_sentences_basic, split_sentences_streaming};
pub use word::pack_words;

use crate::boundary::paragraph_break;

/// Trimmed, non-empty paragraphs separated by blank lines
pub(crate) fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    paragraph_break()
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

/// Drop chunks that are empty after trimming, trimming the rest
pub(crate) fn finish(chunks: Vec<String>) -> Vec<String> {
    chunks
        .into_iter()
        .filter_map(|chunk| {
            let trimmed = chunk.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == chunk.len() {
                Some(chunk)
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
