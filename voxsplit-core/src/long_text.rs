//! Structured chunk records for long-text generation

use crate::text::{char_len, prefix};
use serde::{Deserialize, Serialize};

/// Number of characters kept in a chunk preview
pub const PREVIEW_CHARS: usize = 50;

/// Marker appended to truncated previews
pub const PREVIEW_ELLIPSIS: &str = "...";

/// One indexed chunk of a long-text job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTextChunk {
    /// Zero-based position in the job
    pub index: usize,
    /// Full chunk text
    pub text: String,
    /// First 50 characters, with `...` appended when truncated
    #[serde(rename = "text_preview")]
    pub preview: String,
    /// Length of `text` in characters
    pub character_count: usize,
}

impl LongTextChunk {
    /// Create a record, deriving preview and length from `text`
    pub fn new(index: usize, text: String) -> Self {
        let character_count = char_len(&text);
        let preview = if character_count > PREVIEW_CHARS {
            format!("{}{PREVIEW_ELLIPSIS}", prefix(&text, PREVIEW_CHARS))
        } else {
            text.clone()
        };

        Self {
            index,
            text,
            preview,
            character_count,
        }
    }
}

/// Wrap ordered chunk strings into indexed records
///
/// Chunk contents are moved, not altered. An empty input gives an empty
/// output.
pub fn build_long_text_chunks<I>(chunks: I) -> Vec<LongTextChunk>
where
    I: IntoIterator<Item = String>,
{
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, text)| LongTextChunk::new(index, text))
        .collect()
}
