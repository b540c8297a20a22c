//! Text chunking and audio stitching for speech synthesis
//!
//! Synthesis models accept a bounded amount of text per call. This crate
//! cuts arbitrary input into ordered chunks that each fit a character limit,
//! preferring natural boundaries so that prosody survives the cut:
//! paragraph breaks first, then sentence endings, clause delimiters,
//! whitespace, and finally a hard cut.
//!
//! # Architecture
//!
//! - **Boundary layer**: [`boundary`] locates the best cut point in a prefix
//! - **Splitters**: [`splitter`] holds the fixed, word, sentence, paragraph
//!   and hierarchical strategies
//! - **Entry points**: [`Chunker`] applies configured limits and dispatches
//!   regular, long-text and streaming requests
//! - **Audio**: [`audio`] joins synthesized segments with short silences
//!
//! All lengths are counted in Unicode scalar values, never bytes.
//!
//! # Example
//!
//! ```rust
//! use voxsplit_core::{ChunkStrategy, Chunker};
//!
//! let chunker = Chunker::new();
//! let text = "First sentence here. Second one follows. A third closes it.";
//!
//! let chunks = chunker.chunk_text(text, ChunkStrategy::Sentence, Some(25));
//! assert_eq!(
//!     chunks,
//!     vec!["First sentence here.", "Second one follows.", "A third closes it."]
//! );
//! ```

pub mod audio;
pub mod boundary;
pub mod chunker;
pub mod config;
pub mod error;
pub mod estimate;
pub mod long_text;
pub mod splitter;
pub mod strategy;
pub mod streaming;
pub mod text;
pub mod validation;

pub use audio::{stitch_segments, AudioSegment, INTER_CHUNK_SILENCE_SECS};
pub use boundary::{find_best_split, BoundaryTier, Split};
pub use chunker::Chunker;
pub use config::{ChunkerConfig, ChunkerConfigBuilder};
pub use error::{ChunkError, Result};
pub use estimate::estimate_processing_time;
pub use long_text::{build_long_text_chunks, LongTextChunk};
pub use strategy::{ChunkStrategy, UnknownStrategy};
pub use streaming::{
    resolve_streaming_settings, Quality, StreamingRequest, StreamingSettings, UnknownQuality,
};
pub use validation::{validate_long_text_input, ValidationResult};

/// Split long text with the default configuration
///
/// Convenience wrapper around [`Chunker::chunk_text`].
pub fn chunk_text(text: &str, strategy: ChunkStrategy, max_length: Option<usize>) -> Vec<String> {
    Chunker::new().chunk_text(text, strategy, max_length)
}

/// Split a regular request with the default configuration
pub fn split_into_chunks(text: &str, max_length: Option<usize>) -> Vec<String> {
    Chunker::new().split_into_chunks(text, max_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_functions_match_chunker() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota.";
        let chunker = Chunker::new();
        assert_eq!(
            chunk_text(text, ChunkStrategy::Word, Some(20)),
            chunker.chunk_text(text, ChunkStrategy::Word, Some(20))
        );
        assert_eq!(
            split_into_chunks(text, Some(20)),
            chunker.split_into_chunks(text, Some(20))
        );
    }

    #[test]
    fn test_public_exports() {
        let _ = ChunkerConfig::default();
        let _ = StreamingRequest::default();
        assert_eq!(ChunkStrategy::default(), ChunkStrategy::Sentence);
        assert!(INTER_CHUNK_SILENCE_SECS > 0.0);
    }
}
