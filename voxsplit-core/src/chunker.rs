//! Chunking entry points
//!
//! [`Chunker`] owns a validated [`ChunkerConfig`] and exposes the three
//! chunking paths: regular requests, long-text jobs and streaming. It holds
//! no mutable state, so one instance can be shared across threads.

use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::estimate::estimate_processing_time;
use crate::long_text::{build_long_text_chunks, LongTextChunk};
use crate::splitter::{
    finish, pack_words, split_fixed, split_hierarchical, split_paragraphs,
    split_paragraphs_streaming, split_sentences_basic, split_sentences_streaming,
};
use crate::strategy::ChunkStrategy;
use crate::streaming::{StreamingRequest, StreamingSettings};
use crate::text::char_len;
use crate::validation::{validate_long_text_input, ValidationResult};

/// Text chunker bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a chunker with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split text for a regular synthesis request
    ///
    /// `max_length` defaults to `default_chunk_length`. Text that already
    /// fits is returned as one chunk; otherwise sentences are grouped and
    /// oversized ones broken at clause delimiters, then words.
    pub fn split_into_chunks(&self, text: &str, max_length: Option<usize>) -> Vec<String> {
        let max_length = positive_or(max_length, self.config.default_chunk_length);
        if text.trim().is_empty() {
            return Vec::new();
        }
        if char_len(text) <= max_length {
            return vec![text.to_string()];
        }
        finish(split_sentences_basic(text, max_length))
    }

    /// Split long text with the given strategy
    ///
    /// `max_length` defaults to `long_text_chunk_size` and is capped just
    /// below `max_total_length`. [`ChunkStrategy::Sentence`] selects the
    /// hierarchical cascade.
    pub fn chunk_text(
        &self,
        text: &str,
        strategy: ChunkStrategy,
        max_length: Option<usize>,
    ) -> Vec<String> {
        let max_length = positive_or(max_length, self.config.long_text_chunk_size);
        let max_length = self.config.effective_long_text_limit(max_length);

        let cleaned = text.trim();
        if cleaned.is_empty() {
            return Vec::new();
        }

        log::debug!(
            "chunking {} chars with {strategy} strategy, limit {max_length}",
            char_len(cleaned)
        );

        let chunks = match strategy {
            ChunkStrategy::Fixed => split_fixed(cleaned, max_length),
            ChunkStrategy::Paragraph => split_paragraphs(cleaned, max_length),
            ChunkStrategy::Word => pack_words(cleaned, max_length),
            ChunkStrategy::Sentence => split_hierarchical(cleaned, max_length),
        };
        finish(chunks)
    }

    /// Split long text into indexed records for a generation job
    ///
    /// A missing strategy uses `long_text_strategy` from the configuration.
    pub fn split_for_long_generation(
        &self,
        text: &str,
        max_chunk_size: Option<usize>,
        strategy: Option<ChunkStrategy>,
    ) -> Vec<LongTextChunk> {
        let strategy = strategy.unwrap_or(self.config.long_text_strategy);
        build_long_text_chunks(self.chunk_text(text, strategy, max_chunk_size))
    }

    /// Split text for streaming synthesis
    ///
    /// Returns the resolved settings together with the chunks.
    pub fn split_for_streaming(
        &self,
        text: &str,
        request: &StreamingRequest,
    ) -> (StreamingSettings, Vec<String>) {
        let settings = request.resolve();
        let chunks = self.split_with_settings(text, &settings);
        (settings, chunks)
    }

    /// Split text with already-resolved streaming settings
    pub fn split_with_settings(&self, text: &str, settings: &StreamingSettings) -> Vec<String> {
        let max_length = settings.chunk_size.max(1);
        let cleaned = text.trim();

        log::debug!(
            "streaming split with {} strategy, chunk size {max_length}",
            settings.strategy
        );

        let chunks = match settings.strategy {
            ChunkStrategy::Sentence => split_sentences_streaming(cleaned, max_length),
            ChunkStrategy::Paragraph => split_paragraphs_streaming(cleaned, max_length),
            ChunkStrategy::Word => pack_words(cleaned, max_length),
            ChunkStrategy::Fixed => split_fixed(cleaned, max_length),
        };
        finish(chunks)
    }

    /// Estimate processing time for a long-text job, in seconds
    pub fn estimate_processing_time(&self, text_length: usize, chunk_size: Option<usize>) -> u64 {
        estimate_processing_time(
            text_length,
            self.config.avg_chars_per_second,
            chunk_size,
            &self.config,
        )
    }

    /// Validate text for long-text processing
    pub fn validate_long_text(&self, text: &str) -> ValidationResult {
        validate_long_text_input(text, &self.config)
    }
}

fn positive_or(value: Option<usize>, default: usize) -> usize {
    value.filter(|&v| v > 0).unwrap_or(default)
}
