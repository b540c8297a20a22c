//! Chunker configuration
//!
//! All thresholds are carried in an immutable [`ChunkerConfig`] value that is
//! handed to every entry point. It can be built in code, through
//! [`ChunkerConfigBuilder`], or loaded from a TOML file.

use crate::error::{ChunkError, Result};
use crate::strategy::ChunkStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Maximum chunk length for regular (short) requests, in characters
    pub const DEFAULT_CHUNK_LENGTH: usize = 280;

    /// Chunk size used for long-text generation, in characters
    pub const LONG_TEXT_CHUNK_SIZE: usize = 2500;

    /// Hard ceiling on a single synthesis request, in characters
    pub const MAX_TOTAL_LENGTH: usize = 3000;

    /// Safety margin kept below [`MAX_TOTAL_LENGTH`] when chunking long text
    pub const MAX_TOTAL_LENGTH_MARGIN: usize = 100;

    /// Minimum input length accepted for long-text processing
    pub const LONG_TEXT_MIN_LENGTH: usize = 3000;

    /// Maximum input length accepted for long-text processing
    pub const LONG_TEXT_MAX_LENGTH: usize = 100_000;

    /// Synthesis throughput assumed by the processing time estimator
    pub const AVG_CHARS_PER_SECOND: f64 = 25.0;
}

/// Thresholds shared by every chunking entry point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Maximum chunk length for [`crate::Chunker::split_into_chunks`]
    pub default_chunk_length: usize,
    /// Default chunk size for long-text chunking
    pub long_text_chunk_size: usize,
    /// Strategy used for long text when the caller does not pick one
    pub long_text_strategy: ChunkStrategy,
    /// Absolute maximum length of one synthesis request
    pub max_total_length: usize,
    /// Minimum trimmed length for long-text input
    pub long_text_min_length: usize,
    /// Maximum trimmed length for long-text input
    pub long_text_max_length: usize,
    /// Throughput used for processing time estimates
    pub avg_chars_per_second: f64,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            default_chunk_length: defaults::DEFAULT_CHUNK_LENGTH,
            long_text_chunk_size: defaults::LONG_TEXT_CHUNK_SIZE,
            long_text_strategy: ChunkStrategy::Sentence,
            max_total_length: defaults::MAX_TOTAL_LENGTH,
            long_text_min_length: defaults::LONG_TEXT_MIN_LENGTH,
            long_text_max_length: defaults::LONG_TEXT_MAX_LENGTH,
            avg_chars_per_second: defaults::AVG_CHARS_PER_SECOND,
        }
    }
}

impl ChunkerConfig {
    /// Create a configuration builder
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing keys take their default values. The result is validated.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChunkError::Configuration(format!("cannot serialize: {e}")))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("default_chunk_length", self.default_chunk_length),
            ("long_text_chunk_size", self.long_text_chunk_size),
            ("max_total_length", self.max_total_length),
            ("long_text_max_length", self.long_text_max_length),
        ];
        for (name, value) in lengths {
            if value == 0 {
                return Err(ChunkError::Configuration(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        if self.long_text_min_length > self.long_text_max_length {
            return Err(ChunkError::Configuration(format!(
                "long_text_min_length ({}) exceeds long_text_max_length ({})",
                self.long_text_min_length, self.long_text_max_length
            )));
        }

        if !(self.avg_chars_per_second.is_finite() && self.avg_chars_per_second > 0.0) {
            return Err(ChunkError::Configuration(
                "avg_chars_per_second must be a positive number".into(),
            ));
        }

        Ok(())
    }

    /// Upper bound applied to long-text chunks
    ///
    /// Keeps a margin below `max_total_length`; falls back to `max_length`
    /// when the margin would leave nothing.
    pub fn effective_long_text_limit(&self, max_length: usize) -> usize {
        let ceiling = self
            .max_total_length
            .saturating_sub(defaults::MAX_TOTAL_LENGTH_MARGIN);
        let effective = max_length.min(ceiling);
        if effective == 0 {
            max_length
        } else {
            effective
        }
    }
}

/// Fluent builder for [`ChunkerConfig`]
#[derive(Debug, Default)]
pub struct ChunkerConfigBuilder {
    config: ChunkerConfig,
}

impl ChunkerConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum chunk length for regular requests
    pub fn default_chunk_length(mut self, chars: usize) -> Self {
        self.config.default_chunk_length = chars;
        self
    }

    /// Set the long-text chunk size
    pub fn long_text_chunk_size(mut self, chars: usize) -> Self {
        self.config.long_text_chunk_size = chars;
        self
    }

    /// Set the default long-text strategy
    pub fn long_text_strategy(mut self, strategy: ChunkStrategy) -> Self {
        self.config.long_text_strategy = strategy;
        self
    }

    /// Set the absolute request length ceiling
    pub fn max_total_length(mut self, chars: usize) -> Self {
        self.config.max_total_length = chars;
        self
    }

    /// Set the accepted long-text length range
    pub fn long_text_bounds(mut self, min: usize, max: usize) -> Self {
        self.config.long_text_min_length = min;
        self.config.long_text_max_length = max;
        self
    }

    /// Set the assumed synthesis throughput
    pub fn avg_chars_per_second(mut self, rate: f64) -> Self {
        self.config.avg_chars_per_second = rate;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChunkerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
