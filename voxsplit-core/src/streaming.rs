//! Streaming profile resolution
//!
//! A quality preset trades latency against how natural the chunk boundaries
//! sound. Explicit chunk size and strategy values always win over the preset,
//! field by field.

use crate::strategy::ChunkStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chunk size used when neither an override nor a preset supplies one
pub const DEFAULT_STREAMING_CHUNK_SIZE: usize = 200;

/// Quality preset for streaming synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Small word-packed chunks for the lowest latency
    Fast,
    /// Sentence-aligned chunks
    Balanced,
    /// Large paragraph-aligned chunks for the most natural prosody
    High,
}

impl Quality {
    /// All presets in display order
    pub const ALL: [Quality; 3] = [Quality::Fast, Quality::Balanced, Quality::High];

    /// Chunk size implied by the preset
    pub fn chunk_size(&self) -> usize {
        match self {
            Quality::Fast => 100,
            Quality::Balanced => 200,
            Quality::High => 300,
        }
    }

    /// Strategy implied by the preset
    pub fn strategy(&self) -> ChunkStrategy {
        match self {
            Quality::Fast => ChunkStrategy::Word,
            Quality::Balanced => ChunkStrategy::Sentence,
            Quality::High => ChunkStrategy::Paragraph,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Fast => "fast",
            Quality::Balanced => "balanced",
            Quality::High => "high",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a quality name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quality preset: {0}")]
pub struct UnknownQuality(pub String);

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Quality::Fast),
            "balanced" => Ok(Quality::Balanced),
            "high" => Ok(Quality::High),
            _ => Err(UnknownQuality(s.to_string())),
        }
    }
}

/// Caller-supplied streaming parameters, any of which may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamingRequest {
    /// Explicit chunk size; zero counts as absent
    pub chunk_size: Option<usize>,
    /// Explicit strategy
    pub strategy: Option<ChunkStrategy>,
    /// Quality preset
    pub quality: Option<Quality>,
}

impl StreamingRequest {
    /// Build a request from raw names as they arrive from a client
    ///
    /// Unknown strategy names fall back to sentence; unknown quality names
    /// are ignored.
    pub fn from_names(
        chunk_size: Option<usize>,
        strategy: Option<&str>,
        quality: Option<&str>,
    ) -> Self {
        let quality = quality.and_then(|name| match name.parse() {
            Ok(quality) => Some(quality),
            Err(err) => {
                log::warn!("{err}, ignoring");
                None
            }
        });

        Self {
            chunk_size,
            strategy: strategy.map(ChunkStrategy::parse_lenient),
            quality,
        }
    }

    /// Resolve the request into concrete settings
    pub fn resolve(&self) -> StreamingSettings {
        resolve_streaming_settings(self.chunk_size, self.strategy, self.quality)
    }
}

/// Concrete streaming parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingSettings {
    /// Maximum chunk length in characters
    pub chunk_size: usize,
    /// Strategy to split with
    pub strategy: ChunkStrategy,
    /// Preset the settings were derived from, if any
    pub quality: Option<Quality>,
}

/// Combine overrides with a quality preset
///
/// Each field is resolved independently: an explicit value first, then the
/// preset's value, then the balanced defaults (200 characters, sentence).
pub fn resolve_streaming_settings(
    chunk_size: Option<usize>,
    strategy: Option<ChunkStrategy>,
    quality: Option<Quality>,
) -> StreamingSettings {
    let chunk_size = chunk_size
        .filter(|&size| size > 0)
        .or_else(|| quality.map(|q| q.chunk_size()))
        .unwrap_or(DEFAULT_STREAMING_CHUNK_SIZE);

    let strategy = strategy
        .or_else(|| quality.map(|q| q.strategy()))
        .unwrap_or_default();

    StreamingSettings {
        chunk_size,
        strategy,
        quality,
    }
}
