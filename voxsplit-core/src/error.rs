//! Error types for configuration loading and audio stitching
//!
//! Text segmentation itself never fails: bad lengths and unknown strategy
//! names fall back to configured defaults.

use thiserror::Error;

/// Errors raised by the fallible parts of the crate
#[derive(Debug, Error)]
pub enum ChunkError {
    /// A configuration value is out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Infrastructure error (I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stitching was asked to join zero segments
    #[error("no audio segments to stitch")]
    EmptyAudio,

    /// Segments disagree on their channel layout
    #[error("audio segment {index} has {found} channel(s), expected {expected}")]
    ChannelMismatch {
        /// Position of the offending segment
        index: usize,
        /// Channel count of the first segment
        expected: u16,
        /// Channel count of the offending segment
        found: u16,
    },

    /// Segments disagree on their sample rate
    #[error("audio segment {index} is sampled at {found} Hz, expected {expected} Hz")]
    SampleRateMismatch {
        /// Position of the offending segment
        index: usize,
        /// Sample rate requested by the caller
        expected: u32,
        /// Sample rate of the offending segment
        found: u32,
    },
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, ChunkError>;
