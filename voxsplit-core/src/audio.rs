//! Reassembly of synthesized audio segments
//!
//! Segments come back from the synthesis model one per text chunk. They are
//! joined in order with a short silence between neighbours so the chunk
//! boundaries do not run into each other.

use crate::error::{ChunkError, Result};

/// Silence inserted between consecutive segments, in seconds
pub const INTER_CHUNK_SILENCE_SECS: f64 = 0.1;

/// A block of PCM audio with interleaved `f32` samples
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    /// Samples per second per channel
    pub sample_rate: u32,
    /// Number of interleaved channels
    pub channels: u16,
    /// Interleaved samples; length is a multiple of `channels`
    pub samples: Vec<f32>,
}

impl AudioSegment {
    /// Create a segment from interleaved samples
    pub fn new(sample_rate: u32, channels: u16, samples: Vec<f32>) -> Self {
        debug_assert!(channels > 0, "segment needs at least one channel");
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    /// Create a single-channel segment
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self::new(sample_rate, 1, samples)
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Playback length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }
}

/// Number of silent frames inserted between segments at `sample_rate`
pub fn silence_frames(sample_rate: u32) -> usize {
    (INTER_CHUNK_SILENCE_SECS * sample_rate as f64) as usize
}

/// Concatenate segments with a fixed silence gap between neighbours
///
/// A single segment is returned unchanged, whatever its rate. Otherwise
/// every segment must match the first one's channel count and `sample_rate`. The output buffer is sized
/// once up front, so no intermediate buffers are built while joining.
pub fn stitch_segments(mut segments: Vec<AudioSegment>, sample_rate: u32) -> Result<AudioSegment> {
    let channels = match segments.first() {
        Some(first) => first.channels,
        None => return Err(ChunkError::EmptyAudio),
    };

    if segments.len() == 1 {
        return segments.pop().ok_or(ChunkError::EmptyAudio);
    }

    for (index, segment) in segments.iter().enumerate() {
        if segment.channels != channels {
            return Err(ChunkError::ChannelMismatch {
                index,
                expected: channels,
                found: segment.channels,
            });
        }
        if segment.sample_rate != sample_rate {
            return Err(ChunkError::SampleRateMismatch {
                index,
                expected: sample_rate,
                found: segment.sample_rate,
            });
        }
    }

    let gap = silence_frames(sample_rate) * channels as usize;
    let total = segments.iter().map(|s| s.samples.len()).sum::<usize>()
        + gap * (segments.len() - 1);

    let mut samples = Vec::with_capacity(total);
    for (index, segment) in segments.into_iter().enumerate() {
        if index > 0 {
            samples.resize(samples.len() + gap, 0.0);
        }
        samples.extend_from_slice(&segment.samples);
    }

    log::debug!(
        "stitched audio: {} frames at {sample_rate} Hz",
        samples.len() / channels as usize
    );

    Ok(AudioSegment::new(sample_rate, channels, samples))
}
