//! Stitch command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use voxsplit_core::{stitch_segments, AudioSegment};

use super::RunContext;
use crate::error::CliError;
use crate::progress::ProgressReporter;

/// Arguments for the stitch command
#[derive(Debug, Args)]
pub struct StitchArgs {
    /// WAV files to join, in playback order
    #[arg(value_name = "WAV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output WAV file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Write 16-bit integer samples instead of 32-bit float
    #[arg(long)]
    pub pcm16: bool,
}

impl StitchArgs {
    /// Execute the stitch command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let mut progress = ProgressReporter::new(context.quiet);
        progress.init(self.inputs.len() as u64, "segments");

        let mut segments = Vec::with_capacity(self.inputs.len());
        for path in &self.inputs {
            segments.push(read_wav(path)?);
            progress.item_completed(&path.display().to_string());
        }
        progress.finish();

        let sample_rate = segments.first().map(|s| s.sample_rate).unwrap_or_default();
        let count = segments.len();
        let stitched = stitch_segments(segments, sample_rate).context("Failed to stitch audio")?;

        write_wav(&self.output, &stitched, self.pcm16)?;

        if !context.quiet {
            println!(
                "✓ Stitched {count} segment(s) into {} ({:.2} s)",
                self.output.display(),
                stitched.duration_secs()
            );
        }
        Ok(())
    }
}

/// Read a WAV file into float samples in `[-1.0, 1.0]`
pub fn read_wav(path: &Path) -> Result<AudioSegment> {
    let audio_error = |e: hound::Error| CliError::AudioError(format!("{}: {e}", path.display()));

    let mut reader = hound::WavReader::open(path).map_err(audio_error)?;
    let spec = reader.spec();
    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(audio_error)?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(audio_error)?
        }
    };

    log::debug!(
        "{}: {} Hz, {} channel(s), {} samples",
        path.display(),
        spec.sample_rate,
        spec.channels,
        samples.len()
    );

    Ok(AudioSegment::new(spec.sample_rate, spec.channels, samples))
}

/// Write a segment as a WAV file
pub fn write_wav(path: &Path, segment: &AudioSegment, pcm16: bool) -> Result<()> {
    let audio_error = |e: hound::Error| CliError::AudioError(format!("{}: {e}", path.display()));

    let spec = hound::WavSpec {
        channels: segment.channels,
        sample_rate: segment.sample_rate,
        bits_per_sample: if pcm16 { 16 } else { 32 },
        sample_format: if pcm16 {
            hound::SampleFormat::Int
        } else {
            hound::SampleFormat::Float
        },
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(audio_error)?;
    for &sample in &segment.samples {
        if pcm16 {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(value).map_err(audio_error)?;
        } else {
            writer.write_sample(sample).map_err(audio_error)?;
        }
    }
    writer.finalize().map_err(audio_error)?;

    Ok(())
}
