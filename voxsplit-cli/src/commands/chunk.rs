//! Chunk command implementation

use anyhow::Result;
use clap::Args;
use voxsplit_core::{build_long_text_chunks, StreamingRequest};

use super::RunContext;
use crate::input::InputArgs;
use crate::output::OutputArgs;
use crate::progress::ProgressReporter;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Splitting mode
    #[arg(short, long, value_enum, default_value = "streaming")]
    pub mode: ChunkMode,

    /// Streaming strategy (sentence, paragraph, word, fixed)
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<String>,

    /// Streaming quality preset (fast, balanced, high)
    #[arg(long, value_name = "PRESET")]
    pub quality: Option<String>,

    /// Maximum chunk length in characters
    #[arg(short = 'n', long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,
}

/// How the text is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChunkMode {
    /// Streaming synthesis: strategy and size resolved from presets
    Streaming,
    /// Regular synthesis: sentence grouping up to the default chunk length
    Regular,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let chunker = context.chunker()?;
        let inputs = self.input.read()?;
        let mut formatter = self.output.formatter(&context.config.output)?;

        if self.mode == ChunkMode::Regular && (self.strategy.is_some() || self.quality.is_some()) {
            log::warn!("--strategy and --quality only apply to streaming mode, ignoring");
        }

        let request = StreamingRequest::from_names(
            self.chunk_size,
            self.strategy.as_deref(),
            self.quality.as_deref(),
        );

        let mut progress = ProgressReporter::new(context.quiet);
        progress.init(inputs.len() as u64, "files");

        for input in &inputs {
            let chunks = match self.mode {
                ChunkMode::Streaming => {
                    let (settings, chunks) = chunker.split_for_streaming(&input.text, &request);
                    log::info!(
                        "{}: {} chunks ({} strategy, {} chars)",
                        input.name,
                        chunks.len(),
                        settings.strategy,
                        settings.chunk_size
                    );
                    chunks
                }
                ChunkMode::Regular => {
                    let chunks = chunker.split_into_chunks(&input.text, self.chunk_size);
                    log::info!("{}: {} chunks", input.name, chunks.len());
                    chunks
                }
            };

            for chunk in build_long_text_chunks(chunks) {
                formatter.format_chunk(&input.name, &chunk)?;
            }
            progress.item_completed(&input.name);
        }

        progress.finish();
        formatter.finish()
    }
}
