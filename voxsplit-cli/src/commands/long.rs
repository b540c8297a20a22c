//! Long command implementation

use anyhow::Result;
use clap::Args;
use voxsplit_core::{ChunkStrategy, Chunker};

use super::RunContext;
use crate::error::CliError;
use crate::input::{InputArgs, InputText};
use crate::output::OutputArgs;
use crate::progress::ProgressReporter;

/// Arguments for the long command
#[derive(Debug, Args)]
pub struct LongArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Chunking strategy (sentence, paragraph, word, fixed; default: from config)
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<String>,

    /// Maximum chunk length in characters (default: from config)
    #[arg(short = 'n', long, value_name = "CHARS")]
    pub max_chunk_size: Option<usize>,

    /// Skip the long-text input checks
    #[arg(long)]
    pub skip_validation: bool,
}

impl LongArgs {
    /// Execute the long command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let chunker = context.chunker()?;
        let inputs = self.input.read()?;

        if !self.skip_validation {
            for input in &inputs {
                check_input(&chunker, input)?;
            }
        }

        let strategy = self.strategy.as_deref().map(ChunkStrategy::parse_lenient);
        let mut formatter = self.output.formatter(&context.config.output)?;
        let mut progress = ProgressReporter::new(context.quiet);
        progress.init(inputs.len() as u64, "files");

        for input in &inputs {
            let records =
                chunker.split_for_long_generation(&input.text, self.max_chunk_size, strategy);
            let text_length = input.text.trim().chars().count();
            log::info!(
                "{}: {} chunks, estimated {} s",
                input.name,
                records.len(),
                chunker.estimate_processing_time(text_length, self.max_chunk_size)
            );

            for record in &records {
                formatter.format_chunk(&input.name, record)?;
            }
            progress.item_completed(&input.name);
        }

        progress.finish();
        formatter.finish()
    }
}

fn check_input(chunker: &Chunker, input: &InputText) -> Result<()> {
    let result = chunker.validate_long_text(&input.text);
    if result.is_valid {
        return Ok(());
    }
    Err(CliError::ValidationFailed(format!("{}: {}", input.name, result.message)).into())
}
