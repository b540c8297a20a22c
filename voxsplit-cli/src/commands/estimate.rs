//! Estimate command implementation

use anyhow::Result;
use clap::Args;
use voxsplit_core::estimate_processing_time;

use super::RunContext;
use crate::input::InputArgs;

/// Arguments for the estimate command
#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Chunk size used for the estimate (default: from config)
    #[arg(short = 'n', long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Synthesis throughput in characters per second (default: from config)
    #[arg(short, long, value_name = "CHARS_PER_SEC")]
    pub rate: Option<f64>,
}

impl EstimateArgs {
    /// Execute the estimate command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let config = &context.config.chunker;
        let rate = self.rate.unwrap_or(config.avg_chars_per_second);

        for input in self.input.read()? {
            let text_length = input.text.trim().chars().count();
            let seconds = estimate_processing_time(text_length, rate, self.chunk_size, config);
            println!(
                "{}: {} characters, estimated {} seconds",
                input.name, text_length, seconds
            );
        }

        Ok(())
    }
}
