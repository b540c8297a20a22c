//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use voxsplit_core::Chunker;

use crate::config::CliConfig;
use crate::error::CliError;

pub mod chunk;
pub mod estimate;
pub mod generate_config;
pub mod list;
pub mod long;
pub mod stitch;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into chunks for regular or streaming synthesis
    Chunk(chunk::ChunkArgs),

    /// Split long text into indexed chunk records
    Long(long::LongArgs),

    /// Check whether text is acceptable for long-text processing
    Validate(validate::ValidateArgs),

    /// Estimate processing time for long-text synthesis
    Estimate(estimate::EstimateArgs),

    /// Join WAV files with a short silence between them
    Stitch(stitch::StitchArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List chunking strategies
    Strategies,

    /// List streaming quality presets
    Qualities,

    /// List available output formats
    Formats,
}

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Loaded configuration
    pub config: CliConfig,
    /// Suppress progress output
    pub quiet: bool,
}

impl RunContext {
    /// Build a chunker from the loaded configuration
    pub fn chunker(&self) -> Result<Chunker> {
        Chunker::with_config(self.config.chunker.clone())
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(context),
            Commands::Long(args) => args.execute(context),
            Commands::Validate(args) => args.execute(context),
            Commands::Estimate(args) => args.execute(context),
            Commands::Stitch(args) => args.execute(context),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}
