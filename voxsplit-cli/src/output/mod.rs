//! Output formatting module

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use voxsplit_core::LongTextChunk;

use crate::config::OutputConfig;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single chunk read from `source`
    fn format_chunk(&mut self, source: &str, chunk: &LongTextChunk) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Lowercase name as accepted by `--format`
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one chunk per line",
            OutputFormat::Json => "JSON array of chunk records with previews and lengths",
            OutputFormat::Markdown => "Markdown sections, one per chunk",
        }
    }

    /// Build a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Output destination flags shared by chunking commands
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl OutputArgs {
    /// Open the destination and wrap it in the selected formatter
    pub fn formatter(&self, config: &OutputConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.format.unwrap_or(config.default_format);
        log::debug!("Writing {} output", format.as_str());

        match &self.output {
            Some(path) => Ok(format.formatter(create_file(path)?, config.pretty_json)),
            None => Ok(format.formatter(io::stdout(), config.pretty_json)),
        }
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}
