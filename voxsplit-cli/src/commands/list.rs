//! List command implementation

use anyhow::Result;
use std::io::{self, Write};
use voxsplit_core::{ChunkStrategy, Quality};

use super::ListCommands;
use crate::output::OutputFormat;

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(subcommand, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the requested listing to `out`
pub fn write_listing<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Strategies => {
            writeln!(out, "Available strategies:")?;
            for strategy in ChunkStrategy::ALL {
                writeln!(out, "  {:<10} {}", strategy.as_str(), describe(strategy))?;
            }
        }
        ListCommands::Qualities => {
            writeln!(out, "Available quality presets:")?;
            for quality in Quality::ALL {
                writeln!(
                    out,
                    "  {:<10} {} chars, {} strategy",
                    quality.as_str(),
                    quality.chunk_size(),
                    quality.strategy()
                )?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(out, "  {:<10} {}", format.as_str(), format.description())?;
            }
        }
    }
    Ok(())
}

fn describe(strategy: ChunkStrategy) -> &'static str {
    match strategy {
        ChunkStrategy::Sentence => "Paragraph, sentence, clause, then word boundaries (default)",
        ChunkStrategy::Paragraph => "Merge whole paragraphs, falling back to sentences",
        ChunkStrategy::Word => "Pack whole words",
        ChunkStrategy::Fixed => "Cut every N characters",
    }
}
