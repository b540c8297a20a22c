//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use voxsplit_core::LongTextChunk;

/// Markdown formatter - outputs one section per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    current_source: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            current_source: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_chunk(&mut self, source: &str, chunk: &LongTextChunk) -> Result<()> {
        if self.current_source.as_deref() != Some(source) {
            writeln!(self.writer, "# {source}")?;
            writeln!(self.writer)?;
            self.current_source = Some(source.to_string());
        }

        self.chunk_count += 1;
        writeln!(
            self.writer,
            "## Chunk {} ({} characters)",
            chunk.index + 1,
            chunk.character_count
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", chunk.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
