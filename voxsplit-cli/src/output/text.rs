//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use voxsplit_core::LongTextChunk;

/// Plain text formatter - outputs one chunk per line
///
/// Line breaks inside a chunk are written as a literal `\n` so every output
/// line holds exactly one chunk.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_chunk(&mut self, _source: &str, chunk: &LongTextChunk) -> Result<()> {
        writeln!(self.writer, "{}", escape_newlines(&chunk.text))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_newlines(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}
