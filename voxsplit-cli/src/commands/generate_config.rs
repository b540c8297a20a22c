//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use voxsplit_core::config::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   voxsplit --config {} chunk -i input.txt", self.output.display());

        Ok(())
    }
}

/// Commented configuration template holding the default values
pub fn generate_template() -> String {
    format!(
        r#"# voxsplit configuration

[chunker]
# Maximum chunk length for regular requests (characters)
default_chunk_length = {default_chunk_length}

# Default chunk size for long-text jobs (characters)
long_text_chunk_size = {long_text_chunk_size}

# Strategy for long text: "sentence", "paragraph", "word" or "fixed"
long_text_strategy = "sentence"

# Hard ceiling per synthesis request; long-text chunks stay
# {margin} characters below it
max_total_length = {max_total_length}

# Accepted long-text input length (characters, after trimming)
long_text_min_length = {long_text_min_length}
long_text_max_length = {long_text_max_length}

# Synthesis throughput used for time estimates
avg_chars_per_second = {avg_chars_per_second:.1}

[output]
# "text", "json" or "markdown"
default_format = "text"
pretty_json = true
"#,
        default_chunk_length = defaults::DEFAULT_CHUNK_LENGTH,
        long_text_chunk_size = defaults::LONG_TEXT_CHUNK_SIZE,
        margin = defaults::MAX_TOTAL_LENGTH_MARGIN,
        max_total_length = defaults::MAX_TOTAL_LENGTH,
        long_text_min_length = defaults::LONG_TEXT_MIN_LENGTH,
        long_text_max_length = defaults::LONG_TEXT_MAX_LENGTH,
        avg_chars_per_second = defaults::AVG_CHARS_PER_SECOND,
    )
}
