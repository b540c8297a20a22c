//! Validate command implementation

use anyhow::Result;
use clap::Args;

use super::RunContext;
use crate::error::CliError;
use crate::input::InputArgs;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    ///
    /// Every input is checked and reported; the command fails if any input
    /// is rejected.
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let chunker = context.chunker()?;
        let mut rejected = 0;

        for input in self.input.read()? {
            let result = chunker.validate_long_text(&input.text);
            if result.is_valid {
                println!(
                    "✓ {}: valid ({} characters)",
                    input.name,
                    input.text.trim().chars().count()
                );
            } else {
                println!("✗ {}: {}", input.name, result.message);
                rejected += 1;
            }
        }

        if rejected > 0 {
            return Err(CliError::ValidationFailed(format!("{rejected} input(s) rejected")).into());
        }
        Ok(())
    }
}
