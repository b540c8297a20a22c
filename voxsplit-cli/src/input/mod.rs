//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use clap::Args;

/// Name reported for text read from standard input
pub const STDIN_NAME: &str = "-";

/// Input selection flags shared by text commands
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,
}

/// One input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    /// File path, or `-` for stdin
    pub name: String,
    /// Full UTF-8 contents
    pub text: String,
}

impl InputArgs {
    /// Whether input comes from standard input
    pub fn is_stdin(&self) -> bool {
        self.input.is_empty() || self.input.iter().all(|pattern| pattern == STDIN_NAME)
    }

    /// Read every selected input in order
    pub fn read(&self) -> Result<Vec<InputText>> {
        if self.is_stdin() {
            log::debug!("Reading text from stdin");
            return Ok(vec![InputText {
                name: STDIN_NAME.to_string(),
                text: FileReader::read_stdin()?,
            }]);
        }

        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| {
                log::debug!("Reading {}", path.display());
                Ok(InputText {
                    text: FileReader::read_text(&path)?,
                    name: path.display().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_stdin_detection() {
        assert!(InputArgs::default().is_stdin());
        assert!(InputArgs {
            input: vec!["-".to_string()]
        }
        .is_stdin());
        assert!(!InputArgs {
            input: vec!["story.txt".to_string()]
        }
        .is_stdin());
    }

    #[test]
    fn test_files_read_in_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("02.txt"), "second").unwrap();
        fs::write(temp_dir.path().join("01.txt"), "first").unwrap();

        let args = InputArgs {
            input: vec![temp_dir.path().join("*.txt").display().to_string()],
        };
        let texts: Vec<String> = args.read().unwrap().into_iter().map(|i| i.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}
