//! voxsplit command-line entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use voxsplit_cli::commands::{Commands, RunContext};
use voxsplit_cli::config::CliConfig;

/// Split text into speech-synthesis sized chunks and join the audio back
#[derive(Debug, Parser)]
#[command(name = "voxsplit", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "VOXSPLIT_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);

    let context = RunContext {
        config: CliConfig::load(cli.config.as_deref())?,
        quiet: cli.quiet,
    };
    cli.command.execute(&context)
}

/// Map the `-v` count to a log level
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(verbose)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "trace");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["voxsplit", "list", "formats", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }
}
