//! voxsplit CLI library
//!
//! This library provides the command-line interface for the voxsplit
//! text chunking and audio stitching toolkit.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
