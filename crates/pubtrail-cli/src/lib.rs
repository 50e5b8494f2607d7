//! Pubtrail CLI library.
//!
//! This library provides the core functionality for the `pubtrail` command-line interface,
//! including configuration management, command execution, flat-file export and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use export::OutputPaths;
pub use output::Formatter;
