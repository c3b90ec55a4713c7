//! Rolecheck CLI library.
//!
//! Argument parsing, configuration resolution, command execution and output
//! formatting for the `rolecheck` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command, RunArgs};
pub use config::{Config, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
