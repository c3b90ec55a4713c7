//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default folder of `.txt` documents.
pub const DEFAULT_INPUT: &str = "sample_people";

/// Default report path.
pub const DEFAULT_OUTPUT: &str = "results.json";

/// Rolecheck - classify biographical documents with an LLM ("is this person a baker?").
#[derive(Debug, Parser)]
#[command(name = "rolecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for per-document progress
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Pretty JSON per document (default)
    Json,
    /// One summary table at the end
    Table,
    /// Final totals only
    Quiet,
}

/// CLI commands. Without a subcommand the batch run is executed.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the batch classification (default)
    Run,

    /// Print the policy text sent to the model
    Policy,

    /// Print the effective configuration as TOML
    Config,
}

/// Arguments for the batch run.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Folder containing .txt documents
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long, env = "OPENAI_MODEL", global = true)]
    pub model: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL", global = true)]
    pub api_base: Option<String>,

    /// API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Pause between a failed attempt and the retry (milliseconds)
    #[arg(long, global = true)]
    pub retry_delay_ms: Option<u64>,
}
