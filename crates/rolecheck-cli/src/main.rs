//! Rolecheck CLI - classify a folder of biographical documents with an LLM.

use clap::Parser;
use rolecheck_cli::commands;
use rolecheck_cli::{Cli, CliFormat, Command, Config, Formatter, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; variables may come from the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let formatter = Formatter::new(cli.format.unwrap_or(CliFormat::Json), !cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> rolecheck_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Policy) => commands::execute_policy(),
        Some(Command::Config) => commands::execute_config(&config),
        None | Some(Command::Run) => {
            let settings = Settings::resolve(&cli.run, config)?;
            commands::execute_run(settings, formatter).await
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    // RUST_LOG wins over the flags when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
