//! Pubtrail CLI - harvest journal article metadata and derive publication timelines.

use clap::Parser;
use pubtrail_cli::cli::{ConfigAction, ConfigArgs};
use pubtrail_cli::commands;
use pubtrail_cli::{Cli, Command, Config, Formatter, OutputPaths};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> pubtrail_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;

    // `config init` must work even when the existing file is broken
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    let output_dir = cli
        .output_dir
        .unwrap_or_else(|| config.settings.output_dir.clone());
    let paths = OutputPaths::new(output_dir);

    match cli.command {
        Command::Discover(args) => {
            commands::execute_discover(args, &config, &paths, &formatter).await?;
        }
        Command::Harvest(args) => {
            commands::execute_harvest(args, &config, &paths, &formatter).await?;
        }
        Command::Features(args) => {
            commands::execute_features(args, &config, &paths, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
