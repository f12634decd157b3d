//! farmctl - Command-line interface for the farm-management backend
//!
//! Usage:
//!   farmctl farmer add --first-name <f> [--middle-name <m>] --last-name <l>
//!   farmctl farmer list
//!   farmctl crop add --farmer-id <id> --name <name>
//!   farmctl crop list --farmer-id <id>
//!   farmctl crop get <id>
//!   farmctl crop delete <id>

use std::process::ExitCode;

use clap::Parser;
use farm_app::{App, AppConfig, Cli, Commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_data_file(cli.data_file.clone()),
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging; RUST_LOG wins over the config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(data_file = %config.data_file.display(), "config_loaded");

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let app = App::open(config)?;
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Commands::Farmer(cmd) => cmd.run(&app, &mut stdout, cli.json),
        Commands::Crop(cmd) => cmd.run(&app, &mut stdout, cli.json),
    }
}
