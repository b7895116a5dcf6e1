//! grrctl - Main entry point

use clap::Parser;
use log::debug;

use grrctl::{run_check_command, run_config_command, Cli, Command, ConfigFile, ContextStore};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    debug!("Starting grrctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ContextStore::new(ConfigFile::locate(cli.config.clone()));
    debug!("Settings file: {}", store.file().path().display());

    match &cli.command {
        Command::Config { action } => run_config_command(action, &store),
        Command::Check(args) => run_check_command(&store, args, cli.quiet).await,
    }
}
