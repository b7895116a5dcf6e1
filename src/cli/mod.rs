//! CLI argument parsing

mod check;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{defaults, file as file_config};

pub use check::CheckArgs;
pub use config::{ConfigAction, ContextNameArgs, GetArgs, SetArgs, UnsetArgs};

/// grrctl CLI
#[derive(Parser, Debug)]
#[command(name = "grrctl")]
#[command(version)]
#[command(
    about = "Manage Grafana-stack configuration contexts and check provider health",
    long_about = None
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = file_config::ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress progress output
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show, select and edit configuration contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check the configuration file and the status of every provider
    Check(CheckArgs),
}
