//! Config management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

use crate::config::defaults;

/// Config subcommands for managing contexts and their settings
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the path to the configuration file
    Path,

    /// Initialise the configuration file from environment variables
    Import,

    /// Display the current context
    #[command(name = "current-context")]
    CurrentContext,

    /// Select a context
    #[command(name = "use-context")]
    UseContext(ContextNameArgs),

    /// List configured contexts
    #[command(name = "get-contexts")]
    GetContexts,

    /// Get the whole configuration of the current context or a single value
    Get(GetArgs),

    /// Set a configuration value for the current context
    Set(SetArgs),

    /// Unset a configuration value for the current context
    Unset(UnsetArgs),

    /// Create a configuration context
    #[command(name = "create-context")]
    CreateContext(ContextNameArgs),
}

/// Arguments for subcommands taking a context name
#[derive(Parser, Debug)]
pub struct ContextNameArgs {
    /// Context name
    pub name: String,
}

/// Arguments for 'config get' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        grrctl config get\n  \
        grrctl config get grafana.url\n  \
        grrctl config get grafana -o json")]
pub struct GetArgs {
    /// Dotted key path (e.g. grafana.url); omit for the whole context
    pub path: Option<String>,

    /// Output format (yaml, json)
    #[arg(short, long, default_value = defaults::OUTPUT_FORMAT)]
    pub output: String,
}

/// Arguments for 'config set' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        grrctl config set grafana.url https://grafana.example.com\n  \
        grrctl config set mimir.tenant-id 12345")]
pub struct SetArgs {
    /// Dotted key path
    pub key: String,
    /// Value (stored as a string)
    pub value: String,
}

/// Arguments for 'config unset' subcommand
#[derive(Parser, Debug)]
pub struct UnsetArgs {
    /// Dotted key path
    pub key: String,
}
