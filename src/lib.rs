//! grrctl - Configuration contexts and provider health for the Grafana stack
//!
//! Keeps named contexts (kubeconfig-style) in a single YAML settings file and
//! checks whether the providers configured in the current context are reachable.
//!
//! # Features
//!
//! - Import a context from environment variables
//! - Create, list and switch contexts
//! - Get, set and unset settings by dotted key path (yaml or json output)
//! - Concurrent provider status checks (Grafana, Mimir, Synthetic Monitoring)
//!
//! # Example
//!
//! ```bash
//! # Seed the default context from GRAFANA_URL, GRAFANA_TOKEN, ...
//! grrctl config import
//!
//! # Add and select another context
//! grrctl config create-context staging
//! grrctl config use-context staging
//! grrctl config set grafana.url https://grafana.staging.example.com
//!
//! # Inspect settings
//! grrctl config get grafana -o json
//!
//! # Check every provider
//! grrctl check
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod provider;
pub mod ui;

pub use cli::{CheckArgs, Cli, Command, ConfigAction};
pub use context::{
    run_config_command, ConfigDocument, ConfigFile, Context, ContextStore, ImportSummary, KeyPath,
    OutputFormat,
};
pub use error::{GrrError, Result};
pub use provider::{run_check_command, Provider, ProviderReport, ProviderStatus, Registry};
