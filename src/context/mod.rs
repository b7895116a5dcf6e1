//! Context management module
//!
//! Named contexts bundle the settings used to reach a Grafana stack
//! (Grafana, Mimir, Synthetic Monitoring). One context is current at a time;
//! `get`/`set`/`unset` address its settings by dotted key path.

mod commands;
mod file;
mod import;
pub mod keypath;
mod models;
mod settings;
mod store;

pub use commands::run_config_command;
pub use file::ConfigFile;
pub use import::ImportSummary;
pub use keypath::KeyPath;
pub use models::{ConfigDocument, Context};
pub use settings::{render, OutputFormat};
pub use store::ContextStore;
