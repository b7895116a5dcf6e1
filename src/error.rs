use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the context store and key path accessor
#[derive(Debug, Error)]
pub enum GrrError {
    /// Settings file missing or without any context
    #[error("No configuration found at {}. Run 'grrctl config import' or 'grrctl config create-context <name>' first.", .path.display())]
    NoConfig { path: PathBuf },

    /// Named context does not exist
    #[error("Context '{name}' not found. Available contexts: {}", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },

    /// Key path does not address any node in the current context
    #[error("Path '{path}' not found in context '{context}'")]
    PathNotFound { path: String, context: String },

    /// Context name already taken
    #[error("Context '{0}' already exists")]
    AlreadyExists(String),

    /// The document on disk violates an invariant
    #[error("Invalid configuration state: {0}")]
    InvalidState(String),

    /// Rejected context name
    #[error("Invalid context name '{0}': must not be empty")]
    InvalidName(String),

    /// Malformed key path, or a path that crosses a scalar
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Output format other than yaml/json
    #[error("Unsupported output format '{0}'. Supported formats: yaml, json")]
    UnsupportedFormat(String),

    /// No current context to operate on
    #[error("No current context set. Use 'grrctl config use-context <name>' to select one.")]
    NoCurrentContext,

    /// Failed to read or parse the settings file
    #[error("Failed to read configuration {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// Failed to persist the settings file
    #[error("Failed to write configuration {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Nothing to import from the environment
    #[error("No recognized environment variables found. Set at least one of: {}", .vars.join(", "))]
    Import { vars: Vec<String> },

    /// Rendering a value failed
    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for GrrError {
    fn from(err: serde_json::Error) -> Self {
        GrrError::Serialize(err.to_string())
    }
}

impl From<serde_yml::Error> for GrrError {
    fn from(err: serde_yml::Error) -> Self {
        GrrError::Serialize(err.to_string())
    }
}

/// Result type alias for context and settings operations
pub type Result<T> = std::result::Result<T, GrrError>;
