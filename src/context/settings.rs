//! Get, set and unset settings of the current context

use std::str::FromStr;

use log::debug;
use serde_yml::Value;

use crate::error::{GrrError, Result};

use super::keypath::{self, KeyPath};
use super::models::{empty_settings, ConfigDocument};
use super::store::{current_name, ContextStore};

/// Rendering formats for `config get`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = GrrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(GrrError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a settings node.
///
/// YAML is returned exactly as emitted, since block scalars encode trailing
/// line breaks in their final lines. JSON has no trailing newline.
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yml::to_string(value)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

impl ContextStore {
    /// Render the node at `path` of the current context (whole context when empty)
    pub fn get(&self, path: &str, format: &str) -> Result<String> {
        let format: OutputFormat = format.parse()?;
        let path = KeyPath::parse(path)?;

        let document = self.load_document()?;
        let (name, settings) = current_settings(&document)?;

        let node = match (keypath::resolve(settings, &path), settings.is_null()) {
            (Some(node), false) => node,
            (_, true) if path.is_root() => return render(&empty_settings(), format),
            _ => {
                return Err(GrrError::PathNotFound {
                    path: path.to_string(),
                    context: name.to_string(),
                })
            }
        };
        render(node, format)
    }

    /// Store `value` as a string at `key` in the current context
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = KeyPath::parse(key)?;
        let mut document = self.load_document()?;
        let (name, settings) = current_settings_mut(&mut document)?;

        keypath::assign(settings, &path, Value::String(value.to_string()))?;
        debug!("Set '{}' in context '{}'", path, name);

        self.save_document(&document)
    }

    /// Remove `key` from the current context
    pub fn unset(&self, key: &str) -> Result<()> {
        let path = KeyPath::parse(key)?;
        if path.is_root() {
            return Err(GrrError::InvalidPath {
                path: key.to_string(),
                reason: "a key is required".to_string(),
            });
        }

        let mut document = self.load_document()?;
        let (name, settings) = current_settings_mut(&mut document)?;

        if keypath::remove(settings, &path).is_none() {
            return Err(GrrError::PathNotFound {
                path: path.to_string(),
                context: name,
            });
        }
        debug!("Unset '{}' in context '{}'", path, name);

        self.save_document(&document)
    }
}

fn current_settings(document: &ConfigDocument) -> Result<(&str, &Value)> {
    if document.contexts.is_empty() {
        return Err(GrrError::NoCurrentContext);
    }
    let name = current_name(document).map_err(|e| match document.current_name() {
        None => GrrError::NoCurrentContext,
        Some(_) => e,
    })?;
    let settings = document
        .contexts
        .get(name)
        .ok_or(GrrError::NoCurrentContext)?;
    Ok((name, settings))
}

fn current_settings_mut(document: &mut ConfigDocument) -> Result<(String, &mut Value)> {
    let name = current_settings(document)?.0.to_string();
    let settings = document
        .contexts
        .get_mut(&name)
        .ok_or(GrrError::NoCurrentContext)?;
    Ok((name, settings))
}
