//! Settings document data models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yml::{Mapping, Value};

use super::keypath::{self, KeyPath};

/// Top-level settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigDocument {
    /// Name of the currently active context
    #[serde(
        rename = "currentContext",
        alias = "current-context",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_context: Option<String>,
    /// Context name to settings tree, in insertion order
    #[serde(default)]
    pub contexts: IndexMap<String, Value>,
}

impl ConfigDocument {
    /// Context names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.contexts.keys().cloned().collect()
    }

    /// The current-context pointer, treating an empty string as unset
    pub fn current_name(&self) -> Option<&str> {
        self.current_context.as_deref().filter(|name| !name.is_empty())
    }
}

/// A named context with its settings tree
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub name: String,
    pub settings: Value,
}

impl Context {
    pub fn new(name: impl Into<String>, settings: Value) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    /// Settings value at `key` as a string, if it is a non-empty scalar
    pub fn get_str(&self, key: &str) -> Option<String> {
        let path = KeyPath::parse(key).ok()?;
        let value = match keypath::resolve(&self.settings, &path)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!value.is_empty()).then_some(value)
    }
}

/// Settings tree for a freshly created context
pub fn empty_settings() -> Value {
    Value::Mapping(Mapping::new())
}
