//! Seed a context from environment variables

use log::{debug, info};
use serde_yml::Value;

use crate::config::{defaults, env as env_config};
use crate::error::{GrrError, Result};

use super::keypath::{self, KeyPath};
use super::models::empty_settings;
use super::store::{current_name, ContextStore};

/// What `import` wrote and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub context: String,
    pub keys: Vec<&'static str>,
    pub created: bool,
}

impl ContextStore {
    /// Import settings from the process environment
    pub fn import(&self) -> Result<ImportSummary> {
        self.import_with(|var| std::env::var(var).ok())
    }

    /// Import settings using `lookup` to read variables.
    ///
    /// Values land in the current context, or in a new `default` context when
    /// the document has none. Keys backed by a variable are overwritten; all
    /// other keys are kept. Nothing is written when no variable is set.
    pub fn import_with<F>(&self, lookup: F) -> Result<ImportSummary>
    where
        F: Fn(&str) -> Option<String>,
    {
        let found: Vec<(&'static str, String)> = env_config::IMPORT_VARS
            .iter()
            .filter_map(|&(var, key)| {
                let value = lookup(var).filter(|v| !v.is_empty())?;
                debug!("Found {} for settings key {}", var, key);
                Some((key, value))
            })
            .collect();

        if found.is_empty() {
            return Err(GrrError::Import {
                vars: env_config::IMPORT_VARS
                    .iter()
                    .map(|(var, _)| var.to_string())
                    .collect(),
            });
        }

        let mut document = self.load_document()?;
        let created = document.contexts.is_empty();
        let target = if created {
            document
                .contexts
                .insert(defaults::CONTEXT_NAME.to_string(), empty_settings());
            document.current_context = Some(defaults::CONTEXT_NAME.to_string());
            defaults::CONTEXT_NAME.to_string()
        } else {
            current_name(&document)?.to_string()
        };

        let settings = document
            .contexts
            .get_mut(&target)
            .ok_or_else(|| GrrError::InvalidState(format!("context '{}' vanished", target)))?;
        for (key, value) in &found {
            let path = KeyPath::parse(key)?;
            keypath::assign(settings, &path, Value::String(value.clone()))?;
        }

        self.save_document(&document)?;
        info!(
            "Imported {} setting(s) into context '{}'",
            found.len(),
            target
        );

        Ok(ImportSummary {
            context: target,
            keys: found.into_iter().map(|(key, _)| key).collect(),
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::file::ConfigFile;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::new(ConfigFile::new(dir.path().join("settings.yaml")))
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_import_creates_default_context() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let summary = store
            .import_with(env(&[
                ("GRAFANA_URL", "http://localhost:3000"),
                ("GRAFANA_TOKEN", "glsa_abc"),
            ]))
            .unwrap();

        assert_eq!(summary.context, "default");
        assert!(summary.created);
        assert_eq!(summary.keys, vec!["grafana.url", "grafana.token"]);

        let ctx = store.current_context().unwrap();
        assert_eq!(ctx.name, "default");
        assert_eq!(
            ctx.get_str("grafana.url"),
            Some("http://localhost:3000".to_string())
        );
        assert_eq!(ctx.get_str("grafana.token"), Some("glsa_abc".to_string()));
    }

    #[test]
    fn test_import_without_vars_fails_and_leaves_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let original = "currentContext: prod\ncontexts:\n  prod:\n    grafana:\n      url: http://keep\n";
        fs::write(store.file().path(), original).unwrap();

        let err = store.import_with(env(&[("UNRELATED", "x")])).unwrap_err();
        assert!(matches!(err, GrrError::Import { .. }));
        assert_eq!(fs::read_to_string(store.file().path()).unwrap(), original);
    }

    #[test]
    fn test_import_without_vars_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(store.import_with(env(&[])).is_err());
        assert!(!store.file().exists());
    }

    #[test]
    fn test_import_ignores_empty_values() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let err = store
            .import_with(env(&[("GRAFANA_URL", ""), ("MIMIR_ADDRESS", "")]))
            .unwrap_err();
        assert!(matches!(err, GrrError::Import { .. }));
    }

    #[test]
    fn test_import_merges_into_current_context() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();
        store.create_context("dev").unwrap();
        store.use_context("dev").unwrap();
        store.set("grafana.url", "http://old").unwrap();
        store.set("grafana.folder", "ops").unwrap();

        let summary = store
            .import_with(env(&[
                ("GRAFANA_URL", "http://new"),
                ("MIMIR_ADDRESS", "http://mimir:9009"),
            ]))
            .unwrap();
        assert_eq!(summary.context, "dev");
        assert!(!summary.created);

        let ctx = store.current_context().unwrap();
        assert_eq!(ctx.get_str("grafana.url"), Some("http://new".to_string()));
        assert_eq!(ctx.get_str("grafana.folder"), Some("ops".to_string()));
        assert_eq!(
            ctx.get_str("mimir.address"),
            Some("http://mimir:9009".to_string())
        );

        store.use_context("prod").unwrap();
        assert_eq!(store.get("", "json").unwrap(), "{}");
    }

    #[test]
    fn test_import_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let vars = [("GRAFANA_SM_TOKEN", "sm-token"), ("MIMIR_TENANT_ID", "42")];

        store.import_with(env(&vars)).unwrap();
        let first = fs::read_to_string(store.file().path()).unwrap();
        store.import_with(env(&vars)).unwrap();
        let second = fs::read_to_string(store.file().path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.get_contexts().unwrap(), vec!["default"]);
    }

    #[test]
    fn test_import_with_dangling_pointer_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(
            store.file().path(),
            "currentContext: gone\ncontexts:\n  prod: {}\n",
        )
        .unwrap();

        let err = store
            .import_with(env(&[("GRAFANA_URL", "http://x")]))
            .unwrap_err();
        assert!(matches!(err, GrrError::InvalidState(_)));
    }
}
