//! Context CRUD on top of the settings file

use log::debug;

use crate::error::{GrrError, Result};

use super::file::ConfigFile;
use super::models::{empty_settings, ConfigDocument, Context};

/// Named contexts plus the current-context pointer, persisted through a `ConfigFile`
#[derive(Debug, Clone)]
pub struct ContextStore {
    file: ConfigFile,
}

impl ContextStore {
    pub fn new(file: ConfigFile) -> Self {
        Self { file }
    }

    /// The settings file backing this store
    pub fn file(&self) -> &ConfigFile {
        &self.file
    }

    /// Load the document, treating a missing file as empty
    pub(crate) fn load_document(&self) -> Result<ConfigDocument> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    pub(crate) fn save_document(&self, document: &ConfigDocument) -> Result<()> {
        self.file.save(document)
    }

    /// Resolve the current context
    pub fn current_context(&self) -> Result<Context> {
        let document = self.file.load()?.ok_or_else(|| self.no_config())?;
        if document.contexts.is_empty() {
            return Err(self.no_config());
        }

        let name = current_name(&document)?;
        let settings = document
            .contexts
            .get(name)
            .filter(|settings| !settings.is_null())
            .cloned()
            .unwrap_or_else(empty_settings);
        debug!("Resolved current context '{}'", name);
        Ok(Context::new(name, settings))
    }

    /// Switch the current context
    pub fn use_context(&self, name: &str) -> Result<()> {
        let mut document = self.load_document()?;

        if !document.contexts.contains_key(name) {
            return Err(GrrError::NotFound {
                name: name.to_string(),
                available: document.names(),
            });
        }

        document.current_context = Some(name.to_string());
        self.save_document(&document)?;
        debug!("Switched current context to '{}'", name);
        Ok(())
    }

    /// Context names in the order they were created
    pub fn get_contexts(&self) -> Result<Vec<String>> {
        Ok(self.load_document()?.names())
    }

    /// Add an empty context. The first context of an empty document becomes current.
    pub fn create_context(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(GrrError::InvalidName(name.to_string()));
        }

        let mut document = self.load_document()?;
        if document.contexts.contains_key(name) {
            return Err(GrrError::AlreadyExists(name.to_string()));
        }

        document.contexts.insert(name.to_string(), empty_settings());
        if document.contexts.len() == 1 {
            document.current_context = Some(name.to_string());
        }

        self.save_document(&document)?;
        debug!("Created context '{}'", name);
        Ok(())
    }

    pub(crate) fn no_config(&self) -> GrrError {
        GrrError::NoConfig {
            path: self.file.path().to_path_buf(),
        }
    }
}

/// Name of the current context, which must exist in the document
pub(crate) fn current_name(document: &ConfigDocument) -> Result<&str> {
    let name = document.current_name().ok_or_else(|| {
        GrrError::InvalidState(format!(
            "no current context is set but {} context(s) exist. Use 'grrctl config use-context <name>' to select one.",
            document.contexts.len()
        ))
    })?;

    if !document.contexts.contains_key(name) {
        return Err(GrrError::InvalidState(format!(
            "current context '{}' does not exist. Available: {}",
            name,
            document.names().join(", ")
        )));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::new(ConfigFile::new(dir.path().join("settings.yaml")))
    }

    #[test]
    fn test_current_context_without_file() {
        let dir = TempDir::new().unwrap();
        let err = test_store(&dir).current_context().unwrap_err();
        assert!(matches!(err, GrrError::NoConfig { .. }));
    }

    #[test]
    fn test_current_context_with_no_contexts() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.file().path(), "contexts: {}\n").unwrap();
        let err = store.current_context().unwrap_err();
        assert!(matches!(err, GrrError::NoConfig { .. }));
    }

    #[test]
    fn test_current_context_dangling_pointer() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(
            store.file().path(),
            "currentContext: gone\ncontexts:\n  prod: {}\n",
        )
        .unwrap();
        let err = store.current_context().unwrap_err();
        assert!(matches!(err, GrrError::InvalidState(_)));
        assert!(err.to_string().contains("'gone'"));
    }

    #[test]
    fn test_current_context_missing_pointer() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.file().path(), "contexts:\n  prod: {}\n").unwrap();
        assert!(matches!(
            store.current_context().unwrap_err(),
            GrrError::InvalidState(_)
        ));
    }

    #[test]
    fn test_create_first_context_becomes_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();

        let ctx = store.current_context().unwrap();
        assert_eq!(ctx.name, "prod");
        assert_eq!(ctx.settings, empty_settings());
    }

    #[test]
    fn test_create_second_context_keeps_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();
        store.create_context("dev").unwrap();

        assert_eq!(store.current_context().unwrap().name, "prod");
    }

    #[test]
    fn test_create_context_listed_exactly_once() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        for name in ["zeta", "alpha", "my context", "prod.eu"] {
            store.create_context(name).unwrap();
            let names = store.get_contexts().unwrap();
            assert_eq!(names.iter().filter(|n| n.as_str() == name).count(), 1);
        }
    }

    #[test]
    fn test_create_duplicate_context_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();
        let err = store.create_context("prod").unwrap_err();
        assert!(matches!(err, GrrError::AlreadyExists(ref n) if n == "prod"));
        assert_eq!(store.get_contexts().unwrap(), vec!["prod"]);
    }

    #[test]
    fn test_create_blank_context_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        for name in ["", "  "] {
            assert!(matches!(
                store.create_context(name).unwrap_err(),
                GrrError::InvalidName(_)
            ));
        }
        assert!(!store.file().exists());
    }

    #[test]
    fn test_get_contexts_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        for name in ["zebra", "alpha", "middle"] {
            store.create_context(name).unwrap();
        }
        assert_eq!(store.get_contexts().unwrap(), vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_get_contexts_without_file() {
        let dir = TempDir::new().unwrap();
        assert!(test_store(&dir).get_contexts().unwrap().is_empty());
    }

    #[test]
    fn test_use_context_switches_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();
        store.create_context("dev").unwrap();

        store.use_context("dev").unwrap();

        let reopened = test_store(&dir);
        assert_eq!(reopened.current_context().unwrap().name, "dev");
    }

    #[test]
    fn test_use_context_unknown_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.create_context("prod").unwrap();

        let err = store.use_context("staging").unwrap_err();
        match err {
            GrrError::NotFound { name, available } => {
                assert_eq!(name, "staging");
                assert_eq!(available, vec!["prod"]);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(store.current_context().unwrap().name, "prod");
    }

    #[test]
    fn test_use_context_without_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(matches!(
            store.use_context("prod").unwrap_err(),
            GrrError::NotFound { .. }
        ));
        assert!(!store.file().exists());
    }

    #[test]
    fn test_use_context_repairs_dangling_pointer() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(
            store.file().path(),
            "currentContext: gone\ncontexts:\n  prod: {}\n",
        )
        .unwrap();

        store.use_context("prod").unwrap();
        assert_eq!(store.current_context().unwrap().name, "prod");
    }
}
