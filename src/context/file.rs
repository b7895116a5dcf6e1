//! Settings file location and I/O

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::config::file as file_config;
use crate::error::{GrrError, Result};

use super::models::ConfigDocument;

/// Reads and writes the YAML settings document at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use an explicit settings file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the settings file path from multiple sources:
    /// 1. explicit path (--config)
    /// 2. GRRCTL_CONFIG env var
    /// 3. platform config dir (~/.config/grrctl/settings.yaml on Linux)
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            debug!("Using settings file from CLI flag: {}", path.display());
            return Self::new(path);
        }

        if let Ok(path) = std::env::var(file_config::ENV_VAR) {
            if !path.is_empty() {
                debug!(
                    "Using settings file from {} env var: {}",
                    file_config::ENV_VAR,
                    path
                );
                return Self::new(path);
            }
        }

        let path = Self::default_path();
        debug!("Using default settings file: {}", path.display());
        Self::new(path)
    }

    /// Platform default settings path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_config::DIR_NAME)
            .join(file_config::FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document. Returns `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<ConfigDocument>> {
        if !self.path.exists() {
            debug!("Settings file {} does not exist", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| GrrError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Some(ConfigDocument::default()));
        }

        serde_yml::from_str(&content)
            .map(Some)
            .map_err(|e| GrrError::Read {
                path: self.path.clone(),
                message: format!("invalid YAML: {}", e),
            })
    }

    /// Persist the document.
    /// Writes a temp file in the same directory and renames it over the target,
    /// so readers never observe a partial document.
    pub fn save(&self, document: &ConfigDocument) -> Result<()> {
        let write_err = |message: String| GrrError::Write {
            path: self.path.clone(),
            message,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| {
            write_err(format!(
                "failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let yaml = serde_yml::to_string(document)
            .map_err(|e| write_err(format!("failed to serialize: {}", e)))?;

        // NamedTempFile is created with 0600 on Unix
        let mut tmp = NamedTempFile::new_in(&parent)
            .map_err(|e| write_err(format!("failed to create temp file: {}", e)))?;
        tmp.write_all(yaml.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| write_err(format!("failed to write temp file: {}", e)))?;
        tmp.persist(&self.path)
            .map_err(|e| write_err(format!("failed to replace file: {}", e.error)))?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::models::empty_settings;
    use tempfile::TempDir;

    fn test_file(dir: &TempDir) -> ConfigFile {
        ConfigFile::new(dir.path().join("settings.yaml"))
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(test_file(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let file = test_file(&dir);
        fs::write(file.path(), "\n").unwrap();
        assert_eq!(file.load().unwrap(), Some(ConfigDocument::default()));
    }

    #[test]
    fn test_load_corrupt_yaml_errors() {
        let dir = TempDir::new().unwrap();
        let file = test_file(&dir);
        fs::write(file.path(), "contexts: [unclosed").unwrap();
        let err = file.load().unwrap_err();
        assert!(matches!(err, GrrError::Read { .. }));
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let file = ConfigFile::new(dir.path().join("nested").join("settings.yaml"));
        file.save(&ConfigDocument::default()).unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let file = test_file(&dir);

        let mut doc = ConfigDocument {
            current_context: Some("prod".to_string()),
            ..Default::default()
        };
        doc.contexts.insert(
            "prod".to_string(),
            serde_yml::from_str("grafana:\n  url: https://grafana.example.com\n").unwrap(),
        );
        doc.contexts.insert("dev".to_string(), empty_settings());

        file.save(&doc).unwrap();
        assert_eq!(file.load().unwrap(), Some(doc));
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let file = test_file(&dir);
        file.save(&ConfigDocument::default()).unwrap();
        file.save(&ConfigDocument::default()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_concurrent_saves_leave_valid_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");

        let handles: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|name| {
                let file = ConfigFile::new(path.clone());
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        let mut doc = ConfigDocument {
                            current_context: Some(name.to_string()),
                            ..Default::default()
                        };
                        doc.contexts.insert(name.to_string(), empty_settings());
                        file.save(&doc).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let doc = ConfigFile::new(path).load().unwrap().unwrap();
        let current = doc.current_name().unwrap().to_string();
        assert!(current == "a" || current == "b");
        assert_eq!(doc.names(), vec![current]);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = test_file(&dir);
        file.save(&ConfigDocument::default()).unwrap();

        let mode = fs::metadata(file.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let file = ConfigFile::locate(Some(PathBuf::from("/tmp/explicit.yaml")));
        assert_eq!(file.path(), Path::new("/tmp/explicit.yaml"));
    }

    #[test]
    fn test_default_path() {
        let path = ConfigFile::default_path();
        assert!(path.to_string_lossy().contains(file_config::DIR_NAME));
        assert!(path.ends_with(file_config::FILE_NAME));
    }
}
