//! Configuration for gka
//!
//! Configuration is read from an optional `gka.toml` in the working root.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{GkaConfig, CONFIG_FILE_NAME, DEFAULT_EXTENSION, DEFAULT_GRAPHS_DIR};

impl GkaConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GkaConfig = toml::from_str(&content)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load `gka.toml` from `root` if present, otherwise fall back to defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Directory scanned for sources, resolved against `root`
    pub fn graphs_dir_in(&self, root: &Path) -> PathBuf {
        if self.graphs_dir.is_absolute() {
            self.graphs_dir.clone()
        } else {
            root.join(&self.graphs_dir)
        }
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(GraphError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("extension {:?} is not a file extension", self.extension),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = GkaConfig::default();
        assert_eq!(config.graphs_dir, PathBuf::from(DEFAULT_GRAPHS_DIR));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
        assert!(!config.recursive);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = GkaConfig {
            graphs_dir: PathBuf::from("data"),
            extension: "graph".to_string(),
            recursive: true,
        };
        config.save(&path).unwrap();

        let loaded = GkaConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "recursive = true\n").unwrap();

        let loaded = GkaConfig::load(&path).unwrap();
        assert!(loaded.recursive);
        assert_eq!(loaded.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = GkaConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, GkaConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "recursive = \"maybe\"\n").unwrap();

        assert!(matches!(
            GkaConfig::load(&path),
            Err(GraphError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "extension = \"\"\n").unwrap();

        assert!(matches!(
            GkaConfig::load(&path),
            Err(GraphError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_graphs_dir_resolution() {
        let config = GkaConfig::default();
        assert_eq!(
            config.graphs_dir_in(Path::new("/work")),
            PathBuf::from("/work/graphs")
        );
    }
}
