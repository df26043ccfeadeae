//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the optional configuration file in the working root
pub const CONFIG_FILE_NAME: &str = "gka.toml";

/// Directory scanned for sources when none is configured
pub const DEFAULT_GRAPHS_DIR: &str = "graphs";

/// File extension marking a description-language source
pub const DEFAULT_EXTENSION: &str = "gka";

/// Source discovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GkaConfig {
    /// Directory holding the sources (relative paths resolve against the root)
    #[serde(default = "default_graphs_dir")]
    pub graphs_dir: PathBuf,

    /// Extension of source files, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into sub-directories of `graphs_dir`
    #[serde(default)]
    pub recursive: bool,
}

impl Default for GkaConfig {
    fn default() -> Self {
        Self {
            graphs_dir: default_graphs_dir(),
            extension: default_extension(),
            recursive: false,
        }
    }
}

fn default_graphs_dir() -> PathBuf {
    PathBuf::from(DEFAULT_GRAPHS_DIR)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}
