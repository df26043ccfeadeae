//! Locating description-language sources on disk

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::GkaConfig;
use crate::error::{GraphError, Result};

/// Files under `dir` carrying the configured extension, sorted by path.
///
/// Only the top level is scanned unless `config.recursive` is set.
#[tracing::instrument(skip(config), fields(dir = %dir.display()))]
pub fn discover_sources(dir: &Path, config: &GkaConfig) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(GraphError::unreadable(
            dir.display(),
            "directory does not exist",
        ));
    }

    let extension = config.extension.trim_start_matches('.');
    let max_depth = if config.recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|e| e == extension))
        .collect();

    files.sort();
    tracing::debug!(count = files.len(), "discovered sources");
    Ok(files)
}
