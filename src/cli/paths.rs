//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the working root.
///
/// An explicit root wins; otherwise the current directory, or "." if that
/// cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_path() {
        let root = resolve_root_path(Some(PathBuf::from("/tmp/graphs")));
        assert_eq!(root, PathBuf::from("/tmp/graphs"));
    }

    #[test]
    fn test_resolve_without_path() {
        let root = resolve_root_path(None);
        assert!(!root.as_os_str().is_empty());
    }

    #[test]
    fn test_resolve_against() {
        let root = Path::new("/work");
        assert_eq!(
            resolve_against(root, Path::new("g/a.gka")),
            PathBuf::from("/work/g/a.gka")
        );
        assert_eq!(
            resolve_against(root, Path::new("/abs/a.gka")),
            PathBuf::from("/abs/a.gka")
        );
    }
}
