use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// File name of the per-file history metadata
pub const ENTRIES_FILE_NAME: &str = "entries.json";

/// Find every `entries.json` beneath `root`, in file-name order
///
/// A missing root yields no files. Symlinks are not followed, and directory entries
/// that cannot be read are logged and skipped.
pub fn discover_history_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // The root itself not existing is not worth a warning
                if e.depth() > 0 || root.exists() {
                    warn!("Skipping unreadable path under {}: {}", root.display(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == OsStr::new(ENTRIES_FILE_NAME) {
            files.push(entry.into_path());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discover_nested_entries_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("b/deep")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/entries.json"), "{}").unwrap();
        fs::write(root.join("b/deep/entries.json"), "{}").unwrap();
        fs::write(root.join("b/other.json"), "{}").unwrap();
        fs::write(root.join("b/AbCd.py"), "print()").unwrap();

        let files = discover_history_files(root);
        assert_eq!(files, vec![root.join("a/entries.json"), root.join("b/deep/entries.json")]);
    }

    #[test]
    fn test_discover_ignores_directory_named_entries_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("entries.json")).unwrap();

        assert!(discover_history_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_discover_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(discover_history_files(&missing).is_empty());
    }
}
