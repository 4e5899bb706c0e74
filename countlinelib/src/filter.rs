//! File discovery with excluded-directory pruning.
//!
//! The walk is depth-first with entries sorted by file name, so two runs over
//! an unchanged tree visit files in the same order.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::CountlineError;
use crate::options::{Category, CountConfig};
use crate::Result;

/// Check if a directory entry should be pruned before descending.
fn should_skip_dir(entry: &DirEntry, config: &CountConfig) -> bool {
    // Never prune the root itself, whatever its name
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    config.is_excluded_dir(&name)
}

/// Regular files, plus symlinks that do not resolve to a directory.
///
/// Links are not followed. Dangling links are kept and fail when opened.
fn is_countable(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

/// Walk `root` and return files whose name matches a configured category,
/// each paired with the first category that claimed it.
///
/// Directories named in [`CountConfig::excluded_dirs`] are skipped along with
/// everything beneath them. Any traversal error aborts the walk.
pub fn discover_files<'c>(
    root: impl AsRef<Path>,
    config: &'c CountConfig,
) -> Result<Vec<(PathBuf, &'c Category)>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(CountlineError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if let Some(category) = config.classify(root) {
            files.push((root.to_path_buf(), category));
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e, config));

    for entry in walker {
        let entry = entry?;
        if !is_countable(&entry) {
            continue;
        }
        if let Some(category) = config.classify(entry.path()) {
            files.push((entry.into_path(), category));
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn discover_paths(root: &Path, config: &CountConfig) -> Vec<PathBuf> {
        discover_files(root, config)
            .unwrap()
            .into_iter()
            .map(|(path, _)| path)
            .collect()
    }

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src/utils")).unwrap();
        fs::create_dir_all(dir.join("target/debug")).unwrap();
        fs::create_dir_all(dir.join("src/node_modules/pkg")).unwrap();
        fs::create_dir_all(dir.join("deep/a/b/.venv/lib")).unwrap();

        fs::write(dir.join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.join("src/utils/mod.rs"), "pub fn util() {}\n").unwrap();
        fs::write(dir.join("target/debug/build.rs"), "// generated\n").unwrap();
        fs::write(dir.join("src/node_modules/pkg/index.rs"), "// vendored\n").unwrap();
        fs::write(dir.join("deep/a/b/.venv/lib/site.rs"), "// venv\n").unwrap();
        fs::write(dir.join("deep/a/b/keep.rs"), "// kept\n").unwrap();
        fs::write(dir.join("README.md"), "# Readme\n").unwrap();
    }

    #[test]
    fn test_discover_files_prunes_excluded_dirs() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_paths(temp.path(), &CountConfig::default());

        assert!(files.iter().any(|p| p.ends_with("src/main.rs")));
        assert!(files.iter().any(|p| p.ends_with("src/utils/mod.rs")));
        assert!(files.iter().any(|p| p.ends_with("deep/a/b/keep.rs")));
        assert_eq!(files.len(), 3);

        for excluded in ["target", "node_modules", ".venv"] {
            assert!(!files
                .iter()
                .any(|p| p.components().any(|c| c.as_os_str() == excluded)));
        }
    }

    #[test]
    fn test_discover_files_order_is_stable() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let config = CountConfig::default();
        let first = discover_paths(temp.path(), &config);
        let second = discover_paths(temp.path(), &config);
        assert_eq!(first, second);

        let rel: Vec<_> = first
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("deep/a/b/keep.rs"),
                PathBuf::from("src/main.rs"),
                PathBuf::from("src/utils/mod.rs"),
            ]
        );
    }

    #[test]
    fn test_excluded_root_is_still_walked() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("target");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("lib.rs"), "\n").unwrap();

        let files = discover_paths(&root, &CountConfig::default());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_discover_uses_configured_categories() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let config = CountConfig::new().category(Category::new("Markdown", &[".md"]));
        let files = discover_files(temp.path(), &config).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].0.ends_with("README.md"));
        assert_eq!(files[0].1.label, "Markdown");
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("test.rs");
        fs::write(&file_path, "fn test() {}").unwrap();

        let files = discover_paths(&file_path, &CountConfig::default());

        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let config = CountConfig::default();
        let result = discover_files("/nonexistent/path", &config);

        assert!(matches!(result, Err(CountlineError::PathNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_not_a_file() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("real/lib.rs"), "\n").unwrap();
        symlink(temp.path().join("real"), temp.path().join("dir.rs")).unwrap();

        let files = discover_paths(temp.path(), &CountConfig::default());

        assert_eq!(files, vec![temp.path().join("real/lib.rs")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_kept() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        symlink(temp.path().join("missing.rs"), temp.path().join("dang.rs")).unwrap();

        let files = discover_paths(temp.path(), &CountConfig::default());

        assert_eq!(files, vec![temp.path().join("dang.rs")]);
    }
}
