//! # Directory Scanner
//!
//! Recursive discovery of candidate source files under a root directory.

use crate::filter::PathFilter;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lists the files below `root` whose containing directory passes `package_filters`.
///
/// See [`scan_with`].
pub fn scan<S: AsRef<str>>(root: &Path, package_filters: &[S]) -> Vec<PathBuf> {
    scan_with(root, &PathFilter::new(package_filters))
}

/// Depth-first walk of `root`, keeping every non-directory entry whose parent
/// directory is accepted by `filter`.
///
/// - A missing root yields an empty list.
/// - Unreadable directories are skipped.
/// - Siblings come in directory-listing order, which is platform dependent.
pub fn scan_with(root: &Path, filter: &PathFilter) -> Vec<PathBuf> {
    if !root.exists() {
        debug!(root = %root.display(), "scan root does not exist");
        return Vec::new();
    }

    let files: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| entry.path().parent().is_some_and(|dir| filter.accepts(dir)))
        .map(|entry| entry.into_path())
        .collect();

    debug!(
        root = %root.display(),
        count = files.len(),
        "scanned directory"
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "class X {}").unwrap();
        path
    }

    fn sorted(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
        files.sort();
        files
    }

    #[test]
    fn test_scan_with_package_filter() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("src");
        let foo = touch(&root, "com/acme/Foo.java");
        touch(&root, "com/other/Bar.java");

        let files = scan(&root, &["com.acme"]);
        assert_eq!(files, vec![foo]);
    }

    #[test]
    fn test_scan_without_filters_returns_all_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let a = touch(root, "com/acme/Foo.java");
        let b = touch(root, "com/other/Bar.java");
        let c = touch(root, "README.md");

        let files = scan::<&str>(root, &[]);
        assert_eq!(sorted(files), sorted(vec![a, b, c]));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let files = scan(&dir.path().join("nope"), &["com.acme"]);
        assert!(files.is_empty());
    }

    #[test]
    fn test_filter_ignores_file_names() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        // file name matches the filter text but its directory does not
        touch(root, "com/acme.java");
        let inside = touch(root, "com/acme/notes.txt");

        let files = scan(root, &["com.acme"]);
        assert_eq!(files, vec![inside]);
    }

    #[test]
    fn test_subpackages_are_not_included() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let foo = touch(root, "com/acme/Foo.java");
        touch(root, "com/acme/api/Api.java");

        let files = scan(root, &["com.acme"]);
        assert_eq!(files, vec![foo]);
    }

    #[test]
    fn test_nested_directories_are_walked() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let deep = touch(root, "a/b/c/Deep.java");
        let shallow = touch(root, "a/Shallow.java");

        let files = scan::<&str>(root, &[]);
        assert_eq!(sorted(files), sorted(vec![deep, shallow]));
    }

    #[test]
    fn test_root_file_is_not_scanned() {
        let dir = tempdir().unwrap();
        let file = touch(dir.path(), "Foo.java");
        assert!(scan::<&str>(&file, &[]).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let readable = touch(dir.path(), "com/acme/Foo.java");
        let hidden = touch(dir.path(), "com/locked/Bar.java");
        let locked = dir.path().join("com/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // privileged users can still list the directory
        let enforced = fs::read_dir(&locked).is_err();

        let files = scan(dir.path(), &[] as &[&str]);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(files.contains(&readable));
        if enforced {
            assert_eq!(files, vec![readable]);
        } else {
            assert_eq!(sorted(files), sorted(vec![readable, hidden]));
        }
    }
}
