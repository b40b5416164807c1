//! # Filters
//!
//! Package-path filtering for directory traversal and type exclusion for
//! downstream generators.

use std::path::{self, Path, MAIN_SEPARATOR_STR};

/// Decides whether a directory is inside one of the requested packages.
///
/// Each package filter (`com.acme.api`) is converted to its path form
/// (`com/acme/api`); a directory passes when its absolute path ends with any
/// converted filter. With no filters every directory passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    suffixes: Vec<String>,
}

impl PathFilter {
    /// Builds a filter from dot-separated package names.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = packages
            .into_iter()
            .map(|p| p.as_ref().replace('.', MAIN_SEPARATOR_STR))
            .collect();
        Self { suffixes }
    }

    /// A filter that accepts everything.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Whether no package filter is configured.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Whether files directly inside `dir` should be kept.
    ///
    /// The match is a plain string suffix test on the absolute path; it is not
    /// aligned to path components.
    pub fn accepts(&self, dir: &Path) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let absolute = path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        let dir = absolute.to_string_lossy();
        self.suffixes.iter().any(|suffix| dir.ends_with(suffix.as_str()))
    }
}

/// Exact membership test: is `type_name` listed in `exclude_list`?
///
/// No wildcard or package-prefix matching.
pub fn is_excluded<S: AsRef<str>>(type_name: &str, exclude_list: &[S]) -> bool {
    exclude_list.iter().any(|e| e.as_ref() == type_name)
}
