//! # Input Resolution
//!
//! Classifies each pipeline input (a plain path or a URI) as a single file, a
//! directory, or something the pipeline cannot handle.

use std::path::{Path, PathBuf};
use url::Url;

/// What an input resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLocation {
    /// A single source file.
    File(PathBuf),
    /// A directory to scan.
    Directory(PathBuf),
    /// A URI scheme the pipeline cannot read; the pipeline aborts on it.
    Unsupported {
        /// The input as given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl InputLocation {
    /// Classifies `raw`.
    ///
    /// - `file:` URIs map to their local path.
    /// - Other URI schemes are unsupported.
    /// - Anything without a scheme is a path, relative ones resolved against `base_dir`.
    ///
    /// An existing directory is a [`InputLocation::Directory`]. Every other
    /// local path is a [`InputLocation::File`], so a missing file is reported
    /// by the parser that tries to read it.
    pub fn classify(raw: &str, base_dir: &Path) -> Self {
        let path = match Url::parse(raw) {
            // a one letter scheme is a Windows drive (`C:\src`), not a URI
            Ok(url) if url.scheme().len() > 1 => {
                if url.scheme() != "file" {
                    return unsupported(raw, format!("scheme '{}' is not supported", url.scheme()));
                }
                match url.to_file_path() {
                    Ok(path) => path,
                    Err(()) => return unsupported(raw, "file URI does not denote a local path"),
                }
            }
            _ => base_dir.join(raw),
        };

        if path.is_dir() {
            InputLocation::Directory(path)
        } else {
            InputLocation::File(path)
        }
    }
}

fn unsupported(raw: &str, reason: impl Into<String>) -> InputLocation {
    InputLocation::Unsupported {
        input: raw.to_string(),
        reason: reason.into(),
    }
}
