#![deny(missing_docs)]

//! # Generator Configuration
//!
//! Settings shared by the pipeline and downstream generators. Loaded from a
//! YAML or JSON file and usually extended by command line flags.

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Input files, directories or `file:` URIs, processed in order.
    pub inputs: Vec<String>,
    /// Where generators write their output. Never written by the front end.
    pub output_dir: Option<PathBuf>,
    /// Dot-separated package names restricting directory scans.
    pub package_filters: Vec<String>,
    /// Fully qualified type names generators must skip; matched exactly.
    pub exclude_classes: Vec<String>,
    /// Base for relative inputs; defaults to the current directory.
    pub base_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Loads a configuration file; `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let mut config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        // relative inputs in a config file are relative to the file itself
        if config.base_dir.is_none() {
            config.base_dir = path.parent().map(Path::to_path_buf);
        }
        Ok(config)
    }

    /// Parses YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| AppError::Config(format!("Invalid YAML configuration: {}", e)))
    }

    /// Parses JSON configuration.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid JSON configuration: {}", e)))
    }

    /// Directory relative inputs are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Whether generators should skip `type_name`.
    pub fn is_excluded(&self, type_name: &str) -> bool {
        crate::filter::is_excluded(type_name, &self.exclude_classes)
    }
}
