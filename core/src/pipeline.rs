#![deny(missing_docs)]

//! # Pipeline
//!
//! Resolves every input, scans directories, parses each file and folds the
//! results into a [`ModelRegistry`].
//!
//! 1. **Resolve**: each input is classified as file, directory or unsupported.
//! 2. **Scan**: directories are walked with the configured package filters.
//! 3. **Parse**: each file goes through the [`FileParser`].
//! 4. **Register**: declarations are appended to the registry in order.
//!
//! Exclusions and annotation queries are left to the generators that consume
//! the finished registry.

use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::filter::PathFilter;
use crate::input::InputLocation;
use crate::parser::{FileParser, JavaDeclarationWalker, JavaParser, ParseAdapter};
use crate::registry::ModelRegistry;
use crate::scanner::scan_with;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sequential discovery → parse → registry driver.
pub struct Pipeline<F = ParseAdapter<JavaParser, JavaDeclarationWalker>> {
    parser: F,
    filter: PathFilter,
    base_dir: PathBuf,
    output_dir: Option<PathBuf>,
}

impl Pipeline {
    /// A pipeline over Java sources.
    pub fn java(config: &GeneratorConfig) -> Self {
        Self::new(ParseAdapter::java(), config)
    }
}

impl<F: FileParser> Pipeline<F> {
    /// Creates a pipeline using `parser` for every file.
    pub fn new(parser: F, config: &GeneratorConfig) -> Self {
        Self {
            parser,
            filter: PathFilter::new(&config.package_filters),
            base_dir: config.base_dir(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// The output target carried for generators.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Processes `inputs` in order, appending every declaration to `registry`.
    ///
    /// Stops at the first failure. Declarations registered before the failure
    /// stay in `registry`.
    ///
    /// # Errors
    ///
    /// * [`AppError::UnsupportedInput`] for an input with an unsupported URI scheme.
    /// * [`AppError::ReadOrSyntax`] for a file input that is missing, unreadable or unparsable.
    /// * [`AppError::DuplicateDeclaration`] when a fully qualified name is seen twice.
    pub fn run<S: AsRef<str>>(&self, inputs: &[S], registry: &mut ModelRegistry) -> AppResult<()> {
        info!(inputs = inputs.len(), "Starting model assembly");
        if let Some(out) = &self.output_dir {
            debug!(output = %out.display(), "output target");
        }

        for raw in inputs {
            let raw = raw.as_ref();
            match InputLocation::classify(raw, &self.base_dir) {
                InputLocation::File(path) => self.parse_into(&path, registry)?,
                InputLocation::Directory(dir) => {
                    let files = scan_with(&dir, &self.filter);
                    debug!(dir = %dir.display(), files = files.len(), "scanned input directory");
                    for file in &files {
                        self.parse_into(file, registry)?;
                    }
                }
                InputLocation::Unsupported { input, reason } => {
                    return Err(AppError::UnsupportedInput { input, reason });
                }
            }
        }

        info!(declarations = registry.len(), "Model assembly completed");
        Ok(())
    }

    /// Runs the pipeline into a fresh registry.
    pub fn build_model<S: AsRef<str>>(&self, inputs: &[S]) -> AppResult<ModelRegistry> {
        let mut registry = ModelRegistry::new();
        self.run(inputs, &mut registry)?;
        Ok(registry)
    }

    fn parse_into(&self, path: &Path, registry: &mut ModelRegistry) -> AppResult<()> {
        info!("Parsing file {}", path.display());
        let declarations = self.parser.parse_file(path)?;
        registry.add_all(declarations)
    }
}
