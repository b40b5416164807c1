#![deny(missing_docs)]

//! # Model Command
//!
//! Runs the front end pipeline and dumps the resulting model as JSON.
//!
//! 1. **Merge**: command line flags are folded into the loaded configuration.
//! 2. **Build**: inputs go through the [`Pipeline`] into a fresh registry.
//! 3. **Dump**: every declaration not on the exclusion list is written as a
//!    JSON object keyed by fully qualified name.

use crate::error::CliResult;
use clientgen_core::{FileParser, GeneratorConfig, Pipeline};
use serde_json::{Map, Value};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for the model command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Files, directories or `file:` URIs. Replaces the configured inputs when given.
    pub inputs: Vec<String>,

    /// Package filter applied to directory inputs. Repeatable.
    #[clap(long = "package-filter")]
    pub package_filters: Vec<String>,

    /// Type name to leave out of the dump. Repeatable.
    #[clap(long = "exclude")]
    pub exclude_classes: Vec<String>,

    /// Output directory handed to generators.
    #[clap(long, env = "CLIENTGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[clap(long)]
    pub pretty: bool,
}

impl ModelArgs {
    /// Folds the flags into `config`: inputs and output override, lists extend.
    ///
    /// Inputs given on the command line resolve against the working
    /// directory, not against the configuration file's directory.
    pub fn apply(&self, mut config: GeneratorConfig) -> CliResult<GeneratorConfig> {
        if !self.inputs.is_empty() {
            config.inputs = self.inputs.clone();
            config.base_dir = Some(env::current_dir()?);
        }
        config
            .package_filters
            .extend(self.package_filters.iter().cloned());
        config
            .exclude_classes
            .extend(self.exclude_classes.iter().cloned());
        if self.output.is_some() {
            config.output_dir = self.output.clone();
        }
        Ok(config)
    }
}

/// Executes the model command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `config` - Configuration loaded from file (or the default).
/// * `parser` - The file parser injected into the pipeline.
/// * `out` - Where the JSON is written.
pub fn execute<F: FileParser>(
    args: &ModelArgs,
    config: GeneratorConfig,
    parser: F,
    out: &mut impl Write,
) -> CliResult<()> {
    let config = args.apply(config)?;
    if config.inputs.is_empty() {
        return Err("no inputs given on the command line or in the configuration".to_string().into());
    }

    let pipeline = Pipeline::new(parser, &config);
    let registry = pipeline.build_model(&config.inputs)?;

    let mut model = Map::new();
    for decl in &registry {
        if config.is_excluded(&decl.full_name) {
            debug!(name = %decl.full_name, "excluded from dump");
            continue;
        }
        model.insert(decl.full_name.clone(), serde_json::to_value(decl)?);
    }
    info!(
        declarations = registry.len(),
        dumped = model.len(),
        "Model ready"
    );

    let model = Value::Object(model);
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &model)?;
    } else {
        serde_json::to_writer(&mut *out, &model)?;
    }
    writeln!(out)?;
    Ok(())
}
