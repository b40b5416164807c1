#![deny(missing_docs)]

//! # Scan Command
//!
//! Lists the source files a directory input would contribute to the model.

use crate::error::CliResult;
use clientgen_core::{scan, GeneratorConfig};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the scan command.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Root directory to walk.
    pub dir: PathBuf,

    /// Only keep files whose directory ends with this package (e.g. `com.acme.json`).
    /// Repeatable; added to the filters from the configuration file.
    #[clap(long = "package-filter")]
    pub package_filters: Vec<String>,
}

/// Executes the scan, writing one path per line to `out`.
pub fn execute(args: &ScanArgs, config: &GeneratorConfig, out: &mut impl Write) -> CliResult<()> {
    let mut filters = config.package_filters.clone();
    filters.extend(args.package_filters.iter().cloned());

    // relative to the working directory, like any command line path
    for file in scan(&args.dir, &filters) {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}
