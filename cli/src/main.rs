#![deny(missing_docs)]

//! # Clientgen CLI
//!
//! Command Line Interface for the client library generator front end.
//!
//! Supported Commands:
//! - `scan`: Lists the source files a directory would contribute.
//! - `model`: Builds the declaration model from the inputs and prints it as JSON.

use clap::{Parser, Subcommand};
use clientgen_core::{GeneratorConfig, ParseAdapter};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod model;
mod scan;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Client generator source front end")]
struct Cli {
    /// Configuration file (YAML, or JSON when the extension is `.json`).
    #[clap(long, global = true, env = "CLIENTGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the files a directory scan yields.
    Scan(scan::ScanArgs),
    /// Build the model and print it as JSON.
    Model(model::ModelArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> CliResult<GeneratorConfig> {
    match path {
        Some(path) => Ok(GeneratorConfig::from_file(path)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Scan(args) => scan::execute(args, &config, &mut out)?,
        Commands::Model(args) => {
            // Injecting the Java front end
            model::execute(args, config, ParseAdapter::java(), &mut out)?;
        }
    }

    Ok(())
}
