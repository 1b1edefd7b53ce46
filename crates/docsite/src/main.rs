//! docsite CLI - Documentation site configuration generator.
//!
//! Provides commands for:
//! - `build`: Write the site configuration and sidebars for the generator
//! - `check`: Verify that every sidebar document exists
//! - `version`: Print the project version read from the manifest
//! - `sync-version`: Update the site's version data file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, SyncVersionArgs, VersionArgs};
use output::Output;

/// docsite - Documentation site configuration generator.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site configuration and sidebars.
    Build(BuildArgs),
    /// Check that every sidebar document exists.
    Check(CheckArgs),
    /// Print the project version.
    Version(VersionArgs),
    /// Update the version data file from the manifest.
    SyncVersion(SyncVersionArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Version(args) => args.execute(),
        Commands::SyncVersion(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
