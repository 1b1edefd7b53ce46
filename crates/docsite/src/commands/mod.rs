//! CLI command implementations.

mod build;
mod check;
mod sync_version;
mod version;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use sync_version::SyncVersionArgs;
pub(crate) use version::VersionArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project manifest to read the version from (overrides config).
    #[arg(short, long, env = "DOCSITE_MANIFEST")]
    manifest: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration, applying the manifest override on top of `settings`.
    fn load(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            manifest: self.manifest.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}
