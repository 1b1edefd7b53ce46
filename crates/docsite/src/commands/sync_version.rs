//! `docsite sync-version` command implementation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use docsite_config::CliSettings;
use docsite_version::{read_version, sync_version_data};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sync-version command.
#[derive(Args)]
pub(crate) struct SyncVersionArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Version data file to update (overrides config).
    #[arg(long)]
    version_data: Option<PathBuf>,

    /// Date recorded as `lastUpdated` (YYYY-MM-DD, default: today).
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl SyncVersionArgs {
    /// Unlike `build`, a manifest without a version is an error here: the
    /// sentinel must never be written into the data file.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(CliSettings {
            version_data: self.version_data,
            ..CliSettings::default()
        })?;
        let paths = &config.paths;

        let version = read_version(&paths.manifest)?;
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        if sync_version_data(&paths.version_data, &version, date)? {
            output.success(&format!(
                "Updated version to {version} in {}",
                paths.version_data.display()
            ));
        } else {
            output.field("Up to date", paths.version_data.display());
        }
        Ok(())
    }
}
