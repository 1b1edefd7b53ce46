//! `docsite version` command implementation.

use clap::Args;
use docsite_config::CliSettings;
use docsite_version::resolve_version;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the version command.
#[derive(Args)]
pub(crate) struct VersionArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl VersionArgs {
    /// Print the resolved version to stdout.
    ///
    /// A missing version still prints the fallback; the error is logged.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(CliSettings::default())?;

        let version = resolve_version(&config.paths.manifest);
        output.value(version.as_str())?;
        Ok(())
    }
}
