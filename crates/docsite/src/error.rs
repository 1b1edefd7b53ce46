//! CLI error types.

use docsite_config::ConfigError;
use docsite_site::SiteError;
use docsite_version::VersionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Validation(String),
}
