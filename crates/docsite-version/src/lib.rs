//! Project version resolution for docsite.
//!
//! The documentation site is versioned after the project it documents. The
//! version lives in the project manifest (usually `pyproject.toml`), which is
//! read once per build by [`resolve_version`].
//!
//! Resolution never fails: a missing or unreadable manifest, or one without a
//! version entry, is logged and replaced by [`SENTINEL_VERSION`].
//!
//! ```no_run
//! use std::path::Path;
//! use docsite_version::resolve_version;
//!
//! let version = resolve_version(Path::new("../pyproject.toml"));
//! println!("documenting {version}");
//! ```
//!
//! [`sync_version_data`] keeps the site's `version.yml` data file in step with
//! the manifest.

mod data;
mod manifest;

use std::path::PathBuf;

pub use data::{DATE_FORMAT, sync_version_data};
pub use manifest::{ResolvedVersion, VersionSource, extract_version, read_version, resolve_version};

/// Version reported when the manifest cannot provide one.
pub const SENTINEL_VERSION: &str = "0.0.0";

/// Error raised while reading a version from disk.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The manifest was readable but held no version entry.
    #[error("version not found in {}", path.display())]
    NotFound { path: PathBuf },
}
