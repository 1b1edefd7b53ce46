//! Manifest parsing.
//!
//! The manifest is first read as TOML and searched for a version under the
//! conventional tables. Manifests that are not valid TOML, or that keep the
//! version somewhere else, fall back to a line scan for
//! `version = "..."` / `version = '...'`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::{SENTINEL_VERSION, VersionError};

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*version\s*=\s*["']([^"']+)["']"#).expect("invalid version regex")
});

/// Key paths searched in a structured manifest, in priority order.
const VERSION_KEYS: &[&[&str]] = &[
    &["project", "version"],
    &["package", "version"],
    &["tool", "poetry", "version"],
    &["version"],
];

/// Where a [`ResolvedVersion`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionSource {
    /// Read from the manifest at this path.
    Manifest(PathBuf),
    /// Manifest unusable; the sentinel was substituted.
    Fallback,
}

/// Version computed once per build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedVersion {
    value: String,
    source: VersionSource,
}

impl ResolvedVersion {
    /// The version string, verbatim from the manifest or the sentinel.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Where the version came from.
    #[must_use]
    pub fn source(&self) -> &VersionSource {
        &self.source
    }

    /// Whether the sentinel was substituted.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == VersionSource::Fallback
    }

    fn fallback() -> Self {
        Self {
            value: SENTINEL_VERSION.to_owned(),
            source: VersionSource::Fallback,
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<ResolvedVersion> for String {
    fn from(version: ResolvedVersion) -> Self {
        version.value
    }
}

/// Extract the version from manifest content.
///
/// The captured value is returned verbatim; it is not checked to be a
/// well-formed semantic version.
#[must_use]
pub fn extract_version(content: &str) -> Option<String> {
    structured_version(content).or_else(|| line_version(content))
}

/// Look the version up by key in a TOML document.
///
/// Empty strings are skipped, matching the line scan which needs at least
/// one character between the quotes.
fn structured_version(content: &str) -> Option<String> {
    let document: toml::Table = toml::from_str(content).ok()?;
    VERSION_KEYS.iter().find_map(|keys| {
        let (last, tables) = keys.split_last()?;
        let mut table = &document;
        for key in tables {
            table = table.get(*key)?.as_table()?;
        }
        table
            .get(*last)?
            .as_str()
            .filter(|version| !version.is_empty())
            .map(str::to_owned)
    })
}

/// First `version = "..."` line, with either quote style.
fn line_version(content: &str) -> Option<String> {
    VERSION_LINE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Read the manifest at `path` and extract its version.
///
/// # Errors
///
/// Returns [`VersionError::Io`] if the file cannot be read as UTF-8 and
/// [`VersionError::NotFound`] if it holds no version entry.
pub fn read_version(path: &Path) -> Result<String, VersionError> {
    let content = std::fs::read_to_string(path).map_err(|source| VersionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_version(&content).ok_or_else(|| VersionError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Resolve the project version from the manifest at `path`.
///
/// Any failure emits a single error event and yields [`SENTINEL_VERSION`].
pub fn resolve_version(path: &Path) -> ResolvedVersion {
    match read_version(path) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), version = %value, "Resolved project version");
            ResolvedVersion {
                value,
                source: VersionSource::Manifest(path.to_path_buf()),
            }
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                fallback = SENTINEL_VERSION,
                "Error reading version from manifest"
            );
            ResolvedVersion::fallback()
        }
    }
}
