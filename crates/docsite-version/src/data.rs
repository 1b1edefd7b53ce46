//! Site version data file.
//!
//! The site keeps a small YAML data file (`data/version.yml`) that pages read
//! to display the current release:
//!
//! ```yaml
//! version: "0.4.1"
//! lastUpdated: "2025-10-19"
//! ```
//!
//! Only those two lines are rewritten. Everything else in the file is left
//! untouched, including its line endings: both `\n` and `\r\n` files are
//! recognized.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{NoExpand, Regex};

use crate::VersionError;

/// Format of the `lastUpdated` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// `R` makes `$` stop before `\r\n` and keeps `.` off the `\r`.
static VERSION_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?mR)^version: ".*"$"#).expect("invalid version field regex"));

static UPDATED_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?mR)^lastUpdated: ".*"$"#).expect("invalid lastUpdated field regex")
});

/// Rewrite the version and date fields of the data file at `path`.
///
/// The file is only written when its content changes. Returns whether it was
/// modified.
///
/// # Errors
///
/// Returns [`VersionError::Io`] if the file cannot be read or written.
pub fn sync_version_data(
    path: &Path,
    version: &str,
    date: NaiveDate,
) -> Result<bool, VersionError> {
    let io_err = |source| VersionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(io_err)?;
    let updated = rewrite_fields(&content, version, date);

    if updated == content {
        tracing::debug!(path = %path.display(), "Version data already current");
        return Ok(false);
    }

    std::fs::write(path, updated).map_err(io_err)?;
    tracing::info!(path = %path.display(), version, "Updated version data");
    Ok(true)
}

fn rewrite_fields(content: &str, version: &str, date: NaiveDate) -> String {
    let version_line = format!("version: \"{version}\"");
    let date_line = format!("lastUpdated: \"{}\"", date.format(DATE_FORMAT));

    let content = VERSION_FIELD.replace_all(content, NoExpand(&version_line));
    UPDATED_FIELD
        .replace_all(&content, NoExpand(&date_line))
        .into_owned()
}
