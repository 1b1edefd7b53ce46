//! Configuration management for docsite.
//!
//! Parses `docsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. All sections are
//! optional; relative paths resolve against the directory holding the config
//! file.
//!
//! ```toml
//! [manifest]
//! path = "../pyproject.toml"
//!
//! [docs]
//! source_dir = "docs"
//!
//! [output]
//! dir = "generated"
//!
//! [version_data]
//! path = "data/version.yml"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Every path value supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override project manifest path.
    pub manifest: Option<PathBuf>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override version data file path.
    pub version_data: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

const DEFAULT_MANIFEST: &str = "../pyproject.toml";
const DEFAULT_SOURCE_DIR: &str = "docs";
const DEFAULT_OUTPUT_DIR: &str = "generated";
const DEFAULT_VERSION_DATA: &str = "data/version.yml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    manifest: ManifestConfigRaw,
    docs: DocsConfigRaw,
    output: OutputConfigRaw,
    version_data: VersionDataConfigRaw,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw `[manifest]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ManifestConfigRaw {
    path: Option<String>,
}

/// Raw `[docs]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Raw `[output]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Raw `[version_data]` section.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct VersionDataConfigRaw {
    path: Option<String>,
}

/// Resolved paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Project manifest the version is read from.
    pub manifest: PathBuf,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Directory generated configuration files are written to.
    pub output_dir: PathBuf,
    /// YAML data file holding the displayed version.
    pub version_data: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`manifest.path`").
        field: String,
        /// Error message (e.g., "${`PROJECT_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(manifest) = &settings.manifest {
            self.paths.manifest.clone_from(manifest);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.paths.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
        if let Some(version_data) = &settings.version_data {
            self.paths.version_data.clone_from(version_data);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            manifest: ManifestConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            output: OutputConfigRaw::default(),
            version_data: VersionDataConfigRaw::default(),
            paths: PathsConfig {
                manifest: base.join(DEFAULT_MANIFEST),
                source_dir: base.join(DEFAULT_SOURCE_DIR),
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                version_data: base.join(DEFAULT_VERSION_DATA),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation and path resolution
        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Paths may be omitted but not set to an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.manifest.path.as_deref(), "manifest.path")?;
        require_non_empty(self.docs.source_dir.as_deref(), "docs.source_dir")?;
        require_non_empty(self.output.dir.as_deref(), "output.dir")?;
        require_non_empty(self.version_data.path.as_deref(), "version_data.path")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let fields = [
            (&mut self.manifest.path, "manifest.path"),
            (&mut self.docs.source_dir, "docs.source_dir"),
            (&mut self.output.dir, "output.dir"),
            (&mut self.version_data.path, "version_data.path"),
        ];
        for (value, field) in fields {
            if let Some(raw) = value.as_deref() {
                *value = Some(expand::expand_env(raw, field)?);
            }
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths = PathsConfig {
            manifest: resolve(self.manifest.path.as_deref(), DEFAULT_MANIFEST),
            source_dir: resolve(self.docs.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
            output_dir: resolve(self.output.dir.as_deref(), DEFAULT_OUTPUT_DIR),
            version_data: resolve(self.version_data.path.as_deref(), DEFAULT_VERSION_DATA),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(
            config.paths,
            PathsConfig {
                manifest: PathBuf::from("/site/../pyproject.toml"),
                source_dir: PathBuf::from("/site/docs"),
                output_dir: PathBuf::from("/site/generated"),
                version_data: PathBuf::from("/site/data/version.yml"),
            }
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/site"));
        assert_eq!(config.paths.source_dir, PathBuf::from("/site/docs"));
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[manifest]
path = "../Cargo.toml"

[docs]
source_dir = "content"

[output]
dir = "build/config"

[version_data]
path = "static/version.yml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project/site"));

        assert_eq!(
            config.paths,
            PathsConfig {
                manifest: PathBuf::from("/project/site/../Cargo.toml"),
                source_dir: PathBuf::from("/project/site/content"),
                output_dir: PathBuf::from("/project/site/build/config"),
                version_data: PathBuf::from("/project/site/static/version.yml"),
            }
        );
    }

    #[test]
    fn test_absolute_paths_kept() {
        let toml = r#"
[manifest]
path = "/repo/pyproject.toml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project/site"));

        assert_eq!(config.paths.manifest, PathBuf::from("/repo/pyproject.toml"));
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[docs]\nsource_dir = \"pages\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.paths.source_dir, tmp.path().join("pages"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[docs\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\ndir = \"out\"\n").unwrap();
        let settings = CliSettings {
            manifest: Some(PathBuf::from("/other/pyproject.toml")),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(
            config.paths.manifest,
            PathBuf::from("/other/pyproject.toml")
        );
        assert_eq!(config.paths.output_dir, tmp.path().join("out"));
    }

    #[test]
    fn test_apply_cli_settings_output_dir() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.paths.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.paths.source_dir, PathBuf::from("/site/docs")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            manifest: Some(PathBuf::from("/repo/pyproject.toml")),
            source_dir: Some(PathBuf::from("/repo/docs")),
            output_dir: None,
            version_data: Some(PathBuf::from("/repo/version.yml")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.paths,
            PathsConfig {
                manifest: PathBuf::from("/repo/pyproject.toml"),
                source_dir: PathBuf::from("/repo/docs"),
                output_dir: PathBuf::from("/site/generated"),
                version_data: PathBuf::from("/repo/version.yml"),
            }
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let config_before = Config::default_with_base(Path::new("/site"));
        let mut config = Config::default_with_base(Path::new("/site"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.paths, config_before.paths);
    }

    #[test]
    fn test_expand_env_vars_manifest_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_PROJECT_ROOT", "/work/project");
        }

        let toml = r#"
[manifest]
path = "${DOCSITE_TEST_PROJECT_ROOT}/pyproject.toml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/site"));

        assert_eq!(
            config.paths.manifest,
            PathBuf::from("/work/project/pyproject.toml")
        );

        unsafe {
            std::env::remove_var("DOCSITE_TEST_PROJECT_ROOT");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_DOCSITE_CONFIG_TEST");
        }

        let toml = r#"
[output]
dir = "${MISSING_VAR_DOCSITE_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let result = config.expand_env_vars();

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_DOCSITE_CONFIG_TEST"));
        assert!(err.to_string().contains("output.dir"));
    }

    #[test]
    fn test_validate_empty_path() {
        let toml = r#"
[docs]
source_dir = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("docs.source_dir"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/site"));
        assert!(config.validate().is_ok());
    }
}
