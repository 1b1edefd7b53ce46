//! `docsite build` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use docsite_config::{CliSettings, PathsConfig};
use docsite_nav::{SIDEBARS_FILENAME, site_sidebars};
use docsite_site::{SiteInputs, slurm_factory_site};
use docsite_version::{ResolvedVersion, resolve_version};

use super::ConfigArgs;
use super::check::require_documents;
use crate::error::CliError;
use crate::output::Output;

/// Filename of the generated site configuration.
const SITE_CONFIG_FILENAME: &str = "docusaurus.config.json";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output directory for the generated files (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Fail when a sidebar entry has no document.
    #[arg(long)]
    check_docs: bool,
}

/// Files written by a build.
#[derive(Debug)]
pub(crate) struct BuildReport {
    pub(crate) version: ResolvedVersion,
    pub(crate) site_config: PathBuf,
    pub(crate) sidebars: PathBuf,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            ..CliSettings::default()
        })?;
        let paths = &config.paths;

        output.field("Manifest", paths.manifest.display());
        output.field("Output", paths.output_dir.display());

        let report = generate(paths, SiteInputs::current_year(), self.check_docs)?;

        output.field("Version", version_label(&report.version));
        output.success(&format!(
            "Wrote {} and {}",
            report.site_config.display(),
            report.sidebars.display()
        ));
        Ok(())
    }
}

/// Resolve the version, assemble the site and write both generated files.
pub(crate) fn generate(
    paths: &PathsConfig,
    year: i32,
    check_docs: bool,
) -> Result<BuildReport, CliError> {
    let version = resolve_version(&paths.manifest);
    let site = slurm_factory_site(SiteInputs::new(version.as_str(), year))?;
    let sidebars = site_sidebars();

    if check_docs {
        require_documents(&sidebars, &paths.source_dir)?;
    }

    fs::create_dir_all(&paths.output_dir)?;
    let site_config = write_file(&paths.output_dir, SITE_CONFIG_FILENAME, &site.to_json()?)?;
    let sidebars_json = sidebars
        .to_json()
        .map_err(|e| CliError::Site(e.into()))?;
    let sidebars = write_file(&paths.output_dir, SIDEBARS_FILENAME, &sidebars_json)?;

    tracing::info!(
        version = %version,
        output_dir = %paths.output_dir.display(),
        "Generated site configuration"
    );

    Ok(BuildReport {
        version,
        site_config,
        sidebars,
    })
}

/// Version as shown on the `Version:` line, marking a substituted sentinel.
pub(crate) fn version_label(version: &ResolvedVersion) -> String {
    if version.is_fallback() {
        format!("{version} (fallback)")
    } else {
        version.to_string()
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf, CliError> {
    let path = dir.join(name);
    fs::write(&path, format!("{content}\n"))?;
    Ok(path)
}
