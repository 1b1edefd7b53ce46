//! `docsite check` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docsite_config::CliSettings;
use docsite_nav::{DOCS_SIDEBAR_ID, SidebarItem, Sidebars, site_sidebars};
use docsite_site::{LLMS_PLUGIN, PluginOptions, SiteConfig, SiteInputs, slurm_factory_site};
use docsite_version::resolve_version;

use super::ConfigArgs;
use super::build::version_label;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        })?;

        let version = resolve_version(&config.paths.manifest);
        let site = slurm_factory_site(SiteInputs::current(version.as_str()))?;
        output.highlight(&site.title);
        output.field("URL", site.canonical_url());
        output.field("Version", version_label(&version));
        output.field("Exports", export_files(&site).join(", "));

        let sidebars = site_sidebars();
        output.field("Sidebar", sidebar_labels(&sidebars)?.join(" / "));
        require_documents(&sidebars, &config.paths.source_dir)?;

        let documents: usize = sidebars.iter().map(|s| s.doc_ids().len()).sum();
        output.success(&format!(
            "All {documents} sidebar documents found in {}",
            config.paths.source_dir.display()
        ));
        Ok(())
    }
}

/// Top-level labels of the sidebar the navbar points at.
fn sidebar_labels(sidebars: &Sidebars) -> Result<Vec<&str>, CliError> {
    let sidebar = sidebars.get(DOCS_SIDEBAR_ID).ok_or_else(|| {
        CliError::Validation(format!("Navbar references unknown sidebar: {DOCS_SIDEBAR_ID}"))
    })?;
    Ok(sidebar.items.iter().map(SidebarItem::label).collect())
}

/// Files the documentation-summary plugin will emit, empty if it is not active.
fn export_files(site: &SiteConfig) -> Vec<&str> {
    match site.plugin(LLMS_PLUGIN) {
        Some(plugin) => {
            let PluginOptions::Llms(options) = &plugin.options;
            options.output_filenames()
        }
        None => Vec::new(),
    }
}

/// Fail if any sidebar references a document missing from `docs_dir`.
pub(crate) fn require_documents(sidebars: &Sidebars, docs_dir: &Path) -> Result<(), CliError> {
    let missing: Vec<String> = sidebars
        .iter()
        .flat_map(|sidebar| sidebar.missing_documents(docs_dir))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    for id in &missing {
        tracing::warn!(id = %id, docs_dir = %docs_dir.display(), "Sidebar document not found");
    }
    Err(CliError::Validation(format!(
        "Sidebar references missing documents: {}",
        missing.join(", ")
    )))
}
