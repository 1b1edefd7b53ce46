//! Documentation site configuration.
//!
//! [`SiteConfig`] mirrors the configuration object consumed by the
//! documentation generator: site identity, deployment target, link policies,
//! content presets, plugins and theme. It serializes with the generator's
//! camelCase key names, so the JSON produced by [`SiteConfig::to_json`] can be
//! loaded as-is.
//!
//! The record carries no behavior beyond validation. It is assembled once per
//! build by [`slurm_factory_site`] and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use docsite_site::{SiteInputs, slurm_factory_site};
//!
//! let site = slurm_factory_site(SiteInputs::new("1.2.3", 2025)).unwrap();
//! assert_eq!(
//!     site.canonical_url(),
//!     "https://vantagecompute.github.io/slurm-factory-spack-repo/"
//! );
//! ```

mod llms;
mod slurm_factory;
mod theme;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

pub use llms::{CustomLlmFile, LLMS_PLUGIN, LlmsPluginOptions, PathTransformation};
pub use slurm_factory::{SiteInputs, slurm_factory_site};
pub use theme::{
    Footer, FooterLink, FooterLinkColumn, FooterStyle, LinkTarget, Navbar, NavbarItem,
    NavbarLogo, NavbarPosition, PrismConfig, PrismTheme, ThemeConfig,
};

/// Site configuration record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Tagline shown on the landing page.
    pub tagline: String,
    /// Favicon path relative to the static directory.
    pub favicon: String,
    /// Production URL (scheme and host, no path).
    pub url: String,
    /// Path prefix all routes are served under.
    pub base_url: String,
    /// Repository owner used for edit links and deployment.
    pub organization_name: String,
    /// Repository name used for edit links and deployment.
    pub project_name: String,
    /// Branch the built site is pushed to.
    pub deployment_branch: String,
    /// Whether generated routes end with a slash.
    pub trailing_slash: bool,
    /// Policy for broken internal links.
    pub on_broken_links: BrokenLinkPolicy,
    /// Markdown handling.
    pub markdown: MarkdownConfig,
    /// Locale set.
    pub i18n: I18nConfig,
    /// Content presets, in activation order.
    pub presets: Vec<Preset>,
    /// Plugins, in activation order.
    pub plugins: Vec<Plugin>,
    /// Theme presentation.
    pub theme_config: ThemeConfig,
    /// Values exposed to pages at runtime.
    pub custom_fields: CustomFields,
}

/// What the generator does when it finds a broken link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    Ignore,
    Log,
    Warn,
    Throw,
}

/// Source format for documentation pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownFormat {
    Mdx,
    Md,
    Detect,
}

/// Markdown handling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkdownConfig {
    /// Page format.
    pub format: MarkdownFormat,
    /// Whether Mermaid diagram rendering is enabled.
    pub mermaid: bool,
    /// Markdown processing hooks.
    pub hooks: MarkdownHooks,
}

/// Markdown processing hooks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownHooks {
    /// Policy for broken links inside Markdown prose.
    pub on_broken_markdown_links: BrokenLinkPolicy,
}

/// Locale set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

/// A named preset or plugin together with its options.
///
/// Serializes as a `[name, options]` pair, the generator's activation format.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation<T> {
    pub name: String,
    pub options: T,
}

impl<T> Activation<T> {
    pub fn new(name: impl Into<String>, options: T) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

impl<T: Serialize> Serialize for Activation<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.name)?;
        tuple.serialize_element(&self.options)?;
        tuple.end()
    }
}

/// Content preset activation.
pub type Preset = Activation<ClassicPresetOptions>;

/// Plugin activation.
pub type Plugin = Activation<PluginOptions>;

/// Options of the classic preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassicPresetOptions {
    /// Documentation content source.
    pub docs: DocsOptions,
    /// Whether the blog is enabled.
    pub blog: bool,
    /// Theme assets.
    pub theme: PresetTheme,
}

/// Documentation content source.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    /// Documentation root directory.
    pub path: String,
    /// Route all docs are served under.
    pub route_base_path: String,
    /// Sidebars file.
    pub sidebar_path: String,
    /// Prefix for "edit this page" links.
    pub edit_url: String,
}

/// Theme assets of a preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetTheme {
    pub custom_css: String,
}

/// Options of a recognized plugin.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PluginOptions {
    /// Documentation-summary (LLM text export) plugin.
    Llms(LlmsPluginOptions),
}

/// Values exposed to pages at runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFields {
    /// Version of the documented project.
    pub project_version: String,
}

/// Site configuration error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Validation error.
    #[error("Site configuration error: {0}")]
    Validation(String),
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), SiteError> {
    if value.is_empty() {
        return Err(SiteError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), SiteError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SiteError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl SiteConfig {
    /// Public URL of the site root: `url` followed by `baseUrl`.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.base_url)
    }

    /// GitHub Pages URL derived from the organization and project identifiers.
    #[must_use]
    pub fn github_pages_url(&self) -> String {
        format!(
            "https://{}.github.io/{}/",
            self.organization_name, self.project_name
        )
    }

    /// Plugin activation by name.
    #[must_use]
    pub fn plugin(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }

    /// Serialize to pretty-printed JSON in the generator's format.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), SiteError> {
        self.validate_identity()?;
        self.validate_i18n()?;
        self.validate_presets()?;
        for plugin in &self.plugins {
            require_non_empty(&plugin.name, "plugins.name")?;
            match &plugin.options {
                PluginOptions::Llms(options) => options.validate()?,
            }
        }
        self.theme_config.validate()?;
        require_non_empty(&self.custom_fields.project_version, "customFields.projectVersion")?;
        Ok(())
    }

    fn validate_identity(&self) -> Result<(), SiteError> {
        require_non_empty(&self.title, "title")?;
        require_http_url(&self.url, "url")?;
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(SiteError::Validation(
                "baseUrl must start and end with /".to_owned(),
            ));
        }
        require_non_empty(&self.organization_name, "organizationName")?;
        require_non_empty(&self.project_name, "projectName")?;
        require_non_empty(&self.deployment_branch, "deploymentBranch")?;
        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), SiteError> {
        let i18n = &self.i18n;
        require_non_empty(&i18n.default_locale, "i18n.defaultLocale")?;
        if !i18n.locales.contains(&i18n.default_locale) {
            return Err(SiteError::Validation(format!(
                "i18n.locales must include the default locale {}",
                i18n.default_locale
            )));
        }
        Ok(())
    }

    fn validate_presets(&self) -> Result<(), SiteError> {
        for preset in &self.presets {
            require_non_empty(&preset.name, "presets.name")?;
            let docs = &preset.options.docs;
            require_non_empty(&docs.path, "presets.docs.path")?;
            require_non_empty(&docs.sidebar_path, "presets.docs.sidebarPath")?;
            if !docs.route_base_path.starts_with('/') {
                return Err(SiteError::Validation(
                    "presets.docs.routeBasePath must start with /".to_owned(),
                ));
            }
            require_http_url(&docs.edit_url, "presets.docs.editUrl")?;
        }
        Ok(())
    }
}
