//! Configuration of the Slurm Factory Spack repository documentation site.

use chrono::Datelike;
use docsite_nav::{DOCS_SIDEBAR_ID, SIDEBARS_FILENAME};

use crate::llms::{CustomLlmFile, LLMS_PLUGIN, LlmsPluginOptions, PathTransformation};
use crate::theme::{
    Footer, FooterLink, FooterLinkColumn, FooterStyle, Navbar, NavbarItem, NavbarLogo,
    NavbarPosition, PrismConfig, PrismTheme, ThemeConfig,
};
use crate::{
    Activation, BrokenLinkPolicy, ClassicPresetOptions, CustomFields, DocsOptions, I18nConfig,
    MarkdownConfig, MarkdownFormat, MarkdownHooks, PluginOptions, PresetTheme, SiteConfig,
    SiteError,
};

const TITLE: &str = "Slurm Factory Spack Repo";
const ORGANIZATION: &str = "vantagecompute";
const PROJECT: &str = "slurm-factory-spack-repo";
const REPOSITORY_URL: &str = "https://github.com/vantagecompute/slurm-factory-spack-repo";
const LOGO_URL: &str = "https://vantage-compute-public-assets.s3.us-east-1.amazonaws.com/branding/vantage-logo-text-white-horz.png";

/// Values that vary between builds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInputs {
    /// Resolved project version.
    pub version: String,
    /// Year shown in the footer copyright.
    pub year: i32,
}

impl SiteInputs {
    pub fn new(version: impl Into<String>, year: i32) -> Self {
        Self {
            version: version.into(),
            year,
        }
    }

    /// Inputs for a build happening now.
    pub fn current(version: impl Into<String>) -> Self {
        Self::new(version, Self::current_year())
    }

    /// Local calendar year, as shown in the footer.
    #[must_use]
    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }
}

/// Assemble and validate the site configuration.
///
/// # Errors
///
/// Returns [`SiteError::Validation`] if the assembled record is invalid.
pub fn slurm_factory_site(inputs: SiteInputs) -> Result<SiteConfig, SiteError> {
    let site = SiteConfig {
        title: TITLE.to_owned(),
        tagline: "Custom Spack repository for building and installing Slurm".to_owned(),
        favicon: "img/favicon.ico".to_owned(),
        url: "https://vantagecompute.github.io".to_owned(),
        base_url: format!("/{PROJECT}/"),
        organization_name: ORGANIZATION.to_owned(),
        project_name: PROJECT.to_owned(),
        deployment_branch: "gh-pages".to_owned(),
        trailing_slash: false,
        on_broken_links: BrokenLinkPolicy::Throw,
        markdown: MarkdownConfig {
            format: MarkdownFormat::Mdx,
            mermaid: false,
            hooks: MarkdownHooks {
                on_broken_markdown_links: BrokenLinkPolicy::Warn,
            },
        },
        i18n: I18nConfig {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        },
        presets: vec![Activation::new(
            "classic",
            ClassicPresetOptions {
                docs: DocsOptions {
                    path: "./docs".to_owned(),
                    route_base_path: "/".to_owned(),
                    sidebar_path: format!("./{SIDEBARS_FILENAME}"),
                    edit_url: format!("{REPOSITORY_URL}/tree/main/docusaurus/"),
                },
                blog: false,
                theme: PresetTheme {
                    custom_css: "./src/css/custom.css".to_owned(),
                },
            },
        )],
        plugins: vec![Activation::new(
            LLMS_PLUGIN,
            PluginOptions::Llms(llms_options()),
        )],
        theme_config: theme(inputs.year),
        custom_fields: CustomFields {
            project_version: inputs.version,
        },
    };
    site.validate()?;
    Ok(site)
}

fn llms_options() -> LlmsPluginOptions {
    LlmsPluginOptions {
        generate_llms_txt: true,
        generate_llms_full_txt: true,
        docs_dir: "docs".to_owned(),
        ignore_files: Vec::new(),
        title: "Slurm Factory Spack Repository Documentation".to_owned(),
        description: "Custom Spack repository for building and installing Slurm with pre-built binaries and GPU support.".to_owned(),
        include_blog: false,
        exclude_imports: true,
        remove_duplicate_headings: true,
        generate_markdown_files: true,
        include_order: Vec::new(),
        include_unmatched_last: true,
        path_transformation: PathTransformation {
            ignore_paths: vec!["docs".to_owned()],
            add_paths: Vec::new(),
        },
        custom_llm_files: vec![
            CustomLlmFile::full(
                "llms-index.txt",
                ["docs/index.md"],
                "Slurm Factory Spack Repository Overview",
                "Overview and introduction to Slurm Factory Spack Repository",
            ),
            CustomLlmFile::full(
                "llms-getting-started.txt",
                ["docs/getting-started.md"],
                "Slurm Factory Getting Started Guide",
                "Installation and quick start guide for Slurm Factory",
            ),
            CustomLlmFile::full(
                "llms-packages.txt",
                ["docs/packages/*.md"],
                "Slurm Factory Package Documentation",
                "Complete package reference for Slurm, curl, freeipmi, and openssl",
            ),
            CustomLlmFile::full(
                "llms-contributing.txt",
                ["docs/contributing.md"],
                "Slurm Factory Contributing Guide",
                "Contributing guidelines for Slurm Factory Spack Repository",
            ),
            CustomLlmFile::full(
                "llms-contact.txt",
                ["docs/contact.md"],
                "Slurm Factory Contact Information",
                "Contact and support information for Slurm Factory",
            ),
        ],
    }
}

fn theme(year: i32) -> ThemeConfig {
    ThemeConfig {
        navbar: Navbar {
            title: TITLE.to_owned(),
            logo: NavbarLogo {
                alt: "Vantage Compute Logo".to_owned(),
                src: LOGO_URL.to_owned(),
                src_dark: LOGO_URL.to_owned(),
                href: format!("https://{ORGANIZATION}.github.io/{PROJECT}/"),
            },
            items: vec![
                NavbarItem::DocSidebar {
                    sidebar_id: DOCS_SIDEBAR_ID.to_owned(),
                    position: NavbarPosition::Left,
                    label: "Docs".to_owned(),
                },
                NavbarItem::Link {
                    href: REPOSITORY_URL.to_owned(),
                    label: "GitHub".to_owned(),
                    position: NavbarPosition::Right,
                },
            ],
        },
        footer: Footer {
            style: FooterStyle::Dark,
            links: vec![
                FooterLinkColumn {
                    title: "Docs".to_owned(),
                    items: vec![FooterLink::to("Getting Started", "/")],
                },
                FooterLinkColumn {
                    title: "Community".to_owned(),
                    items: vec![FooterLink::href("GitHub", REPOSITORY_URL)],
                },
            ],
            copyright: format!("Copyright © {year} Vantage Compute. Built with Docusaurus."),
        },
        prism: PrismConfig {
            theme: PrismTheme::Github,
            dark_theme: PrismTheme::Dracula,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn site() -> SiteConfig {
        slurm_factory_site(SiteInputs::new("0.4.1", 2025)).unwrap()
    }

    #[test]
    fn test_identity() {
        let site = site();
        assert_eq!(site.title, "Slurm Factory Spack Repo");
        assert_eq!(site.url, "https://vantagecompute.github.io");
        assert_eq!(site.base_url, "/slurm-factory-spack-repo/");
        assert_eq!(site.organization_name, "vantagecompute");
        assert_eq!(site.project_name, "slurm-factory-spack-repo");
        assert_eq!(site.deployment_branch, "gh-pages");
        assert!(!site.trailing_slash);
    }

    #[test]
    fn test_link_policies_kept_separate() {
        let site = site();
        assert_eq!(site.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(
            site.markdown.hooks.on_broken_markdown_links,
            BrokenLinkPolicy::Warn
        );
        assert!(!site.markdown.mermaid);
    }

    #[test]
    fn test_version_threaded_into_custom_fields() {
        let value = serde_json::to_value(site()).unwrap();
        assert_eq!(value["customFields"], json!({"projectVersion": "0.4.1"}));
    }

    #[test]
    fn test_copyright_uses_year() {
        let site = slurm_factory_site(SiteInputs::new("0.4.1", 2031)).unwrap();
        assert_eq!(
            site.theme_config.footer.copyright,
            "Copyright © 2031 Vantage Compute. Built with Docusaurus."
        );
    }

    #[test]
    fn test_current_inputs_use_this_year() {
        let inputs = SiteInputs::current("1.0.0");
        assert_eq!(inputs.year, SiteInputs::current_year());
        assert_eq!(inputs.year, chrono::Local::now().year());
        assert_eq!(inputs.version, "1.0.0");
    }

    #[test]
    fn test_custom_exports() {
        let site = site();
        let PluginOptions::Llms(options) = &site.plugins[0].options;

        assert_eq!(site.plugins[0].name, "docusaurus-plugin-llms");
        assert_eq!(
            options.output_filenames(),
            vec![
                "llms.txt",
                "llms-full.txt",
                "llms-index.txt",
                "llms-getting-started.txt",
                "llms-packages.txt",
                "llms-contributing.txt",
                "llms-contact.txt",
            ]
        );
        assert!(options.custom_llm_files.iter().all(|f| f.full_content));
        assert_eq!(
            options.custom_llm_files[2].include_patterns,
            vec!["docs/packages/*.md"]
        );
    }

    #[test]
    fn test_serialized_top_level_shape() {
        let value = serde_json::to_value(site()).unwrap();

        assert_eq!(value["baseUrl"], "/slurm-factory-spack-repo/");
        assert_eq!(value["onBrokenLinks"], "throw");
        assert_eq!(
            value["markdown"],
            json!({
                "format": "mdx",
                "mermaid": false,
                "hooks": {"onBrokenMarkdownLinks": "warn"}
            })
        );
        assert_eq!(
            value["i18n"],
            json!({"defaultLocale": "en", "locales": ["en"]})
        );
        assert_eq!(
            value["presets"],
            json!([[
                "classic",
                {
                    "docs": {
                        "path": "./docs",
                        "routeBasePath": "/",
                        "sidebarPath": "./sidebars.json",
                        "editUrl": "https://github.com/vantagecompute/slurm-factory-spack-repo/tree/main/docusaurus/"
                    },
                    "blog": false,
                    "theme": {"customCss": "./src/css/custom.css"}
                }
            ]])
        );
        assert_eq!(value["plugins"][0][0], "docusaurus-plugin-llms");
        assert_eq!(value["plugins"][0][1]["generateLLMsTxt"], true);
        assert_eq!(
            value["themeConfig"]["prism"],
            json!({"theme": "github", "darkTheme": "dracula"})
        );
        assert_eq!(
            value["themeConfig"]["navbar"]["items"][0]["sidebarId"],
            "docsSidebar"
        );
    }

    #[test]
    fn test_to_json_is_pretty() {
        let json = site().to_json().unwrap();
        assert!(json.starts_with("{\n"));
        assert!(json.contains("\"title\": \"Slurm Factory Spack Repo\""));
    }
}
