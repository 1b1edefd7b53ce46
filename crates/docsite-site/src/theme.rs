//! Theme presentation: navbar, footer and code highlighting.

use serde::Serialize;

use crate::{SiteError, require_http_url, require_non_empty};

/// Theme configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: PrismConfig,
}

impl ThemeConfig {
    pub(crate) fn validate(&self) -> Result<(), SiteError> {
        require_non_empty(&self.navbar.title, "themeConfig.navbar.title")?;
        require_non_empty(&self.navbar.logo.src, "themeConfig.navbar.logo.src")?;
        for item in &self.navbar.items {
            if let NavbarItem::Link { href, .. } = item {
                require_http_url(href, "themeConfig.navbar.items.href")?;
            }
        }
        for column in &self.footer.links {
            for link in &column.items {
                if let LinkTarget::Href(href) = &link.target {
                    require_http_url(href, "themeConfig.footer.links.href")?;
                }
            }
        }
        Ok(())
    }
}

/// Top navigation bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Navbar {
    pub title: String,
    pub logo: NavbarLogo,
    pub items: Vec<NavbarItem>,
}

/// Navbar logo.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarLogo {
    /// Alternative text.
    pub alt: String,
    /// Image used in light mode.
    pub src: String,
    /// Image used in dark mode.
    pub src_dark: String,
    /// Link target when the logo is clicked.
    pub href: String,
}

/// Navbar side an item is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    Left,
    Right,
}

/// Navbar entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum NavbarItem {
    /// Link to the first document of a sidebar.
    #[serde(rename = "docSidebar")]
    DocSidebar {
        sidebar_id: String,
        position: NavbarPosition,
        label: String,
    },
    /// Plain link.
    #[serde(rename = "default")]
    Link {
        href: String,
        label: String,
        position: NavbarPosition,
    },
}

/// Footer color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Dark,
    Light,
}

/// Site footer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    /// Link columns, left to right.
    pub links: Vec<FooterLinkColumn>,
    pub copyright: String,
}

/// Titled column of footer links.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterLinkColumn {
    pub title: String,
    pub items: Vec<FooterLink>,
}

/// Footer link.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(flatten)]
    pub target: LinkTarget,
}

impl FooterLink {
    /// Link to a route of this site.
    pub fn to(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::To(route.into()),
        }
    }

    /// Link to an external URL.
    pub fn href(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::Href(url.into()),
        }
    }
}

/// Where a link points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Route within the site.
    To(String),
    /// External URL.
    Href(String),
}

/// Code block highlighting themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismConfig {
    /// Theme used in light mode.
    pub theme: PrismTheme,
    /// Theme used in dark mode.
    pub dark_theme: PrismTheme,
}

/// Highlighting theme, referenced by its name in the theme package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PrismTheme {
    Github,
    Dracula,
    VsLight,
    VsDark,
    NightOwl,
    OneLight,
    OneDark,
}
