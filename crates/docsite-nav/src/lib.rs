//! Sidebar navigation tree.
//!
//! The documentation generator renders its sidebar from an ordered list of
//! [`SidebarItem`]s. Items are either a direct link to a document or a
//! category grouping several documents. Order is significant: it is the
//! top-to-bottom order of the rendered sidebar.
//!
//! # Example
//!
//! ```
//! use docsite_nav::docs_sidebar;
//!
//! let sidebar = docs_sidebar();
//! assert_eq!(sidebar.doc_ids()[0], "index");
//! ```

use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Identifier the site configuration uses to reference the docs sidebar.
pub const DOCS_SIDEBAR_ID: &str = "docsSidebar";

/// Filename the sidebars are written to, relative to the site directory.
pub const SIDEBARS_FILENAME: &str = "sidebars.json";

/// Document file extensions the generator accepts.
const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// One entry in a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Link to a single document.
    Doc {
        /// Document identifier (path below the docs root, without extension).
        id: String,
        /// Display label.
        label: String,
    },
    /// Labelled group of documents.
    Category {
        /// Display label.
        label: String,
        /// Child document identifiers.
        items: Vec<String>,
    },
}

impl SidebarItem {
    /// Create a document entry.
    pub fn doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Doc {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Create a category entry.
    pub fn category<I, S>(label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Category {
            label: label.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Category { label, .. } => label,
        }
    }

    /// Document identifiers referenced by this entry, in order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        let ids = match self {
            Self::Doc { id, .. } => std::slice::from_ref(id),
            Self::Category { items, .. } => items.as_slice(),
        };
        ids.iter().map(String::as_str)
    }
}

/// Named, ordered sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    /// Sidebar identifier.
    pub id: String,
    /// Top-level entries.
    pub items: Vec<SidebarItem>,
}

impl Sidebar {
    /// Flatten the tree to its document identifiers in rendering order.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        self.items.iter().flat_map(SidebarItem::doc_ids).collect()
    }

    /// Document identifiers with no `.md` or `.mdx` file under `docs_dir`.
    ///
    /// The generator fails the build on such references; this lets callers
    /// report them before handing the tree over.
    #[must_use]
    pub fn missing_documents(&self, docs_dir: &Path) -> Vec<String> {
        self.doc_ids()
            .into_iter()
            .filter(|id| {
                !DOC_EXTENSIONS
                    .iter()
                    .any(|ext| docs_dir.join(format!("{id}.{ext}")).is_file())
            })
            .map(str::to_owned)
            .collect()
    }
}

/// All sidebars of a site, keyed by identifier in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars(Vec<Sidebar>);

impl Sidebars {
    /// Create an empty set of sidebars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sidebar, replacing any existing sidebar with the same id.
    #[must_use]
    pub fn with(mut self, sidebar: Sidebar) -> Self {
        self.0.retain(|existing| existing.id != sidebar.id);
        self.0.push(sidebar);
        self
    }

    /// Look up a sidebar by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Sidebar> {
        self.0.iter().find(|sidebar| sidebar.id == id)
    }

    /// Iterate sidebars in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.0.iter()
    }

    /// Serialize to pretty-printed JSON in the generator's sidebars format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Sidebars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for sidebar in &self.0 {
            map.serialize_entry(&sidebar.id, &sidebar.items)?;
        }
        map.end()
    }
}

/// The documentation sidebar.
#[must_use]
pub fn docs_sidebar() -> Sidebar {
    Sidebar {
        id: DOCS_SIDEBAR_ID.to_owned(),
        items: vec![
            SidebarItem::doc("index", "Getting Started"),
            SidebarItem::doc("getting-started", "Quick Start"),
            SidebarItem::category(
                "Packages",
                [
                    "packages/slurm",
                    "packages/curl",
                    "packages/freeipmi",
                    "packages/openssl",
                ],
            ),
            SidebarItem::doc("contributing", "Contributing"),
            SidebarItem::doc("contact", "Contact"),
        ],
    }
}

/// Sidebars the site ships with.
#[must_use]
pub fn site_sidebars() -> Sidebars {
    Sidebars::new().with(docs_sidebar())
}
