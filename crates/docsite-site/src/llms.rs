//! Options of the documentation-summary plugin.
//!
//! The plugin exports the documentation as plain-text files meant for LLM
//! consumption: `llms.txt` (an index), `llms-full.txt` (the full corpus) and
//! one file per [`CustomLlmFile`]. Only the declarative options live here;
//! page selection and text extraction happen inside the plugin.

use std::collections::HashSet;

use serde::Serialize;

use crate::{SiteError, require_non_empty};

/// Package name of the documentation-summary plugin.
pub const LLMS_PLUGIN: &str = "docusaurus-plugin-llms";

/// Plugin options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmsPluginOptions {
    /// Emit the `llms.txt` index.
    #[serde(rename = "generateLLMsTxt")]
    pub generate_llms_txt: bool,
    /// Emit the `llms-full.txt` full-text export.
    #[serde(rename = "generateLLMsFullTxt")]
    pub generate_llms_full_txt: bool,
    /// Documentation root, relative to the site directory.
    pub docs_dir: String,
    /// Glob patterns of files left out of every export.
    pub ignore_files: Vec<String>,
    /// Title of the index export.
    pub title: String,
    /// Description of the index export.
    pub description: String,
    /// Include blog posts.
    pub include_blog: bool,
    /// Strip `import` statements from MDX content.
    pub exclude_imports: bool,
    /// Drop headings that repeat the page title.
    pub remove_duplicate_headings: bool,
    /// Emit one Markdown file per page.
    pub generate_markdown_files: bool,
    /// Glob patterns fixing the order of included documents.
    pub include_order: Vec<String>,
    /// Append documents not matched by `include_order` at the end.
    pub include_unmatched_last: bool,
    /// Rewrites applied when deriving public URLs from file paths.
    pub path_transformation: PathTransformation,
    /// Additional filtered exports.
    #[serde(rename = "customLLMFiles")]
    pub custom_llm_files: Vec<CustomLlmFile>,
}

/// Rewrites applied when deriving public URLs from file paths.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTransformation {
    /// Path segments removed from URLs.
    pub ignore_paths: Vec<String>,
    /// Path segments prepended to URLs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_paths: Vec<String>,
}

/// A named, filtered export.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLlmFile {
    /// Output filename.
    pub filename: String,
    /// Glob patterns selecting the exported documents, in order.
    pub include_patterns: Vec<String>,
    /// Export full page content instead of excerpts.
    pub full_content: bool,
    pub title: String,
    pub description: String,
}

impl CustomLlmFile {
    /// Create a full-content export of the documents matching `patterns`.
    pub fn full<I, S>(
        filename: impl Into<String>,
        patterns: I,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filename: filename.into(),
            include_patterns: patterns.into_iter().map(Into::into).collect(),
            full_content: true,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Validate the export definition.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if a field is empty, the filename
    /// contains a path separator, or a pattern is not a valid glob.
    pub fn validate(&self) -> Result<(), SiteError> {
        require_non_empty(&self.filename, "customLLMFiles.filename")?;
        if self.filename.contains(['/', '\\']) {
            return Err(SiteError::Validation(format!(
                "customLLMFiles.filename {} must not contain a path separator",
                self.filename
            )));
        }
        if self.include_patterns.is_empty() {
            return Err(SiteError::Validation(format!(
                "customLLMFiles.includePatterns of {} cannot be empty",
                self.filename
            )));
        }
        require_globs(&self.include_patterns, "customLLMFiles.includePatterns")?;
        require_non_empty(&self.title, "customLLMFiles.title")?;
        Ok(())
    }
}

/// Require every pattern to be a valid glob.
fn require_globs(patterns: &[String], field: &str) -> Result<(), SiteError> {
    for pattern in patterns {
        glob::Pattern::new(pattern).map_err(|e| {
            SiteError::Validation(format!("{field} has invalid pattern {pattern}: {e}"))
        })?;
    }
    Ok(())
}

impl LlmsPluginOptions {
    /// Validate plugin options.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), SiteError> {
        require_non_empty(&self.docs_dir, "docsDir")?;
        require_non_empty(&self.title, "title")?;
        require_globs(&self.ignore_files, "ignoreFiles")?;
        require_globs(&self.include_order, "includeOrder")?;

        let mut filenames = HashSet::new();
        for file in &self.custom_llm_files {
            file.validate()?;
            if !filenames.insert(file.filename.as_str()) {
                return Err(SiteError::Validation(format!(
                    "customLLMFiles.filename {} is used more than once",
                    file.filename
                )));
            }
        }
        Ok(())
    }

    /// Every export file name the plugin will write, standard exports first.
    #[must_use]
    pub fn output_filenames(&self) -> Vec<&str> {
        let standard = [
            (self.generate_llms_txt, "llms.txt"),
            (self.generate_llms_full_txt, "llms-full.txt"),
        ];
        standard
            .into_iter()
            .filter_map(|(enabled, name)| enabled.then_some(name))
            .chain(self.custom_llm_files.iter().map(|f| f.filename.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> LlmsPluginOptions {
        LlmsPluginOptions {
            generate_llms_txt: true,
            generate_llms_full_txt: true,
            docs_dir: "docs".to_owned(),
            ignore_files: Vec::new(),
            title: "Docs".to_owned(),
            description: "Test docs".to_owned(),
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
            custom_llm_files: vec![CustomLlmFile::full(
                "llms-guide.txt",
                ["docs/guide/*.md"],
                "Guide",
                "The guide",
            )],
        }
    }

    #[test]
    fn test_valid_options() {
        assert!(options().validate().is_ok());
    }

    #[test]
    fn test_serialized_key_names() {
        let value = serde_json::to_value(options()).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        for key in [
            "generateLLMsTxt",
            "generateLLMsFullTxt",
            "docsDir",
            "ignoreFiles",
            "includeBlog",
            "excludeImports",
            "removeDuplicateHeadings",
            "generateMarkdownFiles",
            "includeOrder",
            "includeUnmatchedLast",
            "pathTransformation",
            "customLLMFiles",
        ] {
            assert!(keys.iter().any(|k| k == key), "missing key {key}");
        }
        assert_eq!(
            value["pathTransformation"],
            serde_json::json!({"ignorePaths": ["docs"]})
        );
        assert_eq!(
            value["customLLMFiles"][0],
            serde_json::json!({
                "filename": "llms-guide.txt",
                "includePatterns": ["docs/guide/*.md"],
                "fullContent": true,
                "title": "Guide",
                "description": "The guide"
            })
        );
    }

    #[test]
    fn test_duplicate_filenames_rejected() {
        let mut options = options();
        options
            .custom_llm_files
            .push(CustomLlmFile::full("llms-guide.txt", ["docs/*.md"], "Again", ""));

        let err = options.validate().unwrap_err();

        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let mut options = options();
        options.custom_llm_files[0].include_patterns = vec!["docs/[unclosed.md".to_owned()];

        let err = options.validate().unwrap_err();

        assert!(err.to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_invalid_ignore_glob_rejected() {
        let mut options = options();
        options.ignore_files = vec!["**a".to_owned()];

        let err = options.validate().unwrap_err();

        assert!(err.to_string().contains("ignoreFiles"));
    }

    #[test]
    fn test_filename_with_separator_rejected() {
        let mut options = options();
        options.custom_llm_files[0].filename = "out/llms.txt".to_owned();

        let err = options.validate().unwrap_err();

        assert!(err.to_string().contains("path separator"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut options = options();
        options.custom_llm_files[0].title = String::new();

        let err = options.validate().unwrap_err();

        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_output_filenames() {
        let mut options = options();
        assert_eq!(
            options.output_filenames(),
            vec!["llms.txt", "llms-full.txt", "llms-guide.txt"]
        );

        options.generate_llms_full_txt = false;
        assert_eq!(
            options.output_filenames(),
            vec!["llms.txt", "llms-guide.txt"]
        );
    }
}
