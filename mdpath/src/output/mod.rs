//! Output formatting for path reports.
//!
//! A [`PathReport`] captures every derived query of a [`WikiPath`] under an
//! [`ExtensionConfig`]; [`OutputFormat`] renders it for people or tools.

mod formatters;

use serde::Serialize;

use crate::config::ExtensionConfig;
use crate::path::{url_encode_file_path, Classification, WikiPath};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting a path report into an output format.
pub trait OutputFormatter {
    /// Format the given report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &PathReport) -> Result<String>;
}

/// Available output formats for path reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned `key: value` lines.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }

    /// Render a report in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::{ExtensionConfig, OutputFormat, PathReport, WikiPath};
    ///
    /// let path = WikiPath::new("/wiki/Home.md");
    /// let report = PathReport::new(&path, &ExtensionConfig::default());
    /// let json = OutputFormat::Json.render(&report).unwrap();
    /// assert!(json.contains("\"file_name\": \"Home.md\""));
    /// ```
    pub fn render(&self, report: &PathReport) -> Result<String> {
        self.create_formatter().format(report)
    }
}

/// Snapshot of a path's components and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The string the path was built from.
    pub raw: String,
    /// The normalized path.
    pub full_path: String,
    /// The normalized path without extension.
    pub file_path_no_ext: String,
    /// Directory part, including its trailing slash.
    pub directory: String,
    /// File name including extension.
    pub file_name: String,
    /// File name without extension.
    pub file_name_no_ext: String,
    /// Extension without the dot.
    pub extension: String,
    /// Whether the file name has an extension.
    pub has_extension: bool,
    /// Whether the normalized path is empty.
    pub is_empty: bool,
    /// Whether the path is the root `/`.
    pub is_root: bool,
    /// Whether the path contains a space.
    pub contains_spaces: bool,
    /// Whether the path contains a `#`.
    pub contains_anchor: bool,
    /// Prefix classification of the normalized path.
    pub classification: Classification,
    /// Extension is an image extension.
    pub is_image: bool,
    /// Extension is a markdown extension.
    pub is_markdown: bool,
    /// Extension is a wiki page extension.
    pub is_wiki_page: bool,
    /// URL-encoded form for use in a link.
    pub url_encoded: String,
}

impl PathReport {
    /// Build a report for `path` classified against `config`.
    #[must_use]
    pub fn new(path: &WikiPath, config: &ExtensionConfig) -> Self {
        Self {
            raw: path.raw().to_string(),
            full_path: path.full_path().to_string(),
            file_path_no_ext: path.file_path_no_ext().to_string(),
            directory: path.directory().to_string(),
            file_name: path.file_name().to_string(),
            file_name_no_ext: path.file_name_no_ext().to_string(),
            extension: path.extension().to_string(),
            has_extension: path.has_extension(),
            is_empty: path.is_empty(),
            is_root: path.is_root(),
            contains_spaces: path.contains_spaces(),
            contains_anchor: path.contains_anchor(),
            classification: path.classification(),
            is_image: path.is_image_extension(config),
            is_markdown: path.is_markdown_extension(config),
            is_wiki_page: path.is_wiki_page_extension(config),
            url_encoded: url_encode_file_path(path.full_path()),
        }
    }
}
