//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for mdpath and the
//! resolved [`ExtensionConfig`] handed to the classifier.

use serde::{Deserialize, Serialize};

use crate::path::classify::{DEFAULT_IMAGE_EXTENSIONS, DEFAULT_MARKDOWN_EXTENSIONS};

/// Configuration as read from one source (file, environment or code).
///
/// Every field is optional so sources can be layered; unset fields fall back
/// to lower-precedence sources and finally to the built-in defaults.
///
/// # Examples
///
/// ```
/// use mdpath::config::Config;
///
/// let config: Config = serde_yaml::from_str("image_extensions: [png, svg]\n").unwrap();
/// assert_eq!(config.image_extensions, Some(vec!["png".to_string(), "svg".to_string()]));
/// assert_eq!(config.ignore_case, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extensions (without dot) treated as images.
    pub image_extensions: Option<Vec<String>>,

    /// Extensions (without dot) treated as markdown documents.
    pub markdown_extensions: Option<Vec<String>>,

    /// Extensions (without dot) treated as wiki pages.
    pub wiki_page_extensions: Option<Vec<String>>,

    /// Compare extensions without regard to case.
    pub ignore_case: Option<bool>,
}

impl Config {
    /// Resolve this configuration against the built-in defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::config::Config;
    ///
    /// let resolved = Config::default().extension_config();
    /// assert!(resolved.ignore_case);
    /// assert!(resolved.image.contains(&"png".to_string()));
    /// ```
    #[must_use]
    pub fn extension_config(&self) -> ExtensionConfig {
        let defaults = ExtensionConfig::default();
        ExtensionConfig {
            image: self.image_extensions.clone().unwrap_or(defaults.image),
            markdown: self.markdown_extensions.clone().unwrap_or(defaults.markdown),
            wiki_page: self.wiki_page_extensions.clone().unwrap_or(defaults.wiki_page),
            ignore_case: self.ignore_case.unwrap_or(defaults.ignore_case),
        }
    }
}

/// Recognized extension sets and the case rule used to match them.
///
/// Markdown and wiki pages are separate categories even though they share the
/// same extensions by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionConfig {
    /// Image extensions (without dot).
    pub image: Vec<String>,
    /// Markdown extensions (without dot).
    pub markdown: Vec<String>,
    /// Wiki page extensions (without dot).
    pub wiki_page: Vec<String>,
    /// Compare extensions without regard to case.
    pub ignore_case: bool,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(ToString::to_string).collect::<Vec<_>>();
        Self {
            image: owned(DEFAULT_IMAGE_EXTENSIONS),
            markdown: owned(DEFAULT_MARKDOWN_EXTENSIONS),
            wiki_page: owned(DEFAULT_MARKDOWN_EXTENSIONS),
            ignore_case: true,
        }
    }
}
