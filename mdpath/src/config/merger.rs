//! Configuration merging and precedence handling.
//!
//! Extension lists are replaced wholesale, never unioned: a higher-precedence
//! source that names `image_extensions` defines the complete image set.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use mdpath::config::{Config, ConfigMerger};
///
/// let low = Config { ignore_case: Some(true), ..Default::default() };
/// let high = Config { ignore_case: Some(false), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.ignore_case, Some(false));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::trace!(
                "merging configuration from {} (precedence {})",
                source.path.display(),
                source.precedence
            );
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target when set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.image_extensions.is_some() {
            target.image_extensions.clone_from(&source.image_extensions);
        }

        if source.markdown_extensions.is_some() {
            target
                .markdown_extensions
                .clone_from(&source.markdown_extensions);
        }

        if source.wiki_page_extensions.is_some() {
            target
                .wiki_page_extensions
                .clone_from(&source.wiki_page_extensions);
        }

        if source.ignore_case.is_some() {
            target.ignore_case = source.ignore_case;
        }
    }
}
