//! Environment variable handling for configuration overrides.
//!
//! This module provides support for MDPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Comma-separated image extensions.
pub const IMAGE_EXTENSIONS_ENV: &str = "MDPATH_IMAGE_EXTENSIONS";
/// Comma-separated markdown extensions.
pub const MARKDOWN_EXTENSIONS_ENV: &str = "MDPATH_MARKDOWN_EXTENSIONS";
/// Comma-separated wiki page extensions.
pub const WIKI_PAGE_EXTENSIONS_ENV: &str = "MDPATH_WIKI_PAGE_EXTENSIONS";
/// Boolean case-insensitivity switch.
pub const IGNORE_CASE_ENV: &str = "MDPATH_IGNORE_CASE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use mdpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `MDPATH_IGNORE_CASE` is not a recognized boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(list) = env::var(IMAGE_EXTENSIONS_ENV) {
            config.image_extensions = Some(Self::parse_list(&list));
        }

        if let Ok(list) = env::var(MARKDOWN_EXTENSIONS_ENV) {
            config.markdown_extensions = Some(Self::parse_list(&list));
        }

        if let Ok(list) = env::var(WIKI_PAGE_EXTENSIONS_ENV) {
            config.wiki_page_extensions = Some(Self::parse_list(&list));
        }

        if let Ok(val) = env::var(IGNORE_CASE_ENV) {
            config.ignore_case = Some(Self::parse_bool(IGNORE_CASE_ENV, &val)?);
        }

        Ok(())
    }

    /// Split a comma-separated list, trimming entries and dropping empty ones.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
