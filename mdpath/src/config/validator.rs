//! Configuration validation.
//!
//! Extensions are stored without the leading dot and must be a single
//! non-empty path-free token.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use mdpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { image_extensions: Some(vec![".png".to_string()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref list) = config.image_extensions {
            Self::validate_extensions("image_extensions", list)?;
        }

        if let Some(ref list) = config.markdown_extensions {
            Self::validate_extensions("markdown_extensions", list)?;
        }

        if let Some(ref list) = config.wiki_page_extensions {
            Self::validate_extensions("wiki_page_extensions", list)?;
        }

        Ok(())
    }

    /// Validate every entry of an extension list.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is empty, starts with a dot, or contains
    /// a slash or whitespace.
    pub fn validate_extensions(field: &str, extensions: &[String]) -> Result<()> {
        for ext in extensions {
            Self::validate_extension(field, ext)?;
        }
        Ok(())
    }

    fn validate_extension(field: &str, ext: &str) -> Result<()> {
        let message = if ext.is_empty() {
            "extension must not be empty".to_string()
        } else if ext.starts_with('.') {
            format!("extension '{ext}' must be given without the leading dot")
        } else if ext.contains('/') {
            format!("extension '{ext}' must not contain '/'")
        } else if ext.chars().any(char::is_whitespace) {
            format!("extension '{ext}' must not contain whitespace")
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            field: field.into(),
            message,
        })
    }
}
