//! Error types for the mdpath library.
//!
//! Path operations never fail; every string is a valid (if odd) path. Errors
//! only arise when loading configuration or parsing settings, and are
//! modelled here with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an mdpath error.
///
/// # Examples
///
/// ```
/// use mdpath::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mdpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid YAML for the schema.
    #[error("invalid configuration file {}: {source}", path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A report could not be rendered as YAML.
    #[error("YAML output error: {0}")]
    YamlOutput(#[source] serde_yaml::Error),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    NoHomeDirectory,
}
