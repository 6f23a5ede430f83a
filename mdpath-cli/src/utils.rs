//! Utility functions for CLI operations.
//!
//! Shared option handling and configuration loading for the commands.

use crate::error::CliError;
use mdpath::config::{Config, ConfigBuilder, ExtensionConfig};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user `config.yaml`.
    pub config_dir: Option<PathBuf>,

    /// Compare extensions case-sensitively, overriding configuration.
    pub case_sensitive: bool,
}

/// Load the layered configuration and resolve the extension sets.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Project `.mdpath.yaml`, then user `config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_extension_config(global: &GlobalOptions) -> Result<ExtensionConfig, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    if global.case_sensitive {
        builder = builder.with_config(Config {
            ignore_case: Some(false),
            ..Default::default()
        });
    }

    let extensions = builder.build_extensions()?;
    log::debug!(
        "extensions: image={:?} markdown={:?} wiki_page={:?} ignore_case={}",
        extensions.image,
        extensions.markdown,
        extensions.wiki_page,
        extensions.ignore_case
    );

    Ok(extensions)
}
