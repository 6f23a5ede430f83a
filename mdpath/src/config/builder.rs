//! Builder for assembling the effective configuration.
//!
//! Layers are applied lowest to highest: user file, project file,
//! environment, programmatic overrides. The result is validated once.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, ExtensionConfig};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for loading configuration with various options.
///
/// # Examples
///
/// ```
/// use mdpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { ignore_case: Some(false), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.ignore_case, Some(false));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory the project configuration search starts from.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load the user configuration from `dir` instead of `~/.mdpath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Skip loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined, a
    /// configuration file cannot be read or parsed, an environment variable
    /// is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Build and resolve straight to the extension sets used for classification.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigBuilder::build`].
    pub fn build_extensions(self) -> Result<ExtensionConfig> {
        Ok(self.build()?.extension_config())
    }
}
