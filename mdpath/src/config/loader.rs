//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading mdpath configuration files
//! from the user configuration directory and from the project tree.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the user configuration inside the configuration directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// File name of a project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".mdpath.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use mdpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.mdpath/config.yaml` (precedence 1)
    /// 2. The nearest `.mdpath.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// The `config_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        // Higher precedence last for easier processing
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::default_config_dir() {
                Ok(dir) => dir.join(USER_CONFIG_FILE),
                Err(_) => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded configuration from {}", path.display());

        serde_yaml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The default user configuration directory (`~/.mdpath`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_config_dir() -> Result<PathBuf> {
        let home = home::home_dir().ok_or(Error::NoHomeDirectory)?;
        Ok(home.join(".mdpath"))
    }
}
