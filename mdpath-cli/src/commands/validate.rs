//! Command to validate an mdpath configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mdpath::config::{ConfigLoader, ConfigValidator};
use mdpath::Error as LibError;
use std::path::PathBuf;

/// Validate an mdpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            // An unreadable file is an I/O failure, not an invalid config
            Err(LibError::ConfigRead { source, .. }) => return Err(source.into()),
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
