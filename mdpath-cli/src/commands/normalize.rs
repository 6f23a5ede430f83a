//! Command to print the normalized form of paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mdpath::normalize;

/// Print the normalized form of each path, one per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for path in &self.paths {
            println!("{}", normalize(path));
        }
        Ok(())
    }
}
