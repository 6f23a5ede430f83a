//! Command to append segments to a base path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mdpath::{append_parts, WikiPath};

/// Append segments to a base path.
///
/// `..` climbs one directory, `.` and empty segments are skipped.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Segments to append in order
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let joined = append_parts(&self.base, &self.segments, WikiPath::new);
        println!("{joined}");
        Ok(())
    }
}
