//! Command to URL-encode a path for use in a link.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mdpath::{url_encode_file_path, WikiPath};

/// URL-encode a path for use in a link.
///
/// The file name is form-encoded; in the directory only `#` is escaped.
#[derive(Args)]
pub struct EncodeCommand {
    /// Path to encode
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl EncodeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = WikiPath::new(self.path);
        println!("{}", url_encode_file_path(path.full_path()));
        Ok(())
    }
}
