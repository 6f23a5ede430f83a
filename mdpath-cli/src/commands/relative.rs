//! Command to compute the link from one document to another.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use mdpath::{relative_path, url_encode_file_path, WikiPath};

/// Compute the link from the document FROM to the target TO.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path of the document containing the link
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Path of the link target
    #[arg(value_name = "TO")]
    pub to: String,

    /// Omit the leading ../ segments
    #[arg(long)]
    pub no_prefix: bool,

    /// URL-encode the result
    #[arg(long)]
    pub encode: bool,
}

impl RelativeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let from = WikiPath::new(self.from);
        let to = WikiPath::new(self.to);

        if from.is_uri() != to.is_uri() {
            log::warn!("mixing a URI and a plain path; the result is only lexical");
        }

        let link = relative_path(from.full_path(), to.full_path(), !self.no_prefix);
        if self.encode {
            println!("{}", url_encode_file_path(&link));
        } else {
            println!("{link}");
        }

        Ok(())
    }
}
