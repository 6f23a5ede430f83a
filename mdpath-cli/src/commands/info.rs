//! Command to show the components and classification of a path.

use crate::error::CliError;
use crate::utils::{load_extension_config, GlobalOptions};
use clap::{Args, ValueEnum};
use mdpath::{OutputFormat, PathReport, WikiPath};

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned key/value lines
    Human,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Show the components and classification of a path.
#[derive(Args)]
pub struct InfoCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let extensions = load_extension_config(global)?;
        let path = WikiPath::new(self.path);
        let report = PathReport::new(&path, &extensions);

        let rendered = OutputFormat::from(self.format).render(&report)?;
        println!("{}", rendered.trim_end());

        Ok(())
    }
}
