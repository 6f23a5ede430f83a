//! Command to assert that a path is of a given kind.

use crate::error::CliError;
use crate::utils::{load_extension_config, GlobalOptions};
use clap::{Args, ValueEnum};
use mdpath::{ExtensionConfig, WikiPath};

/// Kind of path to check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathKind {
    /// Extension is a configured image extension
    Image,
    /// Extension is a configured markdown extension
    Markdown,
    /// Extension is a configured wiki page extension
    WikiPage,
    /// Starts with `/` or is a URI
    Absolute,
    /// Not absolute
    Relative,
    /// Resolves locally
    Local,
    /// Points at an external resource
    Remote,
    /// Starts with a URI scheme
    Uri,
}

impl PathKind {
    /// Whether `path` is of this kind. Extension sets are only loaded for
    /// the extension kinds.
    fn holds<F>(self, path: &WikiPath, extensions: F) -> Result<bool, CliError>
    where
        F: FnOnce() -> Result<ExtensionConfig, CliError>,
    {
        Ok(match self {
            Self::Image => path.is_image_extension(&extensions()?),
            Self::Markdown => path.is_markdown_extension(&extensions()?),
            Self::WikiPage => path.is_wiki_page_extension(&extensions()?),
            Self::Absolute => path.is_absolute(),
            Self::Relative => path.is_relative(),
            Self::Local => path.is_local(),
            Self::Remote => path.is_remote(),
            Self::Uri => path.is_uri(),
        })
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Image => "an image",
            Self::Markdown => "a markdown document",
            Self::WikiPage => "a wiki page",
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Uri => "a URI",
        }
    }
}

/// Exit 0 if a path is of the given kind, 1 otherwise.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Kind to check for
    #[arg(long, value_enum)]
    pub kind: PathKind,

    /// Invert the check (fail if the path is of the kind)
    #[arg(long)]
    pub not: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = WikiPath::new(self.path);

        let holds = self.kind.holds(&path, || load_extension_config(global))?;

        if holds != self.not {
            return Ok(());
        }

        let msg = if self.not {
            format!("Check failed: '{path}' is {}", self.kind.describe())
        } else {
            format!("Check failed: '{path}' is not {}", self.kind.describe())
        };
        Err(CliError::SemanticFailure(msg))
    }
}
