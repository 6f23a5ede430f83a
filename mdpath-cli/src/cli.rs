//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, EncodeCommand, InfoCommand, JoinCommand, NormalizeCommand,
    RelativeCommand, ValidateCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for wiki and markdown link paths.
#[derive(Parser)]
#[command(name = "mdpath")]
#[command(
    version,
    about = "Inspect, join and relativize wiki and markdown link paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the user config.yaml
    #[arg(long, value_name = "DIR", global = true, env = "MDPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Compare extensions case-sensitively
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            config_dir: self.config_dir.clone(),
            case_sensitive: self.case_sensitive,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the components and classification of a path
    Info(InfoCommand),

    /// Append segments to a base path
    Join(JoinCommand),

    /// Compute the link from one document to another
    Relative(RelativeCommand),

    /// URL-encode a path for use in a link
    Encode(EncodeCommand),

    /// Print the normalized form of each path
    Normalize(NormalizeCommand),

    /// Exit 0 if a path is of the given kind, 1 otherwise
    Check(CheckCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mdpath", "encode", "a b.md", "--case-sensitive"]).unwrap();
        assert!(cli.global_options().case_sensitive);
        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn test_config_dir_flag() {
        let cli =
            Cli::try_parse_from(["mdpath", "--config-dir", "/tmp/conf", "normalize", "a/"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/conf")));
    }
}
