//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "mdpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Enable with:  eval \"$(mdpath completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   mdpath completions zsh > ~/.zsh/completions/_mdpath");
                }
                Shell::Fish => {
                    eprintln!("#   mdpath completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("#   mdpath completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
