//! Main entry point for the mdpath CLI.
//!
//! Commands:
//! - `info`: Show the components and classification of a path
//! - `join`: Append segments to a base path
//! - `relative`: Compute the link from one document to another
//! - `encode`: URL-encode a path for a link
//! - `normalize`: Print normalized paths
//! - `check`: Exit 0 if a path is of a given kind
//! - `validate`: Validate a configuration file

use clap::Parser;
use mdpath_cli::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let level = mdpath::init_logger(cli.verbose, cli.quiet);
    log::debug!("log level: {level}");

    let global = cli.global_options();

    let result = match cli.command {
        Command::Info(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Relative(cmd) => cmd.execute(&global),
        Command::Encode(cmd) => cmd.execute(&global),
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
