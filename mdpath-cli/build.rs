//! Build script for mdpath-cli.
//!
//! Generates the `mdpath.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here as well.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("mdpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect, join and relativize wiki and markdown link paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding the user config.yaml")
                .value_name("DIR")
                .global(true)
                .env("MDPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("case-sensitive")
                .long("case-sensitive")
                .help("Compare extensions case-sensitively")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("info").about("Show the components and classification of a path"),
            Command::new("join").about("Append segments to a base path"),
            Command::new("relative").about("Compute the link from one document to another"),
            Command::new("encode").about("URL-encode a path for use in a link"),
            Command::new("normalize").about("Print the normalized form of each path"),
            Command::new("check").about("Exit 0 if a path is of the given kind, 1 otherwise"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("mdpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");

    Ok(())
}
