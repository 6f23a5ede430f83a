//! Library exports for mdpath-cli.
//!
//! The binary in `main.rs` drives these modules; exposing them as a library
//! also lets tests parse arguments without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
