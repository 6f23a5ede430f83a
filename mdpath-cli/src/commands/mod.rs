//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `info`: Show the components and classification of a path
//! - `join`: Append segments to a base path
//! - `relative`: Compute the link from one document to another
//! - `encode`: URL-encode a path for a link
//! - `normalize`: Print normalized paths
//! - `check`: Assert a path is of a given kind
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod encode;
pub mod info;
pub mod join;
pub mod normalize;
pub mod relative;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use encode::EncodeCommand;
pub use info::InfoCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use relative::RelativeCommand;
pub use validate::ValidateCommand;
