//! Configuration system for mdpath.
//!
//! Configuration decides which file extensions count as images, markdown
//! documents and wiki pages, and whether extensions compare case-insensitively.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (MDPATH_*)
//! 3. Project config (nearest `.mdpath.yaml` walking up)
//! 4. User config (`~/.mdpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use mdpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let extensions = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/wiki"))
//!     .build_extensions()
//!     .unwrap();
//!
//! println!("images: {:?}", extensions.image);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ExtensionConfig};
pub use validator::ConfigValidator;
