#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # mdpath
//!
//! Pure path arithmetic for wiki and markdown link targets.
//!
//! This library classifies, decomposes, normalizes, joins and relativizes
//! forward-slash path strings: local paths, URIs and wiki-style virtual
//! paths. It never touches the filesystem; every answer is computed from the
//! path string alone.
//!
//! ## Core Types
//!
//! - [`WikiPath`]: Immutable normalized path with name/extension boundaries
//! - [`PathValue`]: Trait for path-like types that can be appended to
//! - [`ExtensionConfig`]: Recognized image/markdown/wiki-page extensions
//! - [`Error`] and [`Result`]: Error handling types (configuration only)
//! - [`LogLevel`] and [`init_logger`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use mdpath::{PathValue, WikiPath};
//!
//! let page = WikiPath::from("/wiki/guide/./Setup.md");
//! assert_eq!(page.full_path(), "/wiki/guide/Setup.md");
//! assert_eq!(page.directory(), "/wiki/guide/");
//! assert_eq!(page.file_name_no_ext(), "Setup");
//! assert_eq!(page.extension(), "md");
//!
//! let image = page.append(["..", "images", "logo.png"]);
//! assert_eq!(image.full_path(), "/wiki/guide/images/logo.png");
//!
//! let link = mdpath::relative_path(page.full_path(), "/wiki/api/Index.md", true);
//! assert_eq!(link, "../api/Index.md");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, ExtensionConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use output::{OutputFormat, PathReport};
pub use path::{
    append_parts, normalize, relative_path, url_encode_file_path, Classification, PathSource,
    PathValue, WikiPath,
};
