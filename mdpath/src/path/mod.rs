//! Path handling for wiki and markdown link targets.
//!
//! This module provides the path value type together with the free functions
//! it is built on, so every rule can be used (and tested) on raw strings
//! without constructing a [`WikiPath`].
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization canonicalizes a raw path string by:
//! - Collapsing `/./` to `/` and dropping a leading `./`
//! - Stripping a single trailing `/` (a trailing `//` is kept as a marker)
//! - Stripping a single trailing `.`
//!
//! Normalization is purely lexical. It does not resolve `..`, follow symlinks
//! or consult the filesystem.
//!
//! ## Classification
//!
//! Paths are classified by prefix tables into remote (`http://`, `mailto:`,
//! ...), URI (remote or `file://`), absolute (`/` or URI), relative (not
//! absolute) and local (`file:`, `/` or relative).
//!
//! ## Joining
//!
//! [`append_parts`] and [`PathValue::append`] add segments to a path, where
//! `.` is ignored and `..` moves up from the current directory.
//!
//! # Examples
//!
//! ```
//! use mdpath::path::{classify, WikiPath};
//!
//! let path = WikiPath::from("docs/a b#intro.md");
//! assert!(path.is_relative());
//! assert!(path.contains_spaces());
//! assert!(path.contains_anchor());
//!
//! assert!(classify::is_remote("https://example.com/page.md"));
//! assert!(!classify::is_remote(None));
//! ```

pub mod classify;
pub mod encode;
mod info;
pub mod join;
pub mod normalize;
pub mod relative;
mod source;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use classify::Classification;
pub use encode::url_encode_file_path;
pub use info::{Needle, WikiPath};
pub use join::{append_parts, PathValue};
pub use normalize::normalize;
pub use relative::relative_path;
pub use source::PathSource;

/// Default extension (with dot) given to new wiki pages.
pub const WIKI_PAGE_EXTENSION: &str = ".md";

/// Extension (with dot) of a wiki repository's home directory.
pub const WIKI_HOME_EXTENSION: &str = ".wiki";

/// File name (without extension) of a wiki's home page.
pub const WIKI_HOME_FILENAME: &str = "Home";
