//! Input adapters supplying raw path strings.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::info::WikiPath;

/// Anything that can hand over a raw path string.
///
/// Editor file handles, parsed documents and similar types implement this to
/// construct a [`WikiPath`] without the path code knowing about them.
///
/// # Examples
///
/// ```
/// use mdpath::{PathSource, WikiPath};
/// use std::borrow::Cow;
///
/// struct OpenDocument {
///     location: String,
/// }
///
/// impl PathSource for OpenDocument {
///     fn path_string(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.location)
///     }
/// }
///
/// let doc = OpenDocument { location: "/wiki/Home.md".to_string() };
/// assert_eq!(WikiPath::from_source(&doc).file_name_no_ext(), "Home");
/// ```
pub trait PathSource {
    /// The raw (not yet normalized) path string.
    fn path_string(&self) -> Cow<'_, str>;
}

impl PathSource for str {
    fn path_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl PathSource for String {
    fn path_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

// Non UTF-8 bytes are replaced; separators are taken as they are
impl PathSource for Path {
    fn path_string(&self) -> Cow<'_, str> {
        self.to_string_lossy()
    }
}

impl PathSource for PathBuf {
    fn path_string(&self) -> Cow<'_, str> {
        self.as_path().to_string_lossy()
    }
}

impl PathSource for WikiPath {
    fn path_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.full_path())
    }
}
