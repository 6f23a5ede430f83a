//! The path value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::classify;
use super::normalize::normalize;
use super::source::PathSource;
use crate::config::ExtensionConfig;

/// Something to search for inside a path: a `char` or a string slice.
pub trait Needle {
    /// True if `haystack` contains this needle.
    fn found_in(&self, haystack: &str, ignore_case: bool) -> bool;
}

impl Needle for char {
    fn found_in(&self, haystack: &str, ignore_case: bool) -> bool {
        if ignore_case {
            haystack.chars().any(|h| chars_eq_ignore_case(h, *self))
        } else {
            haystack.contains(*self)
        }
    }
}

impl Needle for &str {
    fn found_in(&self, haystack: &str, ignore_case: bool) -> bool {
        if ignore_case {
            self.is_empty()
                || haystack
                    .char_indices()
                    .any(|(i, _)| starts_with_ignore_case(&haystack[i..], self))
        } else {
            haystack.contains(*self)
        }
    }
}

impl Needle for String {
    fn found_in(&self, haystack: &str, ignore_case: bool) -> bool {
        self.as_str().found_in(haystack, ignore_case)
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Char-by-char case-insensitive prefix test.
fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut rest = haystack.chars();
    prefix
        .chars()
        .all(|p| rest.next().is_some_and(|h| chars_eq_ignore_case(h, p)))
}

/// An immutable, normalized path with precomputed name boundaries.
///
/// The raw input is normalized once at construction (see
/// [`normalize`](super::normalize::normalize)); every query is then a slice of
/// the normalized string:
///
/// ```text
///  /wiki/guide/Setup.md
///  |-----------|-----|--|
///   directory   name  extension
///              ^     ^
///     name_start     name_end
/// ```
///
/// Equality, ordering and hashing use the normalized string only.
///
/// # Examples
///
/// ```
/// use mdpath::WikiPath;
///
/// let path = WikiPath::new("./wiki/guide/Setup.md");
/// assert_eq!(path.raw(), "./wiki/guide/Setup.md");
/// assert_eq!(path.full_path(), "wiki/guide/Setup.md");
/// assert_eq!(path.directory(), "wiki/guide/");
/// assert_eq!(path.file_name(), "Setup.md");
/// assert_eq!(path.file_name_no_ext(), "Setup");
/// assert_eq!(path.extension(), "md");
/// assert_eq!(path.extension_with_dot(), ".md");
/// assert_eq!(path.file_path_no_ext(), "wiki/guide/Setup");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WikiPath {
    raw: String,
    full_path: String,
    name_start: usize,
    name_end: usize,
}

impl WikiPath {
    /// Create a path from a raw string.
    ///
    /// Never fails; any string, including the empty string, yields a valid path.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let full_path = normalize(&raw);

        let name_start = match full_path.rfind('/') {
            None => 0,
            // A path ending in '/' has an empty file name
            Some(sep) if sep + 1 == full_path.len() => sep,
            Some(sep) => sep + 1,
        };

        let name_end = match full_path.rfind('.') {
            Some(dot) if dot > name_start => dot,
            _ => full_path.len(),
        };

        Self {
            raw,
            full_path,
            name_start,
            name_end,
        }
    }

    /// Create a path from anything that can supply a path string.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::WikiPath;
    /// use std::path::Path;
    ///
    /// let path = WikiPath::from_source(Path::new("/wiki/Home.md"));
    /// assert_eq!(path.file_name(), "Home.md");
    /// ```
    #[must_use]
    pub fn from_source<S: PathSource + ?Sized>(source: &S) -> Self {
        Self::new(source.path_string().into_owned())
    }

    /// The string this path was created from, before normalization.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized path.
    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// The normalized path without its extension (and dot).
    #[must_use]
    pub fn file_path_no_ext(&self) -> &str {
        &self.full_path[..self.name_end]
    }

    /// Everything before the file name, including the trailing `/`.
    ///
    /// Empty when the path has no directory part.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.full_path[..self.name_start]
    }

    /// The file name including its extension.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.full_path[self.name_start..]
    }

    /// The file name without its extension.
    #[must_use]
    pub fn file_name_no_ext(&self) -> &str {
        &self.full_path[self.name_start..self.name_end]
    }

    /// The extension without the leading dot, or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        if self.has_extension() {
            &self.full_path[self.name_end + 1..]
        } else {
            ""
        }
    }

    /// The extension including the leading dot, or `""`.
    #[must_use]
    pub fn extension_with_dot(&self) -> &str {
        &self.full_path[self.name_end..]
    }

    /// True if the file name has a non-empty extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.name_end + 1 < self.full_path.len()
    }

    /// True if the normalized path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_path.is_empty()
    }

    /// True if the normalized path is `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.full_path == "/"
    }

    /// Search the whole path.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::WikiPath;
    ///
    /// let path = WikiPath::from("/Wiki/Page.md");
    /// assert!(path.contains("wiki", true));
    /// assert!(!path.contains("wiki", false));
    /// assert!(path.contains('P', false));
    /// ```
    #[must_use]
    pub fn contains<N: Needle>(&self, needle: N, ignore_case: bool) -> bool {
        needle.found_in(&self.full_path, ignore_case)
    }

    /// Search only the directory part.
    #[must_use]
    pub fn directory_contains<N: Needle>(&self, needle: N, ignore_case: bool) -> bool {
        needle.found_in(self.directory(), ignore_case)
    }

    /// Search only the file name part.
    #[must_use]
    pub fn file_name_contains<N: Needle>(&self, needle: N, ignore_case: bool) -> bool {
        needle.found_in(self.file_name(), ignore_case)
    }

    /// True if the path contains a space.
    #[must_use]
    pub fn contains_spaces(&self) -> bool {
        self.contains(' ', false)
    }

    /// True if the path contains `#`, i.e. an anchor reference.
    #[must_use]
    pub fn contains_anchor(&self) -> bool {
        self.contains('#', false)
    }

    /// True if the directory part contains a space.
    #[must_use]
    pub fn directory_contains_spaces(&self) -> bool {
        self.directory_contains(' ', false)
    }

    /// True if the directory part contains `#`.
    #[must_use]
    pub fn directory_contains_anchor(&self) -> bool {
        self.directory_contains('#', false)
    }

    /// True if the file name contains a space.
    #[must_use]
    pub fn file_name_contains_spaces(&self) -> bool {
        self.file_name_contains(' ', false)
    }

    /// True if the file name contains `#`.
    #[must_use]
    pub fn file_name_contains_anchor(&self) -> bool {
        self.file_name_contains('#', false)
    }

    /// True if this path's extension is one of `extensions`.
    #[must_use]
    pub fn is_extension_in<S: AsRef<str>>(&self, ignore_case: bool, extensions: &[S]) -> bool {
        classify::is_extension_in(self.extension(), ignore_case, extensions)
    }

    /// True if the path has a configured image extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::{ExtensionConfig, WikiPath};
    ///
    /// let photo = WikiPath::from("img/photo.JPG");
    /// assert!(photo.is_image_extension(&ExtensionConfig::default()));
    ///
    /// let strict = ExtensionConfig { ignore_case: false, ..ExtensionConfig::default() };
    /// assert!(!photo.is_image_extension(&strict));
    /// ```
    #[must_use]
    pub fn is_image_extension(&self, config: &ExtensionConfig) -> bool {
        self.has_extension() && classify::is_image_extension(self.extension(), config)
    }

    /// True if the path has a configured markdown extension.
    #[must_use]
    pub fn is_markdown_extension(&self, config: &ExtensionConfig) -> bool {
        self.has_extension() && classify::is_markdown_extension(self.extension(), config)
    }

    /// True if the path has a configured wiki page extension.
    #[must_use]
    pub fn is_wiki_page_extension(&self, config: &ExtensionConfig) -> bool {
        self.has_extension() && classify::is_wiki_page_extension(self.extension(), config)
    }

    /// See [`classify::is_relative`].
    #[must_use]
    pub fn is_relative(&self) -> bool {
        classify::is_relative(self.full_path.as_str())
    }

    /// See [`classify::is_local`].
    #[must_use]
    pub fn is_local(&self) -> bool {
        classify::is_local(self.full_path.as_str())
    }

    /// See [`classify::is_remote`].
    #[must_use]
    pub fn is_remote(&self) -> bool {
        classify::is_remote(self.full_path.as_str())
    }

    /// See [`classify::is_uri`].
    #[must_use]
    pub fn is_uri(&self) -> bool {
        classify::is_uri(self.full_path.as_str())
    }

    /// See [`classify::is_absolute`].
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        classify::is_absolute(self.full_path.as_str())
    }

    /// All classification flags at once.
    #[must_use]
    pub fn classification(&self) -> classify::Classification {
        classify::Classification::of(self.full_path.as_str())
    }

    /// Replace the extension.
    ///
    /// A leading dot is added when `ext` lacks one. An empty `ext`, or one
    /// equal to the current extension, returns an unchanged copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdpath::WikiPath;
    ///
    /// let page = WikiPath::from("docs/Home.markdown");
    /// assert_eq!(page.with_extension("md").full_path(), "docs/Home.md");
    /// assert_eq!(page.with_extension(".md").full_path(), "docs/Home.md");
    /// assert_eq!(page.with_extension("").full_path(), "docs/Home.markdown");
    /// ```
    #[must_use]
    pub fn with_extension(&self, ext: &str) -> Self {
        if ext.is_empty() || ext == self.extension() || ext == self.extension_with_dot() {
            return self.clone();
        }

        if ext.starts_with('.') {
            Self::new(format!("{}{ext}", self.file_path_no_ext()))
        } else {
            Self::new(format!("{}.{ext}", self.file_path_no_ext()))
        }
    }
}

impl PartialEq for WikiPath {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path
    }
}

impl Eq for WikiPath {}

impl PartialOrd for WikiPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WikiPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_path.cmp(&other.full_path)
    }
}

impl Hash for WikiPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_path.hash(state);
    }
}

impl fmt::Display for WikiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path)
    }
}

impl AsRef<str> for WikiPath {
    fn as_ref(&self) -> &str {
        &self.full_path
    }
}

impl From<&str> for WikiPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WikiPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&std::path::Path> for WikiPath {
    fn from(p: &std::path::Path) -> Self {
        Self::from_source(p)
    }
}
