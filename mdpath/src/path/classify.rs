//! Prefix-table classification of path strings.
//!
//! Every predicate takes `impl Into<Option<&str>>`, so it can be called with a
//! plain `&str` or with an `Option<&str>`; an absent path is never remote,
//! absolute, relative, local or a URI.
//!
//! A path may satisfy several predicates at once (`https://...` is remote, a
//! URI and absolute), but [`is_absolute`] and [`is_relative`] are exclusive for
//! any present path.

use serde::Serialize;

use crate::config::ExtensionConfig;

/// Prefixes of paths that resolve to external resources.
pub const REMOTE_PREFIXES: &[&str] = &["http://", "ftp://", "https://", "mailto:"];

/// Prefixes of URI paths (`file://` plus every remote prefix).
pub const URI_PREFIXES: &[&str] = &["file://", "http://", "ftp://", "https://", "mailto:"];

/// Prefixes that force a path to be relative. None are defined; relative is
/// the absence of an absolute prefix.
pub const RELATIVE_PREFIXES: &[&str] = &[];

/// Prefixes of paths that resolve locally.
pub const LOCAL_PREFIXES: &[&str] = &["file:", "/"];

/// Prefixes of paths that need no resolution against a base.
pub const ABSOLUTE_PREFIXES: &[&str] = &["/", "file://", "http://", "ftp://", "https://", "mailto:"];

/// Image extensions recognized when no configuration says otherwise.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Markdown extensions recognized when no configuration says otherwise.
///
/// Wiki pages use the same set by default.
pub const DEFAULT_MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mkd"];

fn starts_with_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// True if the path points at an external resource (`http://`, `https://`,
/// `ftp://` or `mailto:`).
///
/// # Examples
///
/// ```
/// use mdpath::path::classify::is_remote;
///
/// assert!(is_remote("mailto:someone@example.com"));
/// assert!(!is_remote("file:///tmp/a.md"));
/// assert!(!is_remote(None));
/// ```
#[must_use]
pub fn is_remote<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into()
        .is_some_and(|p| starts_with_any(p, REMOTE_PREFIXES))
}

/// True if the path is a URI (`file://` or any remote prefix).
#[must_use]
pub fn is_uri<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into().is_some_and(|p| starts_with_any(p, URI_PREFIXES))
}

/// True if the path needs no resolution: it starts with `/` or is a URI.
///
/// # Examples
///
/// ```
/// use mdpath::path::classify::is_absolute;
///
/// assert!(is_absolute("/wiki/Home.md"));
/// assert!(is_absolute("file:///wiki/Home.md"));
/// assert!(!is_absolute("Home.md"));
/// ```
#[must_use]
pub fn is_absolute<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into()
        .is_some_and(|p| starts_with_any(p, ABSOLUTE_PREFIXES))
}

/// True if the path must be resolved against a base: present and not absolute.
#[must_use]
pub fn is_relative<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into()
        .is_some_and(|p| starts_with_any(p, RELATIVE_PREFIXES) || !is_absolute(p))
}

/// True if the path resolves locally: `file:` or `/` prefixed, or relative.
///
/// # Examples
///
/// ```
/// use mdpath::path::classify::is_local;
///
/// assert!(is_local("file:notes.md"));
/// assert!(is_local("notes.md"));
/// assert!(!is_local("https://example.com/notes.md"));
/// ```
#[must_use]
pub fn is_local<'a>(path: impl Into<Option<&'a str>>) -> bool {
    path.into()
        .is_some_and(|p| starts_with_any(p, LOCAL_PREFIXES) || is_relative(p))
}

/// Compare two strings, optionally ignoring (Unicode) case.
pub(crate) fn eq_ignore_case(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    } else {
        a == b
    }
}

/// True if `ext` (without dot) is one of `extensions`.
///
/// # Examples
///
/// ```
/// use mdpath::path::classify::is_extension_in;
///
/// assert!(is_extension_in("PNG", true, &["png", "gif"]));
/// assert!(!is_extension_in("PNG", false, &["png", "gif"]));
/// ```
#[must_use]
pub fn is_extension_in<S: AsRef<str>>(ext: &str, ignore_case: bool, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|candidate| eq_ignore_case(candidate.as_ref(), ext, ignore_case))
}

/// True if `ext` (without dot) is a configured image extension.
#[must_use]
pub fn is_image_extension(ext: &str, config: &ExtensionConfig) -> bool {
    is_extension_in(ext, config.ignore_case, &config.image)
}

/// True if `ext` (without dot) is a configured markdown extension.
#[must_use]
pub fn is_markdown_extension(ext: &str, config: &ExtensionConfig) -> bool {
    is_extension_in(ext, config.ignore_case, &config.markdown)
}

/// True if `ext` (without dot) is a configured wiki page extension.
#[must_use]
pub fn is_wiki_page_extension(ext: &str, config: &ExtensionConfig) -> bool {
    is_extension_in(ext, config.ignore_case, &config.wiki_page)
}

/// All prefix-table predicates evaluated for one path.
///
/// # Examples
///
/// ```
/// use mdpath::Classification;
///
/// let c = Classification::of("https://example.com/x.md");
/// assert!(c.remote && c.uri && c.absolute);
/// assert!(!c.relative && !c.local);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Classification {
    /// See [`is_remote`].
    pub remote: bool,
    /// See [`is_uri`].
    pub uri: bool,
    /// See [`is_absolute`].
    pub absolute: bool,
    /// See [`is_relative`].
    pub relative: bool,
    /// See [`is_local`].
    pub local: bool,
}

impl Classification {
    /// Classify a path string; `None` classifies as all-false.
    #[must_use]
    pub fn of<'a>(path: impl Into<Option<&'a str>>) -> Self {
        let path = path.into();
        Self {
            remote: is_remote(path),
            uri: is_uri(path),
            absolute: is_absolute(path),
            relative: is_relative(path),
            local: is_local(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_prefixes() {
        assert!(is_remote("http://a.com"));
        assert!(is_remote("https://a.com"));
        assert!(is_remote("ftp://a.com"));
        assert!(is_remote("mailto:me@a.com"));
        assert!(!is_remote("file:///a"));
        assert!(!is_remote("/a"));
        assert!(!is_remote("a"));
    }

    #[test]
    fn test_uri_includes_file_scheme() {
        assert!(is_uri("file:///a.md"));
        assert!(is_uri("https://a.com"));
        assert!(!is_uri("file:a.md"));
        assert!(!is_uri("/a.md"));
    }

    #[test]
    fn test_absolute() {
        assert!(is_absolute("/"));
        assert!(is_absolute("/a/b"));
        assert!(is_absolute("file:///a"));
        assert!(is_absolute("mailto:x"));
        assert!(!is_absolute(""));
        assert!(!is_absolute("a/b"));
        assert!(!is_absolute("../a"));
        assert!(!is_absolute("file:a"));
    }

    #[test]
    fn test_relative() {
        assert!(is_relative(""));
        assert!(is_relative("a/b"));
        assert!(is_relative("file:a"));
        assert!(!is_relative("/a"));
        assert!(!is_relative("https://a"));
    }

    #[test]
    fn test_local() {
        assert!(is_local("/a"));
        assert!(is_local("file:a"));
        assert!(is_local("file:///a"));
        assert!(is_local("a"));
        assert!(!is_local("http://a"));
        assert!(!is_local("mailto:a"));
    }

    #[test]
    fn test_absent_path_is_nothing() {
        assert!(!is_remote(None));
        assert!(!is_uri(None));
        assert!(!is_absolute(None));
        assert!(!is_relative(None));
        assert!(!is_local(None));
        assert_eq!(Classification::of(None), Classification::default());
    }

    #[test]
    fn test_option_some_matches_plain() {
        assert_eq!(Classification::of(Some("/a")), Classification::of("/a"));
    }

    #[test]
    fn test_is_extension_in_case() {
        assert!(is_extension_in("JPG", true, &["png", "jpg"]));
        assert!(!is_extension_in("JPG", false, &["png", "jpg"]));
        assert!(is_extension_in("jpg", false, &["png", "jpg"]));
        assert!(!is_extension_in("", true, &["png", "jpg"]));
    }

    #[test]
    fn test_is_extension_in_owned_list() {
        let list = vec!["md".to_string(), "mkd".to_string()];
        assert!(is_extension_in("MKD", true, &list));
    }

    #[test]
    fn test_category_helpers_use_config() {
        let config = ExtensionConfig::default();
        assert!(is_image_extension("gif", &config));
        assert!(is_markdown_extension("Markdown", &config));
        assert!(is_wiki_page_extension("md", &config));
        assert!(!is_image_extension("md", &config));

        let custom = ExtensionConfig {
            image: vec!["svg".to_string()],
            ..ExtensionConfig::default()
        };
        assert!(is_image_extension("SVG", &custom));
        assert!(!is_image_extension("png", &custom));
    }

    #[test]
    fn test_eq_ignore_case_unicode() {
        assert!(eq_ignore_case("ÄBC", "äbc", true));
        assert!(!eq_ignore_case("ÄBC", "äbc", false));
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Exactly one of absolute/relative holds for any present path
            #[test]
            fn absolute_relative_exclusive(s in ".{0,24}") {
                prop_assert_ne!(is_absolute(s.as_str()), is_relative(s.as_str()));
            }

            /// URIs are always absolute and never relative
            #[test]
            fn uri_implies_absolute(
                prefix in prop::sample::select(URI_PREFIXES),
                rest in "[a-z/.]{0,12}",
            ) {
                let path = format!("{prefix}{rest}");
                let c = Classification::of(path.as_str());
                prop_assert!(c.uri);
                prop_assert!(c.absolute);
                prop_assert!(!c.relative);
            }

            /// Remote paths are URIs but not local
            #[test]
            fn remote_is_uri_not_local(
                prefix in prop::sample::select(REMOTE_PREFIXES),
                rest in "[a-z/.]{0,12}",
            ) {
                let path = format!("{prefix}{rest}");
                let c = Classification::of(path.as_str());
                prop_assert!(c.remote && c.uri);
                prop_assert!(!c.local);
            }
        }
    }
}
