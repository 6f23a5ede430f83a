//! Path normalization functions.
//!
//! This module canonicalizes raw path strings by:
//! - Collapsing `/./` to `/`
//! - Dropping a leading `./`
//! - Stripping one trailing `/` unless the path ends in `//` or is the root
//! - Stripping one trailing `.`
//!
//! The pass is repeated until the string no longer changes, so the result is
//! always a fixed point: normalizing it again returns it unchanged.

/// Remove `.` directory references from a path.
///
/// Every `/./` is collapsed to `/` (repeatedly, so `/././` collapses fully)
/// and a single leading `./` is removed.
///
/// # Examples
///
/// ```
/// use mdpath::path::normalize::remove_dot_directory;
///
/// assert_eq!(remove_dot_directory("/a/./b"), "/a/b");
/// assert_eq!(remove_dot_directory("./a/b"), "a/b");
/// assert_eq!(remove_dot_directory("a/././b"), "a/b");
/// ```
#[must_use]
pub fn remove_dot_directory(path: &str) -> String {
    let mut result = path.to_string();
    while result.contains("/./") {
        result = result.replace("/./", "/");
    }

    match result.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => result,
    }
}

/// Single cleanup pass: dot directories, trailing slash, trailing dot.
fn clean_once(path: &str) -> String {
    let mut clean = remove_dot_directory(path);

    // A trailing "//" is significant
    if clean.ends_with('/') && !clean.ends_with("//") {
        clean.pop();
    }

    if clean.ends_with('.') {
        clean.pop();
    }

    clean
}

/// Normalize a raw path string.
///
/// This is the canonical form every [`WikiPath`](super::WikiPath) is built
/// from. It never fails: any input, including the empty string, produces a
/// well-defined result.
///
/// # Examples
///
/// ```
/// use mdpath::path::normalize::normalize;
///
/// assert_eq!(normalize("./docs/./guide/"), "docs/guide");
/// assert_eq!(normalize("/wiki/page."), "/wiki/page");
///
/// // A double trailing slash is preserved
/// assert_eq!(normalize("/wiki//"), "/wiki//");
///
/// // A lone root loses its slash like any other trailing one
/// assert_eq!(normalize("/"), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut current = clean_once(path);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
