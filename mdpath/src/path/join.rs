//! Appending segments to a path.
//!
//! Segments are applied left to right against a running path string:
//!
//! - Leading and trailing `/` are stripped from each segment
//! - A segment other than `..` also loses one trailing `.`
//! - Empty and `.` segments are skipped
//! - `..` replaces the running path with its directory (without the trailing
//!   `/`), so it always climbs from the current directory
//! - Anything else is appended behind exactly one `/`
//!
//! Climbing above the first segment leaves an empty path; it never fails.

use super::info::WikiPath;
use super::normalize::normalize;

/// Path-like values that can be rebuilt from a full path string.
///
/// Implementors get [`append`](PathValue::append) returning their own type.
///
/// # Examples
///
/// ```
/// use mdpath::{PathValue, WikiPath};
///
/// let dir = WikiPath::from("/wiki/guide");
/// assert_eq!(dir.append(["images", "logo.png"]).full_path(), "/wiki/guide/images/logo.png");
/// assert_eq!(dir.append([".."]).full_path(), "/wiki");
/// ```
pub trait PathValue: Sized {
    /// The normalized full path.
    fn full_path(&self) -> &str;

    /// Build a value from a (not necessarily normalized) full path.
    fn from_full_path(full_path: String) -> Self;

    /// Append `parts` to this path, returning a new value of the same type.
    fn append<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        append_parts(self.full_path(), parts, Self::from_full_path)
    }
}

impl PathValue for WikiPath {
    fn full_path(&self) -> &str {
        WikiPath::full_path(self)
    }

    fn from_full_path(full_path: String) -> Self {
        WikiPath::new(full_path)
    }
}

/// Strip the separators and a trailing dot from a single segment.
fn clean_part(part: &str) -> &str {
    let part = part.strip_prefix('/').unwrap_or(part);
    let part = part.strip_suffix('/').unwrap_or(part);
    if part == ".." {
        part
    } else {
        part.strip_suffix('.').unwrap_or(part)
    }
}

/// Move the running path up one directory.
fn pop_directory(path: &str) -> String {
    let parent = WikiPath::new(path);
    let directory = parent.directory();
    let popped = directory.strip_suffix('/').unwrap_or(directory);

    if popped.is_empty() {
        log::trace!("'..' climbed above {path:?}, continuing from an empty path");
    }
    popped.to_string()
}

/// Append `parts` to `base` and build the result with `construct`.
///
/// `base` is normalized first. The constructor lets callers get their own
/// path type back; pass [`WikiPath::new`] for a plain path.
///
/// # Examples
///
/// ```
/// use mdpath::{append_parts, WikiPath};
///
/// let path = append_parts("/wiki/guide/Setup.md", ["..", "api", "./", "Index.md"], WikiPath::new);
/// assert_eq!(path.full_path(), "/wiki/guide/api/Index.md");
///
/// // Joining onto an empty base starts from the first real segment
/// let path = append_parts("", ["a", "b"], WikiPath::new);
/// assert_eq!(path.full_path(), "a/b");
/// ```
pub fn append_parts<T, I, S, F>(base: &str, parts: I, construct: F) -> T
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnOnce(String) -> T,
{
    let mut path = normalize(base);

    for part in parts {
        let part = clean_part(part.as_ref());
        match part {
            "" | "." => {}
            ".." => path = pop_directory(&path),
            _ => {
                if !path.is_empty() && !path.ends_with('/') {
                    path.push('/');
                }
                path.push_str(part);
            }
        }
    }

    construct(path)
}
