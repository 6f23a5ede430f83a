//! Relative link computation between two paths.
//!
//! The computation is purely lexical: the longest common prefix of the two
//! strings is found, cut back to its last `/`, and one `../` is emitted for
//! every directory of `from` below that point. Both paths are expected to be
//! rooted the same way; mixing a URI with a plain path is not detected.

/// Compute the link from the document at `from` to the target at `to`.
///
/// With `with_prefix`, the result climbs out of `from`'s directories with
/// `../` before descending into `to`. Without it, only the part of `to` below
/// the common directory is returned, which is a valid link only when both
/// paths already share that directory.
///
/// # Examples
///
/// ```
/// use mdpath::relative_path;
///
/// assert_eq!(relative_path("/a/b/c.md", "/a/b/d.md", true), "d.md");
/// assert_eq!(relative_path("/a/b/c.md", "/a/x/d.md", true), "../x/d.md");
/// assert_eq!(relative_path("/a/b/c.md", "/a/b/c.md", true), "c.md");
///
/// // Without prefix only the tail below the shared directory remains
/// assert_eq!(relative_path("/a/b/c.md", "/a/x/d.md", false), "x/d.md");
/// ```
#[must_use]
pub fn relative_path(from: &str, to: &str, with_prefix: bool) -> String {
    let mut last_slash = None;
    for (i, (f, t)) in from.bytes().zip(to.bytes()).enumerate() {
        if f != t {
            break;
        }
        if f == b'/' {
            last_slash = Some(i);
        }
    }

    // '/' is ASCII, so the byte after it is always a char boundary
    let tail_start = last_slash.map_or(0, |i| i + 1);
    let tail = &to[tail_start..];

    if !with_prefix {
        return tail.to_string();
    }

    let climbs = from[tail_start..].matches('/').count();
    let mut result = "../".repeat(climbs);
    result.push_str(tail);
    result
}
