//! URL encoding of path file names for use inside links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::info::WikiPath;

/// Characters escaped in a file name: everything except ASCII alphanumerics
/// and `-`, `.`, `_`, `*`. Spaces are handled separately.
const FILE_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

/// Form-encode a file name: UTF-8 percent-encoding with spaces as `+`.
fn encode_file_name(name: &str) -> String {
    name.split(' ')
        .map(|chunk| utf8_percent_encode(chunk, FILE_NAME).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Encode a path for use as a link target.
///
/// Only the file name is percent-encoded. In the directory part just `#` is
/// escaped (as `%23`) so it cannot be mistaken for an anchor; everything else,
/// including `/`, is left as it is.
///
/// # Examples
///
/// ```
/// use mdpath::url_encode_file_path;
///
/// assert_eq!(url_encode_file_path("/wiki/A#B.md"), "/wiki/A%23B.md");
/// assert_eq!(url_encode_file_path("/c#/my page.md"), "/c%23/my+page.md");
/// ```
#[must_use]
pub fn url_encode_file_path(full_path: &str) -> String {
    let path = WikiPath::new(full_path);
    let mut encoded = path.directory().replace('#', "%23");
    encoded.push_str(&encode_file_name(path.file_name()));
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(url_encode_file_path("/wiki/Home.md"), "/wiki/Home.md");
        assert_eq!(url_encode_file_path("a-b_c*d.md"), "a-b_c*d.md");
    }

    #[test]
    fn test_anchor_in_name() {
        assert_eq!(url_encode_file_path("/wiki/A#B.md"), "/wiki/A%23B.md");
    }

    #[test]
    fn test_anchor_in_directory_and_name() {
        assert_eq!(url_encode_file_path("/wi#ki/A#B.md"), "/wi%23ki/A%23B.md");
    }

    #[test]
    fn test_directory_only_escapes_anchor() {
        assert_eq!(
            url_encode_file_path("/my docs/ü/page.md"),
            "/my docs/ü/page.md"
        );
    }

    #[test]
    fn test_name_space_and_specials() {
        assert_eq!(url_encode_file_path("my page?.md"), "my+page%3F.md");
        assert_eq!(url_encode_file_path("a+b&c.md"), "a%2Bb%26c.md");
    }

    #[test]
    fn test_name_utf8() {
        assert_eq!(url_encode_file_path("/w/Ärger.md"), "/w/%C3%84rger.md");
    }

    #[test]
    fn test_input_is_normalized() {
        assert_eq!(url_encode_file_path("./w/./a b/"), "w/a+b");
    }

    #[test]
    fn test_empty() {
        assert_eq!(url_encode_file_path(""), "");
    }
}
