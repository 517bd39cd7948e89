//! `Location` header construction for redirects.

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped before a stored URL is sent as a redirect target.
///
/// Non-ASCII characters are always escaped as UTF-8. Existing `%` escapes
/// are left alone.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS.add(b' ');

/// Builds a `Location` value for `original_url`.
///
/// Stored URLs are opaque text and may contain control characters, spaces
/// or non-ASCII characters that cannot appear in a header. Those are
/// percent-encoded; URLs made only of visible ASCII pass through unchanged.
pub fn location_header(original_url: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let encoded = utf8_percent_encode(original_url, LOCATION_ENCODE_SET).to_string();
    HeaderValue::try_from(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_is_unchanged() {
        let value = location_header("https://example.com/a?x=1&y=%20#frag").unwrap();
        assert_eq!(value, "https://example.com/a?x=1&y=%20#frag");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let value = location_header("https://example.com/a\nb\r\tc\u{7f}").unwrap();
        assert_eq!(value, "https://example.com/a%0Ab%0D%09c%7F");
    }

    #[test]
    fn test_spaces_and_non_ascii_are_escaped() {
        let value = location_header("https://example.com/grüße dich").unwrap();
        assert_eq!(value, "https://example.com/gr%C3%BC%C3%9Fe%20dich");
    }
}
