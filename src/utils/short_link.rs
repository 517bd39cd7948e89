//! Composition of externally visible short links.

/// Path segment under which short codes are served.
pub const REDIRECT_PREFIX: &str = "/c/";

/// Builds the public short link for `code`.
///
/// Trailing slashes on `base_url` are ignored, so both
/// `https://s.example.com` and `https://s.example.com/` yield
/// `https://s.example.com/c/{code}`.
pub fn short_link(base_url: &str, code: &str) -> String {
    format!("{}{}{}", base_url.trim_end_matches('/'), REDIRECT_PREFIX, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(
            short_link("http://localhost:8080", "abcXYZ"),
            "http://localhost:8080/c/abcXYZ"
        );
    }

    #[test]
    fn test_short_link_trims_trailing_slashes() {
        assert_eq!(
            short_link("https://s.example.com//", "Qwerty"),
            "https://s.example.com/c/Qwerty"
        );
    }
}
