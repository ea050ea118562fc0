//! URL validation utilities.
//!
//! Image insertion only accepts sources the preview can resolve, which means
//! an absolute URL or a relative reference without whitespace.

use url::Url;

/// Check if a URL is well formed, either absolute or relative
///
/// Data URLs are accepted since descriptions sometimes embed small images
/// inline; `javascript:` URLs are rejected.
#[must_use]
pub fn is_well_formed_url(url: &str) -> bool {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }

    if url.to_ascii_lowercase().starts_with("javascript:") {
        return false;
    }

    if Url::parse(url).is_ok() {
        return true;
    }

    // Relative references are resolved against a throwaway base
    match Url::parse("http://relative.invalid/") {
        Ok(base) => base.join(url).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(is_well_formed_url("https://cdn.example.com/header.jpg"));
        assert!(is_well_formed_url("ftp://files.example.com/a.png"));
    }

    #[test]
    fn test_accepts_relative_urls() {
        assert!(is_well_formed_url("images/cover.png"));
        assert!(is_well_formed_url("/static/cover.png"));
    }

    #[test]
    fn test_rejects_empty_and_spaced() {
        assert!(!is_well_formed_url(""));
        assert!(!is_well_formed_url("not a url"));
        assert!(!is_well_formed_url("javascript:alert(1)"));
    }
}
