//! Entity representing a short code → original URL mapping.

use crate::error::AppError;
use url::Url;

/// A stored mapping between a short code and the URL it redirects to.
///
/// The original URL is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub original_url: String,
    pub short_code: String,
}

impl ShortenedUrl {
    /// Creates a new mapping, validating that `original_url` is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL cannot be parsed, has no scheme,
    /// contains control characters, or has leading or trailing whitespace.
    pub fn new(original_url: String, short_code: String) -> Result<Self, AppError> {
        // `Url::parse` silently strips tabs and newlines and trims spaces, but the
        // stored string is used verbatim as a `Location` header.
        if original_url.trim() != original_url || original_url.chars().any(char::is_control) {
            return Err(AppError::invalid_input("invalid URL"));
        }

        Url::parse(&original_url).map_err(|_| AppError::invalid_input("invalid URL"))?;

        Ok(Self {
            original_url,
            short_code,
        })
    }

    /// Rebuilds a mapping read back from the store without re-validating it.
    pub fn from_stored(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_absolute_url() {
        let url = ShortenedUrl::new("https://example.com".to_string(), "abc123".to_string())
            .unwrap();

        assert_eq!(url.original_url, "https://example.com");
        assert_eq!(url.short_code, "abc123");
    }

    #[test]
    fn test_new_keeps_url_verbatim() {
        let url = ShortenedUrl::new(
            "https://EXAMPLE.com/Path?q=1#frag".to_string(),
            "abc123".to_string(),
        )
        .unwrap();

        assert_eq!(url.original_url, "https://EXAMPLE.com/Path?q=1#frag");
    }

    #[test]
    fn test_new_rejects_relative_url() {
        let result = ShortenedUrl::new("not-a-url".to_string(), "abc123".to_string());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_empty_url() {
        let result = ShortenedUrl::new(String::new(), "abc123".to_string());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_path_only() {
        let result = ShortenedUrl::new("/just/a/path".to_string(), "abc123".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_embedded_newline() {
        let result = ShortenedUrl::new("https://exa\nmple.com".to_string(), "abc123".to_string());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_embedded_tab() {
        let result = ShortenedUrl::new("https://example.com/a\tb".to_string(), "abc123".to_string());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_surrounding_whitespace() {
        for input in [" https://example.com", "https://example.com ", "https://example.com\r\n"] {
            let result = ShortenedUrl::new(input.to_string(), "abc123".to_string());
            assert!(
                matches!(result, Err(AppError::InvalidInput(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_from_stored() {
        let url = ShortenedUrl::from_stored("abc123", "https://example.com");
        assert_eq!(url.short_code, "abc123");
        assert_eq!(url.original_url, "https://example.com");
    }
}
