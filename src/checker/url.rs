// src/checker/url.rs
// =============================================================================
// Decides whether a string pulled out of a manifest is worth probing.
//
// A candidate is kept only if it is an absolute URL: it must parse, and both
// its scheme and its host must be non-empty. Anything else ("x.com",
// "ftp://", "mailto:someone@example.com", "") is dropped silently; a bad URL
// in a manifest is not an error, it's just not something we can check.
// =============================================================================

use url::Url;

// Returns true if `candidate` is an absolute URL with a scheme and a host
//
// Examples:
//   "https://x.com"  -> true
//   "x.com"          -> false (no scheme, fails to parse)
//   "ftp://"         -> false (empty host)
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            !url.scheme().is_empty() && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(is_valid_url("https://x.com"));
        assert!(is_valid_url("http://example.com/docs/page?x=1#top"));
        assert!(is_valid_url("http://127.0.0.1:8080/health"));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(!is_valid_url("x.com"));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(!is_valid_url("ftp://"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///etc/hosts"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
        assert!(!is_valid_url("http://exa mple.com"));
    }
}
