//! Response header rewriting.
//!
//! The wrapped site sets headers assuming a first-party top-level browsing
//! context. Inside the shell those headers would block the site from
//! running, so a fixed set is removed from every response on the shell's
//! dedicated session partition. This is a deliberate trust decision scoped
//! to that one isolated partition, not a generic proxy.

use http::HeaderMap;

/// Response headers removed from every response, matched case-insensitively.
pub const STRIPPED_HEADERS: &[&str] = &[
    "x-frame-options",
    "content-security-policy",
    "cross-origin-embedder-policy",
    "cross-origin-opener-policy",
    "cross-origin-resource-policy",
];

/// Remove the fixed header set from a response header map. All other
/// headers are left untouched.
pub fn strip_embedding_headers(headers: &mut HeaderMap) {
    for name in STRIPPED_HEADERS {
        // HeaderMap::remove drops every value stored under the name.
        headers.remove(*name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderName, HeaderValue};

    fn header(name: &str, value: &str) -> (HeaderName, HeaderValue) {
        (
            name.parse().expect("header name"),
            HeaderValue::from_str(value).expect("header value"),
        )
    }

    #[test]
    fn test_strips_exactly_the_fixed_set() {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            header("x-frame-options", "DENY"),
            header("content-security-policy", "frame-ancestors 'none'"),
            header("cross-origin-embedder-policy", "require-corp"),
            header("cross-origin-opener-policy", "same-origin"),
            header("cross-origin-resource-policy", "same-origin"),
        ] {
            headers.insert(name, value);
        }

        strip_embedding_headers(&mut headers);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_case_insensitive_removal() {
        // http normalizes header names to lowercase, so mixed-case input
        // still matches the fixed set.
        let mut headers = HeaderMap::new();
        let (name, value) = header("X-Frame-Options", "SAMEORIGIN");
        headers.insert(name, value);

        strip_embedding_headers(&mut headers);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_other_headers_untouched() {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            header("content-type", "text/html; charset=utf-8"),
            header("set-cookie", "session=abc; Secure; HttpOnly"),
            header("cache-control", "no-store"),
            header("x-frame-options", "DENY"),
        ] {
            headers.append(name, value);
        }

        strip_embedding_headers(&mut headers);

        assert_eq!(headers.len(), 3);
        assert_eq!(headers["content-type"], "text/html; charset=utf-8");
        assert_eq!(headers["set-cookie"], "session=abc; Secure; HttpOnly");
        assert_eq!(headers["cache-control"], "no-store");
    }

    #[test]
    fn test_all_values_removed_for_repeated_header() {
        let mut headers = HeaderMap::new();
        let (name, v1) = header("content-security-policy", "default-src 'self'");
        headers.append(name.clone(), v1);
        let (_, v2) = header("content-security-policy", "script-src 'none'");
        headers.append(name, v2);

        strip_embedding_headers(&mut headers);
        assert!(headers.get("content-security-policy").is_none());
    }
}
