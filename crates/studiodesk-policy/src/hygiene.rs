//! URL hygiene helpers.

use url::Url;

/// Query parameters whose values are redacted before a URL reaches a log.
const SENSITIVE_QUERY_PARAMS: &[&str] = &[
    "token",
    "key",
    "auth",
    "password",
    "secret",
    "access_token",
];

/// Check that a URL parses and uses HTTPS.
pub fn is_secure_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.scheme() == "https",
        Err(_) => false,
    }
}

/// Redact sensitive query parameter values so the URL can be logged.
/// Unparsable input yields a fixed placeholder.
pub fn sanitize_url_for_logging(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return "[invalid URL]".to_string();
    };

    let has_sensitive = parsed
        .query_pairs()
        .any(|(name, _)| SENSITIVE_QUERY_PARAMS.contains(&name.as_ref()));
    if !has_sensitive {
        return parsed.into();
    }

    let redacted: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            if SENSITIVE_QUERY_PARAMS.contains(&name.as_ref()) {
                (name.into_owned(), "[REDACTED]".to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    parsed
        .query_pairs_mut()
        .clear()
        .extend_pairs(redacted.iter().map(|(n, v)| (n.as_str(), v.as_str())));

    parsed.into()
}
