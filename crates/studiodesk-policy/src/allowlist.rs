//! Trusted-domain classification.
//!
//! Two separate lists: the navigation list decides which hosts may load
//! inside the shell at all, and a much smaller certificate-trust list
//! decides which hosts may proceed past an otherwise-fatal TLS validation
//! error. They serve different purposes and are intentionally not identical.

use url::Url;

/// Hosts the shell will load in place. Exact host or any subdomain matches.
///
/// This has to cover every first- and third-party host the wrapped site
/// pulls from (scripts, images, APIs, CDNs, consent flows). A missing entry
/// shows up as broken embedded resources, not as a crash.
pub const NAVIGATION_DOMAINS: &[&str] = &[
    "studio.youtube.com",
    "youtube.com",
    "www.youtube.com",
    "accounts.google.com",
    "accounts.youtube.com",
    "myaccount.google.com",
    "google.com",
    "www.google.com",
    "gstatic.com",
    "googleapis.com",
    "googleusercontent.com",
    "ytimg.com",
    "ggpht.com",
    "googlevideo.com",
    "youtube-nocookie.com",
    "youtu.be",
    "googleadservices.com",
    "googlesyndication.com",
    "doubleclick.net",
    "google-analytics.com",
    "googletagmanager.com",
    "gvt1.com",
    "gvt2.com",
    "gvt3.com",
    "play.google.com",
    "ssl.gstatic.com",
    "fonts.gstatic.com",
    "fonts.googleapis.com",
    "lh3.googleusercontent.com",
    "youtube.googleapis.com",
    "jnn-pa.googleapis.com",
    "clients1.google.com",
    "clients2.google.com",
    "clients3.google.com",
    "clients4.google.com",
    "clients5.google.com",
    "clients6.google.com",
    "signaler-pa.googleapis.com",
    "content-autofill.googleapis.com",
    "realtimesupport.youtube.com",
    "yt3.ggpht.com",
    "i.ytimg.com",
    "www.googletagmanager.com",
    "consent.youtube.com",
    "consent.google.com",
    "ogs.google.com",
    "notifications.google.com",
    "update.googleapis.com",
];

/// Hosts for which a certificate validation error may be overridden.
pub const CERT_TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "googleapis.com",
    "gstatic.com",
    "ytimg.com",
    "googleusercontent.com",
    "googlevideo.com",
];

/// A set of trusted hostnames, matched exactly or by subdomain suffix.
///
/// No wildcards, no regexes, no path or query consideration.
#[derive(Debug, Clone)]
pub struct DomainAllowList {
    domains: Vec<String>,
}

impl DomainAllowList {
    /// Build an allow-list from hostname entries. Entries are normalized to
    /// lowercase.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The navigation allow-list for the wrapped site.
    pub fn navigation() -> Self {
        Self::new(NAVIGATION_DOMAINS.iter().copied())
    }

    /// The certificate-trust list for the wrapped site.
    pub fn certificate_trust() -> Self {
        Self::new(CERT_TRUSTED_DOMAINS.iter().copied())
    }

    /// Check whether a hostname is listed, exactly or as a subdomain.
    pub fn matches_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.domains
            .iter()
            .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
    }

    /// Check whether a parsed URL's hostname is listed.
    pub fn allows(&self, url: &Url) -> bool {
        url.host_str()
            .map(|host| self.matches_host(host))
            .unwrap_or(false)
    }

    /// Check a raw URL string. Unparsable input is not allowed.
    pub fn allows_str(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.allows(&parsed),
            Err(_) => false,
        }
    }

    /// Number of listed domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let list = DomainAllowList::navigation();
        assert!(list.allows_str("https://studio.youtube.com/"));
        assert!(list.allows_str("https://accounts.google.com/signin"));
    }

    #[test]
    fn test_subdomain_match() {
        let list = DomainAllowList::navigation();
        // Every listed domain accepts arbitrary subdomains.
        for domain in NAVIGATION_DOMAINS {
            let url = format!("https://sub.{}/x", domain);
            assert!(list.allows_str(&url), "subdomain of {} rejected", domain);
        }
    }

    #[test]
    fn test_unlisted_host_rejected() {
        let list = DomainAllowList::navigation();
        assert!(!list.allows_str("https://example-ads.com/track"));
        assert!(!list.allows_str("https://example.com/"));
    }

    #[test]
    fn test_lookalike_suffix_rejected() {
        let list = DomainAllowList::navigation();
        // "evilyoutube.com" ends with "youtube.com" but is not a subdomain.
        assert!(!list.allows_str("https://evilyoutube.com/"));
        assert!(!list.allows_str("https://notgoogle.com/"));
    }

    #[test]
    fn test_case_insensitive() {
        let list = DomainAllowList::navigation();
        assert!(list.matches_host("STUDIO.YOUTUBE.COM"));
        assert!(list.matches_host("Studio.YouTube.Com"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let list = DomainAllowList::navigation();
        assert!(!list.allows_str("not a url"));
        assert!(!list.allows_str(""));
        assert!(!list.allows_str("https://"));
    }

    #[test]
    fn test_cert_list_is_smaller_than_navigation_list() {
        let nav = DomainAllowList::navigation();
        let cert = DomainAllowList::certificate_trust();
        assert!(cert.len() < nav.len());
        assert!(cert.matches_host("clients4.google.com"));
        assert!(!cert.matches_host("doubleclick.net"));
    }
}
