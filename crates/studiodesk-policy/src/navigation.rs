//! Navigation decisions.
//!
//! Every attempted navigation — same-window, new-window, or certificate
//! validation — goes through [`NavigationPolicy`]. The shell applies the
//! returned decision without further judgment.

use crate::allowlist::DomainAllowList;
use url::Url;

/// What the shell should do with an attempted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load in place (or let the new window open with interception attached).
    Allow,
    /// Cancel in-app and hand the URL to the system's default browser.
    OpenExternal,
    /// Drop the navigation entirely.
    Reject,
}

/// Policy over navigation attempts and certificate validation.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    allowlist: DomainAllowList,
    cert_trust: DomainAllowList,
}

impl NavigationPolicy {
    /// Build a policy from explicit lists.
    pub fn new(allowlist: DomainAllowList, cert_trust: DomainAllowList) -> Self {
        Self {
            allowlist,
            cert_trust,
        }
    }

    /// The stock policy for the wrapped site.
    pub fn studio() -> Self {
        Self::new(
            DomainAllowList::navigation(),
            DomainAllowList::certificate_trust(),
        )
    }

    /// Decide a same-window navigation.
    ///
    /// `file:` URLs are rejected unconditionally, even for a host that would
    /// otherwise be allowed — nothing may load arbitrary local files into
    /// the trusted-content surface. Unparsable URLs and non-web schemes are
    /// rejected rather than handed to the OS.
    pub fn decide_navigation(&self, url: &str) -> NavigationDecision {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => {
                log::debug!("Rejecting unparsable navigation target");
                return NavigationDecision::Reject;
            }
        };

        if parsed.scheme() == "file" {
            log::warn!("Rejecting file: navigation");
            return NavigationDecision::Reject;
        }

        if !matches!(parsed.scheme(), "http" | "https") {
            return NavigationDecision::Reject;
        }

        if self.allowlist.allows(&parsed) {
            NavigationDecision::Allow
        } else {
            NavigationDecision::OpenExternal
        }
    }

    /// Decide a new-window/popup request. Same rules as same-window
    /// navigation; an allowed popup gets this policy attached to it too.
    pub fn decide_new_window(&self, url: &str) -> NavigationDecision {
        self.decide_navigation(url)
    }

    /// Decide a certificate validation failure: `true` overrides the error
    /// and proceeds, `false` lets the engine fail closed.
    pub fn should_trust_certificate(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => self.cert_trust.allows(&parsed),
            Err(_) => false,
        }
    }
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self::studio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_host_loads_in_place() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_navigation("https://studio.youtube.com/video/abc"),
            NavigationDecision::Allow
        );
        assert_eq!(
            policy.decide_navigation("https://accounts.google.com/signin"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_unlisted_host_goes_external() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_navigation("https://example-ads.com/track"),
            NavigationDecision::OpenExternal
        );
    }

    #[test]
    fn test_file_scheme_rejected_even_for_listed_host() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_navigation("file:///etc/passwd"),
            NavigationDecision::Reject
        );
        // A file: URL with an allow-listed "host" is still rejected.
        assert_eq!(
            policy.decide_navigation("file://studio.youtube.com/secret"),
            NavigationDecision::Reject
        );
    }

    #[test]
    fn test_unparsable_url_rejected() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_navigation("not a url"),
            NavigationDecision::Reject
        );
    }

    #[test]
    fn test_non_web_schemes_rejected() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_navigation("javascript:alert(1)"),
            NavigationDecision::Reject
        );
        assert_eq!(
            policy.decide_navigation("data:text/html,<h1>x</h1>"),
            NavigationDecision::Reject
        );
    }

    #[test]
    fn test_new_window_follows_navigation_rules() {
        let policy = NavigationPolicy::studio();
        assert_eq!(
            policy.decide_new_window("https://www.youtube.com/watch?v=abc"),
            NavigationDecision::Allow
        );
        assert_eq!(
            policy.decide_new_window("https://twitter.com/share"),
            NavigationDecision::OpenExternal
        );
        assert_eq!(
            policy.decide_new_window("file:///tmp/x.html"),
            NavigationDecision::Reject
        );
    }

    #[test]
    fn test_certificate_trust() {
        let policy = NavigationPolicy::studio();
        assert!(policy.should_trust_certificate("https://www.google.com/"));
        assert!(policy.should_trust_certificate("https://i.ytimg.com/vi/x.jpg"));
        // Navigation-allowed but not certificate-trusted.
        assert!(!policy.should_trust_certificate("https://doubleclick.net/"));
        assert!(!policy.should_trust_certificate("https://example.com/"));
        assert!(!policy.should_trust_certificate("garbage"));
    }
}
