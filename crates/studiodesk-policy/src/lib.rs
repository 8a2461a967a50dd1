//! Navigation and security policy for StudioDesk
//!
//! Everything the shell decides — which URLs load in place, which go to the
//! external browser, which certificate errors may be overridden, which
//! response headers are stripped, and how failed loads recover — lives here
//! as plain functions over `url::Url` and `http::HeaderMap`. The shell
//! applies these decisions mechanically; no engine types leak in.

pub mod allowlist;
pub mod headers;
pub mod hygiene;
pub mod navigation;
pub mod recovery;

pub use allowlist::DomainAllowList;
pub use headers::strip_embedding_headers;
pub use hygiene::{is_secure_url, sanitize_url_for_logging};
pub use navigation::{NavigationDecision, NavigationPolicy};
pub use recovery::{LoadRecovery, LoadRecoveryPolicy};
