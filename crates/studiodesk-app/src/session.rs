//! Persistent session partition capability.
//!
//! Login cookies, cache, and storage for the wrapped site live in the
//! browser engine's persistent partition, not in the preference store. The
//! shell talks to that partition through this capability so "Clear Session
//! Data" is an explicit operation rather than an ambient side effect of a
//! partition name.

use studiodesk_core::{StudioDeskError, StudioDeskResult};
use wry::WebView;

/// Operations on the engine-owned session partition.
pub trait SessionPartition {
    /// Clear cookies and site storage.
    fn clear_storage(&self) -> StudioDeskResult<()>;

    /// Clear the HTTP cache.
    fn clear_cache(&self) -> StudioDeskResult<()>;

    /// Clear cached HTTP auth credentials.
    fn clear_auth_cache(&self) -> StudioDeskResult<()>;
}

/// Clear everything the partition holds.
pub fn clear_all(partition: &dyn SessionPartition) -> StudioDeskResult<()> {
    partition.clear_storage()?;
    partition.clear_cache()?;
    partition.clear_auth_cache()
}

/// The engine-backed partition. WebView2 and WebKit expose a single
/// clear-everything entry point, so all three operations funnel into it;
/// the call is idempotent.
pub struct EnginePartition<'a> {
    webview: &'a WebView,
}

impl<'a> EnginePartition<'a> {
    pub fn new(webview: &'a WebView) -> Self {
        Self { webview }
    }

    fn clear_engine_data(&self) -> StudioDeskResult<()> {
        self.webview
            .clear_all_browsing_data()
            .map_err(|e| StudioDeskError::Session(format!("Failed to clear browsing data: {}", e)))
    }
}

impl SessionPartition for EnginePartition<'_> {
    fn clear_storage(&self) -> StudioDeskResult<()> {
        log::info!("Clearing session storage");
        self.clear_engine_data()
    }

    fn clear_cache(&self) -> StudioDeskResult<()> {
        self.clear_engine_data()
    }

    fn clear_auth_cache(&self) -> StudioDeskResult<()> {
        self.clear_engine_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakePartition {
        calls: RefCell<Vec<&'static str>>,
        fail_storage: bool,
    }

    impl SessionPartition for FakePartition {
        fn clear_storage(&self) -> StudioDeskResult<()> {
            self.calls.borrow_mut().push("storage");
            if self.fail_storage {
                return Err(StudioDeskError::session("boom"));
            }
            Ok(())
        }

        fn clear_cache(&self) -> StudioDeskResult<()> {
            self.calls.borrow_mut().push("cache");
            Ok(())
        }

        fn clear_auth_cache(&self) -> StudioDeskResult<()> {
            self.calls.borrow_mut().push("auth");
            Ok(())
        }
    }

    #[test]
    fn test_clear_all_hits_every_class() {
        let partition = FakePartition::default();
        clear_all(&partition).unwrap();
        assert_eq!(*partition.calls.borrow(), vec!["storage", "cache", "auth"]);
    }

    #[test]
    fn test_clear_all_propagates_failure() {
        let partition = FakePartition {
            fail_storage: true,
            ..Default::default()
        };
        assert!(clear_all(&partition).is_err());
        assert_eq!(*partition.calls.borrow(), vec!["storage"]);
    }
}
