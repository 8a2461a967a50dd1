//! Load-failure recovery.
//!
//! A failed top-level load gets exactly one retry of the start URL after a
//! fixed delay; a second failure surfaces the bundled fallback page.
//! Failure codes that mean "a newer navigation superseded this one" or
//! "blocked by our own policy" are benign and suppress recovery entirely.

use std::time::Duration;

/// The load was superseded by a later navigation.
pub const ERR_ABORTED: i32 = -3;
/// The load was blocked by client-side policy.
pub const ERR_BLOCKED_BY_CLIENT: i32 = -27;
/// Synthetic code for a load that never reported completion.
pub const ERR_TIMED_OUT: i32 = -7;

/// Delay before the single retry of the start URL.
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Failure codes that do not indicate a broken load.
const BENIGN_CODES: &[i32] = &[ERR_ABORTED, ERR_BLOCKED_BY_CLIENT];

/// Whether a failure code is benign (no recovery needed).
pub fn is_benign_load_failure(code: i32) -> bool {
    BENIGN_CODES.contains(&code)
}

/// What the shell should do after a reported load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRecovery {
    /// Benign or subframe failure; do nothing.
    Ignore,
    /// Re-request the start URL once after the given delay.
    RetryAfterDelay(Duration),
    /// The retry failed too; show the bundled fallback page.
    ShowFallback,
}

/// Tracks whether the single retry has been spent.
#[derive(Debug, Clone, Default)]
pub struct LoadRecoveryPolicy {
    retried: bool,
}

impl LoadRecoveryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a load failure and get the recovery step.
    pub fn on_failure(&mut self, code: i32, is_main_frame: bool) -> LoadRecovery {
        if !is_main_frame || is_benign_load_failure(code) {
            return LoadRecovery::Ignore;
        }

        if self.retried {
            log::warn!("Load failed again after retry (code {}), falling back", code);
            LoadRecovery::ShowFallback
        } else {
            self.retried = true;
            log::warn!("Load failed (code {}), retrying once", code);
            LoadRecovery::RetryAfterDelay(RETRY_DELAY)
        }
    }

    /// Report a successful load; the retry budget is restored.
    pub fn on_success(&mut self) {
        self.retried = false;
    }
}
