//! Shell application context.
//!
//! One explicit object owns everything the event handlers touch: the
//! configuration, the navigation policy, the preference store, the load
//! recovery state, and the lifecycle flags. Handlers receive it through a
//! shared handle instead of reaching for globals, so show/hide/quit are
//! visible state transitions.

use crate::autostart::LoginItem;
use studiodesk_core::config::AppConfig;
use studiodesk_core::StudioDeskResult;
use studiodesk_policy::{LoadRecoveryPolicy, NavigationPolicy};
use studiodesk_store::PreferenceStore;

pub struct AppContext {
    pub config: AppConfig,
    pub policy: NavigationPolicy,
    pub store: PreferenceStore,
    pub recovery: LoadRecoveryPolicy,
    pub login_item: Option<Box<dyn LoginItem>>,
    /// Set once quit is requested; a close with this unset hides to tray.
    pub is_quitting: bool,
    /// The fallback page is currently displayed.
    pub showing_fallback: bool,
    /// Content zoom factor, 1.0 = 100%.
    pub zoom: f64,
    load_generation: u64,
    load_settled: bool,
}

impl AppContext {
    pub fn new(config: AppConfig, policy: NavigationPolicy, store: PreferenceStore) -> Self {
        Self {
            config,
            policy,
            store,
            recovery: LoadRecoveryPolicy::new(),
            login_item: None,
            is_quitting: false,
            showing_fallback: false,
            zoom: 1.0,
            load_generation: 0,
            load_settled: true,
        }
    }

    /// Start watching a top-level load. Returns the generation the watchdog
    /// should report against.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_settled = false;
        self.load_generation
    }

    /// The engine reported a finished load.
    pub fn settle_load(&mut self) {
        self.load_settled = true;
        self.recovery.on_success();
    }

    /// Whether a watchdog firing for `generation` refers to a load that is
    /// still outstanding.
    pub fn load_timed_out(&self, generation: u64) -> bool {
        generation == self.load_generation && !self.load_settled
    }

    /// Flip a boolean preference and persist it. Returns the new value.
    pub fn toggle_preference(&mut self, key: &str) -> StudioDeskResult<bool> {
        let next = !self.store.preference_bool(key, false);
        self.store.set_preference(key, next)?;
        Ok(next)
    }
}
