//! Login-item toggle capability.
//!
//! The shell only flips the switch; how the OS registers a login item is
//! the toggle implementation's business. At startup the persisted
//! preference is pushed into the OS state so the two cannot drift apart.

use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use studiodesk_core::{StudioDeskError, StudioDeskResult};

/// External start-at-login toggle.
pub trait LoginItem {
    fn enable(&self) -> StudioDeskResult<()>;
    fn disable(&self) -> StudioDeskResult<()>;
    fn is_enabled(&self) -> StudioDeskResult<bool>;
}

/// The OS login-item registry for this executable.
pub struct SystemLoginItem {
    inner: AutoLaunch,
}

impl SystemLoginItem {
    pub fn new(app_name: &str) -> StudioDeskResult<Self> {
        let exe = std::env::current_exe()?;
        let inner = AutoLaunchBuilder::new()
            .set_app_name(app_name)
            .set_app_path(&exe.to_string_lossy())
            .build()
            .map_err(|e| {
                StudioDeskError::Platform(format!("Login item setup failed: {}", e))
            })?;
        Ok(Self { inner })
    }
}

impl LoginItem for SystemLoginItem {
    fn enable(&self) -> StudioDeskResult<()> {
        log::info!("Enabling start at login");
        self.inner
            .enable()
            .map_err(|e| StudioDeskError::Platform(format!("Failed to enable login item: {}", e)))
    }

    fn disable(&self) -> StudioDeskResult<()> {
        log::info!("Disabling start at login");
        self.inner
            .disable()
            .map_err(|e| StudioDeskError::Platform(format!("Failed to disable login item: {}", e)))
    }

    fn is_enabled(&self) -> StudioDeskResult<bool> {
        self.inner
            .is_enabled()
            .map_err(|e| StudioDeskError::Platform(format!("Failed to query login item: {}", e)))
    }
}

/// Make the OS toggle match the persisted preference.
pub fn reconcile(login_item: &dyn LoginItem, want_enabled: bool) -> StudioDeskResult<()> {
    let is_enabled = login_item.is_enabled()?;
    if want_enabled && !is_enabled {
        login_item.enable()
    } else if !want_enabled && is_enabled {
        login_item.disable()
    } else {
        Ok(())
    }
}

/// Apply a freshly toggled preference to the OS.
pub fn apply(login_item: &dyn LoginItem, enabled: bool) -> StudioDeskResult<()> {
    if enabled {
        login_item.enable()
    } else {
        login_item.disable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeLoginItem {
        enabled: Cell<bool>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeLoginItem {
        fn new(enabled: bool) -> Self {
            Self {
                enabled: Cell::new(enabled),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LoginItem for FakeLoginItem {
        fn enable(&self) -> StudioDeskResult<()> {
            self.calls.borrow_mut().push("enable");
            self.enabled.set(true);
            Ok(())
        }

        fn disable(&self) -> StudioDeskResult<()> {
            self.calls.borrow_mut().push("disable");
            self.enabled.set(false);
            Ok(())
        }

        fn is_enabled(&self) -> StudioDeskResult<bool> {
            Ok(self.enabled.get())
        }
    }

    #[test]
    fn test_reconcile_enables_when_preference_set() {
        let item = FakeLoginItem::new(false);
        reconcile(&item, true).unwrap();
        assert!(item.enabled.get());
        assert_eq!(*item.calls.borrow(), vec!["enable"]);
    }

    #[test]
    fn test_reconcile_disables_when_preference_cleared() {
        let item = FakeLoginItem::new(true);
        reconcile(&item, false).unwrap();
        assert!(!item.enabled.get());
        assert_eq!(*item.calls.borrow(), vec!["disable"]);
    }

    #[test]
    fn test_reconcile_is_a_noop_when_in_sync() {
        let item = FakeLoginItem::new(true);
        reconcile(&item, true).unwrap();
        assert!(item.calls.borrow().is_empty());
    }

    #[test]
    fn test_apply() {
        let item = FakeLoginItem::new(false);
        apply(&item, true).unwrap();
        apply(&item, false).unwrap();
        assert_eq!(*item.calls.borrow(), vec!["enable", "disable"]);
    }
}
