//! Menu bar and tray menu construction.
//!
//! Checkbox state lives in the preference store alone. Both surfaces are
//! built from it and re-synced through [`AppMenu::sync_checks`] after every
//! preference write, so the menu and the tray can never disagree.

use muda::{
    accelerator::{Accelerator, Code, Modifiers},
    CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu,
};
use studiodesk_core::{StudioDeskError, StudioDeskResult};

/// Menu item identifiers, shared between the menu bar and the tray.
pub mod ids {
    pub const GO_HOME: &str = "go-home";
    pub const TOGGLE_AUTO_START: &str = "toggle-auto-start";
    pub const TOGGLE_START_MINIMIZED: &str = "toggle-start-minimized";
    pub const CLEAR_SESSION_DATA: &str = "clear-session-data";
    pub const MINIMIZE_TO_TRAY: &str = "minimize-to-tray";
    pub const QUIT: &str = "quit";
    pub const RELOAD: &str = "reload";
    pub const ZOOM_IN: &str = "zoom-in";
    pub const ZOOM_OUT: &str = "zoom-out";
    pub const ZOOM_RESET: &str = "zoom-reset";
    pub const TOGGLE_FULLSCREEN: &str = "toggle-fullscreen";
    pub const NAV_BACK: &str = "nav-back";
    pub const NAV_FORWARD: &str = "nav-forward";
    pub const NAV_REFRESH: &str = "nav-refresh";
    pub const HELP: &str = "help";
    pub const ABOUT: &str = "about";
    pub const TRAY_OPEN: &str = "tray-open";

    /// Every id, for uniqueness checking.
    pub const ALL: &[&str] = &[
        GO_HOME,
        TOGGLE_AUTO_START,
        TOGGLE_START_MINIMIZED,
        CLEAR_SESSION_DATA,
        MINIMIZE_TO_TRAY,
        QUIT,
        RELOAD,
        ZOOM_IN,
        ZOOM_OUT,
        ZOOM_RESET,
        TOGGLE_FULLSCREEN,
        NAV_BACK,
        NAV_FORWARD,
        NAV_REFRESH,
        HELP,
        ABOUT,
        TRAY_OPEN,
    ];
}

fn cmd_or_ctrl() -> Modifiers {
    if cfg!(target_os = "macos") {
        Modifiers::META
    } else {
        Modifiers::CONTROL
    }
}

fn accel(code: Code) -> Option<Accelerator> {
    Some(Accelerator::new(Some(cmd_or_ctrl()), code))
}

fn menu_err(e: muda::Error) -> StudioDeskError {
    StudioDeskError::Platform(format!("Menu construction failed: {}", e))
}

/// The application's menu surfaces. Checkbox items are kept so their state
/// can be re-synced from the store.
pub struct AppMenu {
    pub menu_bar: Menu,
    pub tray_menu: Menu,
    check_auto_start: Vec<CheckMenuItem>,
    check_start_minimized: Vec<CheckMenuItem>,
}

impl AppMenu {
    /// Build the menu bar and tray menu with checkbox state taken from the
    /// current preferences.
    pub fn build(auto_start: bool, start_minimized: bool) -> StudioDeskResult<Self> {
        let menu_bar = Menu::new();

        // File
        let auto_start_item = CheckMenuItem::with_id(
            ids::TOGGLE_AUTO_START,
            "Start with System",
            true,
            auto_start,
            None,
        );
        let start_minimized_item = CheckMenuItem::with_id(
            ids::TOGGLE_START_MINIMIZED,
            "Start Minimized to Tray",
            true,
            start_minimized,
            None,
        );
        let settings_menu = Submenu::new("Settings", true);
        settings_menu
            .append_items(&[&auto_start_item, &start_minimized_item])
            .map_err(menu_err)?;

        let file_menu = Submenu::new("&File", true);
        file_menu
            .append_items(&[
                &MenuItem::with_id(
                    ids::GO_HOME,
                    "Go to YouTube Studio",
                    true,
                    accel(Code::KeyH),
                ),
                &PredefinedMenuItem::separator(),
                &settings_menu,
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(ids::CLEAR_SESSION_DATA, "Clear Session Data…", true, None),
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(
                    ids::MINIMIZE_TO_TRAY,
                    "Minimize to Tray",
                    true,
                    accel(Code::KeyM),
                ),
                &MenuItem::with_id(ids::QUIT, "Quit", true, accel(Code::KeyQ)),
            ])
            .map_err(menu_err)?;

        // Edit
        let edit_menu = Submenu::new("&Edit", true);
        edit_menu
            .append_items(&[
                &PredefinedMenuItem::undo(None),
                &PredefinedMenuItem::redo(None),
                &PredefinedMenuItem::separator(),
                &PredefinedMenuItem::cut(None),
                &PredefinedMenuItem::copy(None),
                &PredefinedMenuItem::paste(None),
                &PredefinedMenuItem::select_all(None),
            ])
            .map_err(menu_err)?;

        // View
        let view_menu = Submenu::new("&View", true);
        view_menu
            .append_items(&[
                &MenuItem::with_id(ids::RELOAD, "Reload", true, accel(Code::KeyR)),
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(ids::ZOOM_RESET, "Actual Size", true, accel(Code::Digit0)),
                &MenuItem::with_id(ids::ZOOM_IN, "Zoom In", true, accel(Code::Equal)),
                &MenuItem::with_id(ids::ZOOM_OUT, "Zoom Out", true, accel(Code::Minus)),
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(
                    ids::TOGGLE_FULLSCREEN,
                    "Toggle Full Screen",
                    true,
                    Some(Accelerator::new(None, Code::F11)),
                ),
            ])
            .map_err(menu_err)?;

        // Navigation
        let nav_menu = Submenu::new("&Navigation", true);
        nav_menu
            .append_items(&[
                &MenuItem::with_id(
                    ids::NAV_BACK,
                    "Back",
                    true,
                    Some(Accelerator::new(Some(Modifiers::ALT), Code::ArrowLeft)),
                ),
                &MenuItem::with_id(
                    ids::NAV_FORWARD,
                    "Forward",
                    true,
                    Some(Accelerator::new(Some(Modifiers::ALT), Code::ArrowRight)),
                ),
                &MenuItem::with_id(
                    ids::NAV_REFRESH,
                    "Refresh",
                    true,
                    Some(Accelerator::new(None, Code::F5)),
                ),
            ])
            .map_err(menu_err)?;

        // Help
        let help_menu = Submenu::new("&Help", true);
        help_menu
            .append_items(&[
                &MenuItem::with_id(ids::HELP, "YouTube Studio Help", true, None),
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(ids::ABOUT, "About StudioDesk", true, None),
            ])
            .map_err(menu_err)?;

        menu_bar
            .append_items(&[&file_menu, &edit_menu, &view_menu, &nav_menu, &help_menu])
            .map_err(menu_err)?;

        // Tray
        let tray_auto_start = CheckMenuItem::with_id(
            ids::TOGGLE_AUTO_START,
            "Start with System",
            true,
            auto_start,
            None,
        );
        let tray_start_minimized = CheckMenuItem::with_id(
            ids::TOGGLE_START_MINIMIZED,
            "Start Minimized",
            true,
            start_minimized,
            None,
        );
        let tray_menu = Menu::new();
        tray_menu
            .append_items(&[
                &MenuItem::with_id(ids::TRAY_OPEN, "Open YouTube Studio", true, None),
                &PredefinedMenuItem::separator(),
                &tray_auto_start,
                &tray_start_minimized,
                &PredefinedMenuItem::separator(),
                &MenuItem::with_id(ids::QUIT, "Quit", true, None),
            ])
            .map_err(menu_err)?;

        Ok(Self {
            menu_bar,
            tray_menu,
            check_auto_start: vec![auto_start_item, tray_auto_start],
            check_start_minimized: vec![start_minimized_item, tray_start_minimized],
        })
    }

    /// Push the stored preference values into every checkbox.
    pub fn sync_checks(&self, auto_start: bool, start_minimized: bool) {
        for item in &self.check_auto_start {
            item.set_checked(auto_start);
        }
        for item in &self.check_start_minimized {
            item.set_checked(start_minimized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_ids_are_unique() {
        let unique: HashSet<_> = ids::ALL.iter().collect();
        assert_eq!(unique.len(), ids::ALL.len());
    }
}
