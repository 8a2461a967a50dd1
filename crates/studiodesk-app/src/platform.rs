//! Platform glue: native menu attachment and external-browser handoff.

use muda::Menu;
use std::process::Command;
use studiodesk_core::{StudioDeskError, StudioDeskResult};
use tao::window::Window;

/// Attach the menu bar to the window the way the platform expects.
///
/// On macOS the menu belongs to the application, not the window, and is
/// also what makes clipboard shortcuts work.
pub fn initialize_menu(window: &Window, menu: &Menu) -> StudioDeskResult<()> {
    #[cfg(target_os = "windows")]
    {
        use tao::platform::windows::WindowExtWindows;
        unsafe {
            menu.init_for_hwnd(window.hwnd() as _)
                .map_err(|e| StudioDeskError::Platform(format!("Menu init failed: {}", e)))?;
        }
    }

    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        menu.init_for_gtk_window(window.gtk_window(), window.default_vbox())
            .map_err(|e| StudioDeskError::Platform(format!("Menu init failed: {}", e)))?;
    }

    #[cfg(target_os = "macos")]
    {
        let _ = window;
        unsafe {
            menu.init_for_nsapp();
        }
    }

    log::debug!("Menu initialized");
    Ok(())
}

/// Open a URL in the system's default browser.
pub fn open_external(url: &str) -> StudioDeskResult<()> {
    log::debug!("Opening external URL");

    #[cfg(target_os = "windows")]
    // The empty "" after start is the window title, required for URLs with
    // special characters.
    let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();

    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let spawned = Command::new("xdg-open").arg(url).spawn();

    spawned
        .map(|_| ())
        .map_err(|e| StudioDeskError::Platform(format!("Failed to open {} externally: {}", url, e)))
}
