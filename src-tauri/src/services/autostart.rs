use tauri::AppHandle;
use tauri_plugin_autostart::ManagerExt;
use tracing::{info, warn};

/// Bring launch-at-login in line with the `autostart` setting.
pub fn apply_autostart(app: &AppHandle, enabled: bool) {
    let manager = app.autolaunch();
    let result = if enabled { manager.enable() } else { manager.disable() };
    match result {
        Ok(()) => info!("Autostart {}", if enabled { "enabled" } else { "disabled" }),
        Err(e) => warn!("Failed to update autostart: {}", e),
    }
}
