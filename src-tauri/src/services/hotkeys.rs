//! Global hotkeys for the panel and the normal window.

use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};
use tracing::{info, warn};

use super::windows;
use crate::config::AppSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    TogglePanel,
    ToggleNormal,
}

/// Parse a combination such as `Ctrl+Alt+G`.
pub fn parse_hotkey(keys: &str) -> Result<Shortcut, String> {
    let trimmed = keys.trim();
    if trimmed.is_empty() {
        return Err("Empty key combination".into());
    }
    trimmed
        .parse::<Shortcut>()
        .map_err(|e| format!("Invalid key combination '{}': {}", keys, e))
}

/// Bindings configured in `settings`, in registration order.
pub fn configured_hotkeys(settings: &AppSettings) -> [(HotkeyAction, &str); 2] {
    [
        (HotkeyAction::TogglePanel, settings.hotkey_panel.as_str()),
        (HotkeyAction::ToggleNormal, settings.hotkey_normal.as_str()),
    ]
}

/// Replace all registered hotkeys with the ones from `settings`.
///
/// A combination that fails to parse or register is logged and skipped;
/// the other one is still registered.
pub fn register_hotkeys(app: &AppHandle, settings: &AppSettings) {
    let shortcuts = app.global_shortcut();
    if let Err(e) = shortcuts.unregister_all() {
        warn!("[hotkeys] Failed to clear hotkeys: {}", e);
    }

    for (action, keys) in configured_hotkeys(settings) {
        let shortcut = match parse_hotkey(keys) {
            Ok(s) => s,
            Err(e) => {
                warn!("[hotkeys] {}", e);
                continue;
            }
        };
        let result = shortcuts.on_shortcut(shortcut, move |app, _shortcut, event| {
            if event.state != ShortcutState::Pressed {
                return;
            }
            match action {
                HotkeyAction::TogglePanel => windows::toggle_panel(app),
                HotkeyAction::ToggleNormal => windows::toggle_normal_window(app),
            }
        });
        match result {
            Ok(()) => info!("[hotkeys] Registered {:?} -> {}", action, keys),
            Err(e) => warn!("[hotkeys] Failed to register {}: {}", keys, e),
        }
    }
}
