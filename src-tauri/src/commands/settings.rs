use tauri::{AppHandle, State};
use tracing::info;

use crate::config::{AppSettings, SettingsManager};
use crate::services::{autostart, hotkeys};

/// Current settings, as read by the page interceptor on every Ctrl+N.
#[tauri::command]
pub fn get_settings(state: State<'_, SettingsManager>) -> AppSettings {
    state.get()
}

/// Persist new settings and apply the ones that take effect immediately
/// (autostart, global hotkeys). `gemini_url` applies on next launch.
#[tauri::command]
pub fn save_settings(
    app: AppHandle,
    state: State<'_, SettingsManager>,
    settings: AppSettings,
) -> Result<(), String> {
    let previous = state.get();
    state.set(settings.clone())?;

    if previous.autostart != settings.autostart {
        autostart::apply_autostart(&app, settings.autostart);
    }
    if previous.hotkey_panel != settings.hotkey_panel
        || previous.hotkey_normal != settings.hotkey_normal
    {
        hotkeys::register_hotkeys(&app, &settings);
    }
    info!("Settings saved");
    Ok(())
}

#[tauri::command]
pub fn get_default_settings() -> AppSettings {
    AppSettings::default()
}
