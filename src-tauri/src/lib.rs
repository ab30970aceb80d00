pub mod commands;
pub mod config;
pub mod interceptor;
pub mod navigation;
pub mod services;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use commands::browser as browser_cmds;
use commands::settings as settings_cmds;
use commands::window as window_cmds;

use config::schema::DefaultWindow;
use config::SettingsManager;
use navigation::NavigationPolicy;
use services::windows::{self, PanelState, NORMAL_LABEL, PANEL_LABEL};
use services::{autostart, hotkeys, platform, tray};

use tauri::Manager;
use tauri_plugin_autostart::MacosLauncher;
use tracing::{info, warn};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize structured logging (file + console)
    services::logger::init();

    let settings_manager = SettingsManager::load(&platform::get_config_dir());
    let settings = settings_manager.get();

    // The policy is fixed for the lifetime of the process; a changed
    // gemini_url applies on next launch.
    let policy = Arc::new(NavigationPolicy::from_settings(&settings).unwrap_or_else(|e| {
        warn!("{}, falling back to the default home page", e);
        NavigationPolicy::fallback()
    }));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            // If user tries to launch a second instance, focus the existing window
            info!("Second instance detected, focusing existing window");
            if let Some(window) = app.get_webview_window(NORMAL_LABEL) {
                let _ = window.show();
                let _ = window.set_focus();
            }
        }))
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None))
        .plugin(navigation::plugin::init(policy.clone()))
        .manage(settings_manager)
        .manage(PanelState::default())
        .invoke_handler(tauri::generate_handler![
            // Host bridge
            settings_cmds::get_settings,
            browser_cmds::open_url,
            // Settings
            settings_cmds::save_settings,
            settings_cmds::get_default_settings,
            // Window
            window_cmds::toggle_panel,
            window_cmds::toggle_normal_window,
        ])
        .setup(move |app| {
            autostart::apply_autostart(app.handle(), settings.autostart);

            windows::create_windows(app.handle(), Arc::clone(&policy))?;
            tray::setup_tray(app, &settings.hotkey_panel, &settings.hotkey_normal)?;
            hotkeys::register_hotkeys(app.handle(), &settings);

            match settings.default_window {
                DefaultWindow::Normal => windows::toggle_normal_window(app.handle()),
                DefaultWindow::Panel => windows::toggle_panel(app.handle()),
                DefaultWindow::None => info!("Starting hidden in the tray"),
            }

            Ok(())
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                let close_to_tray = window
                    .try_state::<SettingsManager>()
                    .map(|m| m.get().close_to_tray)
                    .unwrap_or(true);
                if !close_to_tray {
                    return;
                }
                api.prevent_close();
                let _ = window.hide();
                if window.label() == PANEL_LABEL {
                    window.state::<PanelState>().0.store(false, Ordering::SeqCst);
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running Gemini Desktop");
}
