//! System tray icon and menu.

use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    App, AppHandle, Manager,
};
use tracing::info;

use super::windows;
use crate::config::schema::TrayClickAction;
use crate::config::SettingsManager;

const MENU_TOGGLE_PANEL: &str = "toggle";
const MENU_NORMAL: &str = "normal";
const MENU_QUIT: &str = "quit";

fn run_click_action(app: &AppHandle, action: TrayClickAction) {
    match action {
        TrayClickAction::Panel => windows::toggle_panel(app),
        TrayClickAction::Normal => windows::toggle_normal_window(app),
    }
}

/// Build and register the tray icon. Menu labels show the configured
/// global hotkeys.
pub fn setup_tray(app: &App, hotkey_panel: &str, hotkey_normal: &str) -> tauri::Result<()> {
    let toggle = MenuItem::with_id(
        app,
        MENU_TOGGLE_PANEL,
        format!("Show/Hide Side Panel ({})", hotkey_panel),
        true,
        None::<&str>,
    )?;
    let normal = MenuItem::with_id(
        app,
        MENU_NORMAL,
        format!("Open Window ({})", hotkey_normal),
        true,
        None::<&str>,
    )?;
    let sep = PredefinedMenuItem::separator(app)?;
    let quit = MenuItem::with_id(app, MENU_QUIT, "Quit", true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&toggle, &normal, &sep, &quit])?;

    let mut builder = TrayIconBuilder::new()
        .menu(&menu)
        .tooltip("Gemini")
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| match event.id().as_ref() {
            MENU_TOGGLE_PANEL => windows::toggle_panel(app),
            MENU_NORMAL => windows::toggle_normal_window(app),
            MENU_QUIT => {
                info!("Quit requested from system tray");
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                let app = tray.app_handle();
                let action = app
                    .try_state::<SettingsManager>()
                    .map(|m| m.get().tray_click_action)
                    .unwrap_or_default();
                run_click_action(app, action);
            }
        });

    if let Some(icon) = app.default_window_icon() {
        builder = builder.icon(icon.clone());
    }
    builder.build(app)?;
    Ok(())
}
