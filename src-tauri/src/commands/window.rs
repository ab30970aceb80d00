use std::sync::atomic::Ordering;

use tauri::{AppHandle, Manager};

use super::IpcResponse;
use crate::services::windows::{self, PanelState, NORMAL_LABEL, PANEL_LABEL};

/// Slide the side panel in or out.
#[tauri::command]
pub fn toggle_panel(app: AppHandle) -> IpcResponse {
    if app.get_webview_window(PANEL_LABEL).is_none() {
        return IpcResponse::err("Panel window not found");
    }
    windows::toggle_panel(&app);
    let shown = app.state::<PanelState>().0.load(Ordering::SeqCst);
    IpcResponse::ok(serde_json::json!({ "visible": shown }))
}

/// Show, focus or hide the normal window.
#[tauri::command]
pub fn toggle_normal_window(app: AppHandle) -> IpcResponse {
    let Some(window) = app.get_webview_window(NORMAL_LABEL) else {
        return IpcResponse::err("Normal window not found");
    };
    windows::toggle_normal_window(&app);
    match window.is_visible() {
        Ok(visible) => IpcResponse::ok(serde_json::json!({ "visible": visible })),
        Err(e) => IpcResponse::err(format!("Failed to read window state: {}", e)),
    }
}
