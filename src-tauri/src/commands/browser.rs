use tauri::AppHandle;

use crate::interceptor::bridge::HostBridge;
use crate::services::host_bridge::TauriBridge;

/// Open `url` in the system's default browser.
#[tauri::command]
pub async fn open_url(app: AppHandle, url: String) -> Result<(), String> {
    TauriBridge::new(app)
        .open_url(&url)
        .await
        .map_err(|e| e.to_string())
}
