use std::sync::Arc;

use tauri::plugin::{Builder, TauriPlugin};
use tauri::{Manager, Runtime};

use super::{script, NavigationPolicy};
use crate::interceptor::EventInterceptor;
use crate::services::host_bridge::TauriBridge;

pub const PLUGIN_NAME: &str = "gemini-webview";

/// Install `policy` into every webview of the app.
///
/// The interceptor script runs on each page load; top-level navigations the
/// policy does not allow are cancelled and sent to the system browser.
pub fn init<R: Runtime>(policy: Arc<NavigationPolicy>) -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .js_init_script(script::render_interceptor_script())
        .on_navigation(move |webview, url| {
            let bridge = Arc::new(TauriBridge::new(webview.app_handle().clone()));
            EventInterceptor::new(bridge, Arc::clone(&policy)).on_navigation(url)
        })
        .build()
}
