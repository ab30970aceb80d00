//! Host calls behind the interceptor.

use async_trait::async_trait;

/// Command names as invoked from the webview.
pub const GET_SETTINGS_COMMAND: &str = "get_settings";
pub const OPEN_URL_COMMAND: &str = "open_url";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to open {url}: {reason}")]
    OpenUrl { url: String, reason: String },
}

/// Host-process service that hands URLs to the system browser.
///
/// Single-shot: no timeout, retry or cancellation.
#[async_trait]
pub trait HostBridge: Send + Sync {
    async fn open_url(&self, url: &str) -> Result<(), BridgeError>;
}
