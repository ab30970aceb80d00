//! `HostBridge` backed by the running Tauri app.

use async_trait::async_trait;
use tauri::{AppHandle, Runtime};
use tauri_plugin_opener::OpenerExt;

use crate::interceptor::bridge::{BridgeError, HostBridge};

pub struct TauriBridge<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriBridge<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[async_trait]
impl<R: Runtime> HostBridge for TauriBridge<R> {
    async fn open_url(&self, url: &str) -> Result<(), BridgeError> {
        self.app
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| BridgeError::OpenUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_grants_no_shell_open_scope() {
        let conf: serde_json::Value =
            serde_json::from_str(include_str!("../../tauri.conf.json")).unwrap();
        assert!(conf.pointer("/plugins/shell").is_none());
    }

    #[test]
    fn test_open_error_names_url() {
        let err = BridgeError::OpenUrl {
            url: "https://example.com/".into(),
            reason: "no handler".into(),
        };
        assert_eq!(err.to_string(), "failed to open https://example.com/: no handler");
    }
}
