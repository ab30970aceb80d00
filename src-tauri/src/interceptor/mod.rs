//! Event interception for the wrapped chat page.
//!
//! Link clicks and the Ctrl+N remap are decided in the page, by the script
//! `navigation::script` renders from the constants in this module. What
//! reaches the host (top-level navigations and new-window requests) is
//! decided here, against the installed [`NavigationPolicy`].

pub mod bridge;
pub mod dom;
pub mod keys;
pub mod links;

use std::sync::Arc;

use tracing::{error, info};
use url::Url;

use crate::navigation::{NavigationPolicy, WindowOpen};
use bridge::HostBridge;

/// Hand `url` to the host's open-URL service. Failures are logged and
/// otherwise dropped.
pub async fn open_external<B: HostBridge + ?Sized>(bridge: &B, url: &str) {
    info!("[interceptor] Opening in system browser: {}", url);
    if let Err(e) = bridge.open_url(url).await {
        error!("[interceptor] Failed to open link: {}", e);
    }
}

/// Host-side navigation handling bound to one bridge and one policy.
pub struct EventInterceptor<B: HostBridge + ?Sized> {
    bridge: Arc<B>,
    policy: Arc<NavigationPolicy>,
}

impl<B: HostBridge + ?Sized + 'static> EventInterceptor<B> {
    pub fn new(bridge: Arc<B>, policy: Arc<NavigationPolicy>) -> Self {
        Self { bridge, policy }
    }

    /// Top-level navigation of a webview. Returns whether it may proceed;
    /// anything the policy keeps out is opened in the system browser.
    pub fn on_navigation(&self, url: &Url) -> bool {
        if self.policy.allows_in_webview(url) {
            return true;
        }
        info!("[interceptor] Redirecting navigation to system browser: {}", url);
        self.open_in_background(url.as_str());
        false
    }

    /// New-window request from a webview. Web URLs go to the system browser
    /// and no window is created.
    pub fn on_window_open(&self, url: &str) -> WindowOpen {
        let decision = self.policy.window_open(Some(url));
        if let WindowOpen::External(target) = &decision {
            self.open_in_background(target);
        }
        decision
    }

    fn open_in_background(&self, url: &str) {
        let bridge = Arc::clone(&self.bridge);
        let url = url.to_string();
        tauri::async_runtime::spawn(async move {
            open_external(bridge.as_ref(), &url).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::bridge::BridgeError;
    use async_trait::async_trait;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Forwards every open_url call to a channel.
    struct RecordingBridge {
        fail_open: bool,
        opened: Mutex<Sender<String>>,
    }

    fn recording(fail_open: bool) -> (Arc<RecordingBridge>, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        let bridge = RecordingBridge {
            fail_open,
            opened: Mutex::new(tx),
        };
        (Arc::new(bridge), rx)
    }

    #[async_trait]
    impl HostBridge for RecordingBridge {
        async fn open_url(&self, url: &str) -> Result<(), BridgeError> {
            let _ = self.opened.lock().unwrap().send(url.to_string());
            if self.fail_open {
                return Err(BridgeError::OpenUrl {
                    url: url.to_string(),
                    reason: "no browser".into(),
                });
            }
            Ok(())
        }
    }

    fn interceptor(bridge: Arc<RecordingBridge>) -> EventInterceptor<RecordingBridge> {
        let policy = NavigationPolicy::new("https://gemini.google.com".parse().unwrap());
        EventInterceptor::new(bridge, Arc::new(policy))
    }

    fn next_open(rx: &Receiver<String>) -> Option<String> {
        rx.recv_timeout(Duration::from_secs(5)).ok()
    }

    #[tokio::test]
    async fn test_open_external_swallows_failure() {
        let (bridge, rx) = recording(true);
        open_external(bridge.as_ref(), "https://example.com/").await;
        assert_eq!(rx.try_recv().unwrap(), "https://example.com/");
    }

    #[test]
    fn test_trusted_navigation_proceeds() {
        let (bridge, rx) = recording(false);
        let engine = interceptor(bridge);
        assert!(engine.on_navigation(&"https://gemini.google.com/app/1".parse().unwrap()));
        assert!(engine.on_navigation(&"https://accounts.google.com/signin".parse().unwrap()));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_foreign_navigation_opens_once() {
        let (bridge, rx) = recording(false);
        let engine = interceptor(bridge);
        assert!(!engine.on_navigation(&"https://example.com/doc".parse().unwrap()));
        assert_eq!(next_open(&rx).as_deref(), Some("https://example.com/doc"));
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_window_open_routes_web_urls() {
        let (bridge, rx) = recording(false);
        let engine = interceptor(bridge);

        let decision = engine.on_window_open("https://gemini.google.com/app");
        assert_eq!(decision, WindowOpen::External("https://gemini.google.com/app".into()));
        assert_eq!(next_open(&rx).as_deref(), Some("https://gemini.google.com/app"));

        assert_eq!(engine.on_window_open("about:blank"), WindowOpen::Delegate);
        assert_eq!(engine.on_window_open(""), WindowOpen::Delegate);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn test_window_open_failure_is_swallowed() {
        let (bridge, rx) = recording(true);
        let engine = interceptor(bridge);
        let decision = engine.on_window_open("https://example.com/");
        assert!(matches!(decision, WindowOpen::External(_)));
        assert_eq!(next_open(&rx).as_deref(), Some("https://example.com/"));
    }
}
