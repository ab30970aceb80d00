//! Navigation policy for the Gemini webviews.
//!
//! One `NavigationPolicy` is built from settings at startup and installed
//! into every webview through [`plugin::init`]. It never changes afterwards.

pub mod plugin;
pub mod script;

use url::Url;

use crate::config::AppSettings;
use crate::interceptor::links;

/// Hosts (and their subdomains) that may load inside the webview. Sign-in
/// and consent flows bounce through the account hosts.
const TRUSTED_HOSTS: &[&str] = &[
    "gemini.google.com",
    "accounts.google.com",
    "myaccount.google.com",
    "consent.google.com",
    "gds.google.com",
    "tauri.localhost",
];

/// Home page used when the configured one does not parse.
const DEFAULT_HOME: &str = "https://gemini.google.com";

/// Non-web schemes the webview handles itself.
const INTERNAL_SCHEMES: &[&str] = &["tauri", "about", "blob", "data"];

/// Outcome of the page calling `window.open(url, ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOpen {
    /// Send to the system browser; the caller receives `null`.
    External(String),
    /// Hand the call to the page's original `window.open`.
    Delegate,
}

#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    home: Url,
    trusted_hosts: Vec<String>,
}

impl NavigationPolicy {
    pub fn new(home: Url) -> Self {
        let mut trusted_hosts: Vec<String> = TRUSTED_HOSTS.iter().map(|h| h.to_string()).collect();
        if let Some(host) = home.host_str() {
            if !trusted_hosts.iter().any(|h| host_matches(host, h)) {
                trusted_hosts.push(host.to_string());
            }
        }
        Self { home, trusted_hosts }
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, String> {
        let home = Url::parse(&settings.gemini_url)
            .map_err(|e| format!("Invalid gemini_url '{}': {}", settings.gemini_url, e))?;
        Ok(Self::new(home))
    }

    /// Policy for the stock Gemini home page.
    pub fn fallback() -> Self {
        Self::new(Url::parse(DEFAULT_HOME).expect("default home URL is valid"))
    }

    /// Page the webviews start on.
    pub fn home(&self) -> &Url {
        &self.home
    }

    pub fn window_open(&self, url: Option<&str>) -> WindowOpen {
        match url {
            Some(u) if links::is_web_url(u) => WindowOpen::External(u.to_string()),
            _ => WindowOpen::Delegate,
        }
    }

    /// Whether a top-level navigation may proceed inside the webview.
    pub fn allows_in_webview(&self, url: &Url) -> bool {
        if INTERNAL_SCHEMES.contains(&url.scheme()) {
            return true;
        }
        let host = url.host_str().unwrap_or("");
        host.is_empty() || self.trusted_hosts.iter().any(|trusted| host_matches(host, trusted))
    }
}

/// Exact match or a subdomain of `trusted`.
fn host_matches(host: &str, trusted: &str) -> bool {
    host == trusted
        || host
            .strip_suffix(trusted)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
