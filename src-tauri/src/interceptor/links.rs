//! Link classification constants shared by the page script and the host.
//!
//! A link goes to the system browser when its href is an absolute web URL
//! and it points at another host, targets `_blank`, or is a share link.

use super::dom::Suppression;

/// Schemes the shell is willing to hand to the system browser.
pub const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];
/// Path prefix of Gemini share links.
pub const SHARE_PATH_PREFIX: &str = "/share/";
/// Query key that also marks a share link.
pub const SHARE_QUERY_KEY: &str = "share";
pub const BLANK_TARGET: &str = "_blank";

/// True for absolute `http://` / `https://` URLs.
pub fn is_web_url(href: &str) -> bool {
    WEB_SCHEMES.iter().any(|scheme| href.starts_with(scheme))
}

/// Pointer activation that can follow a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTrigger {
    /// Primary-button click.
    Click,
    /// Middle or other non-primary button.
    AuxClick,
}

impl LinkTrigger {
    pub fn dom_name(self) -> &'static str {
        match self {
            LinkTrigger::Click => "click",
            LinkTrigger::AuxClick => "auxclick",
        }
    }

    /// Suppression applied to the original event when the link goes out.
    pub fn suppression(self) -> Suppression {
        match self {
            LinkTrigger::Click => Suppression::ALL,
            LinkTrigger::AuxClick => Suppression::DEFAULT_AND_PROPAGATION,
        }
    }
}
