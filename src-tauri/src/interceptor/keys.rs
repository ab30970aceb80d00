//! Ctrl/Cmd+N → Ctrl+Shift+O remapping.
//!
//! The page binds "new chat" to Ctrl+Shift+O while Ctrl+N would open a new
//! browser window inside the webview. When `enable_ctrl_n` is set the page
//! handler swallows Ctrl+N and replays it as the page's own shortcut. The
//! settings lookup happens on every press and suppression only follows a
//! successful, enabled lookup.

use serde::{Deserialize, Serialize};

use super::dom::Suppression;

/// Key the remapped chord listens for, compared case-insensitively.
pub const REMAP_TRIGGER_KEY: &str = "n";

/// Applied to the original Ctrl+N once the remap is confirmed.
pub const REMAP_SUPPRESSION: Suppression = Suppression::DEFAULT_AND_PROPAGATION;

/// Key event fields, named as in the DOM `KeyboardEventInit` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventInit {
    pub key: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub key_code: u32,
    #[serde(default)]
    pub which: u32,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub meta_key: bool,
    #[serde(default)]
    pub bubbles: bool,
    #[serde(default)]
    pub cancelable: bool,
}

impl KeyEventInit {
    /// The page's "new chat" shortcut: Ctrl+Shift+O, dispatched so page
    /// handlers treat it like a real key press.
    pub fn new_chat() -> Self {
        Self {
            key: "o".into(),
            code: "KeyO".into(),
            key_code: 79,
            which: 79,
            ctrl_key: true,
            shift_key: true,
            alt_key: false,
            meta_key: false,
            bubbles: true,
            cancelable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyEventKind {
    #[serde(rename = "keydown")]
    KeyDown,
    #[serde(rename = "keyup")]
    KeyUp,
}

impl KeyEventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            KeyEventKind::KeyDown => "keydown",
            KeyEventKind::KeyUp => "keyup",
        }
    }
}

/// A synthetic event to dispatch on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticKey {
    pub kind: KeyEventKind,
    pub init: KeyEventInit,
}

/// Events replayed in place of a remapped Ctrl+N, in dispatch order.
pub fn new_chat_dispatch() -> [SyntheticKey; 2] {
    let init = KeyEventInit::new_chat();
    [
        SyntheticKey {
            kind: KeyEventKind::KeyDown,
            init: init.clone(),
        },
        SyntheticKey {
            kind: KeyEventKind::KeyUp,
            init,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_wire_format() {
        let json = serde_json::to_value(KeyEventInit::new_chat()).unwrap();
        assert_eq!(json["key"], "o");
        assert_eq!(json["code"], "KeyO");
        assert_eq!(json["keyCode"], 79);
        assert_eq!(json["which"], 79);
        assert_eq!(json["ctrlKey"], true);
        assert_eq!(json["shiftKey"], true);
        assert_eq!(json["altKey"], false);
        assert_eq!(json["metaKey"], false);
        assert_eq!(json["bubbles"], true);
        assert_eq!(json["cancelable"], true);
    }

    #[test]
    fn test_dispatch_is_keydown_then_keyup() {
        let dispatch = new_chat_dispatch();
        assert_eq!(dispatch[0].kind, KeyEventKind::KeyDown);
        assert_eq!(dispatch[1].kind, KeyEventKind::KeyUp);
        assert!(dispatch.iter().all(|k| k.init == KeyEventInit::new_chat()));
    }

    #[test]
    fn test_remap_suppression_leaves_other_listeners() {
        assert!(REMAP_SUPPRESSION.prevent_default);
        assert!(REMAP_SUPPRESSION.stop_propagation);
        assert!(!REMAP_SUPPRESSION.stop_immediate_propagation);
    }
}
