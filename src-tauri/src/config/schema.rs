use serde::{Deserialize, Serialize};

/// Persisted application settings.
///
/// Field names stay snake_case on the wire: the injected page script reads
/// `enable_ctrl_n` straight off the object returned by `get_settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    // Startup
    #[serde(default = "default_true")]
    pub autostart: bool,
    #[serde(default)]
    pub default_window: DefaultWindow,

    // Behavior
    #[serde(default = "default_true")]
    pub normal_auto_load_conversation: bool,
    #[serde(default = "default_true")]
    pub panel_auto_load_conversation: bool,
    #[serde(default)]
    pub tray_click_action: TrayClickAction,

    // Appearance
    #[serde(default = "default_panel_width")]
    pub panel_width: u32,
    #[serde(default)]
    pub animation_speed: AnimationSpeed,

    // Shortcuts
    #[serde(default = "default_hotkey_panel")]
    pub hotkey_panel: String,
    #[serde(default = "default_hotkey_normal")]
    pub hotkey_normal: String,
    #[serde(default = "default_true")]
    pub enable_ctrl_n: bool,

    // Advanced
    #[serde(default = "default_gemini_url")]
    pub gemini_url: String,
    #[serde(default = "default_true")]
    pub close_to_tray: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            autostart: true,
            default_window: DefaultWindow::default(),
            normal_auto_load_conversation: true,
            panel_auto_load_conversation: true,
            tray_click_action: TrayClickAction::default(),
            panel_width: default_panel_width(),
            animation_speed: AnimationSpeed::default(),
            hotkey_panel: default_hotkey_panel(),
            hotkey_normal: default_hotkey_normal(),
            enable_ctrl_n: true,
            gemini_url: default_gemini_url(),
            close_to_tray: true,
        }
    }
}

/// Which window is shown when the app starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultWindow {
    #[default]
    Normal,
    Panel,
    None,
}

/// What a left click on the tray icon does.
///
/// Older settings files may name a settings window here; any value that is
/// not a known window falls back to the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrayClickAction {
    Normal,
    #[default]
    #[serde(other)]
    Panel,
}

/// Slide-in speed of the side panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Instant,
    #[default]
    Fast,
    Normal,
    Slow,
}

impl AnimationSpeed {
    /// Total duration in milliseconds and number of frames.
    pub fn timing(self) -> (u64, u32) {
        match self {
            // 1ms keeps the per-step delay non-zero
            AnimationSpeed::Instant => (1, 1),
            AnimationSpeed::Fast => (100, 10),
            AnimationSpeed::Normal => (250, 20),
            AnimationSpeed::Slow => (500, 30),
        }
    }
}

fn default_true() -> bool { true }
fn default_panel_width() -> u32 { 420 }
fn default_hotkey_panel() -> String { "Ctrl+Alt+G".into() }
fn default_hotkey_normal() -> String { "Ctrl+G".into() }
fn default_gemini_url() -> String { "https://gemini.google.com".into() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert!(s.enable_ctrl_n);
        assert!(s.close_to_tray);
        assert_eq!(s.panel_width, 420);
        assert_eq!(s.default_window, DefaultWindow::Normal);
        assert_eq!(s.tray_click_action, TrayClickAction::Panel);
        assert_eq!(s.animation_speed, AnimationSpeed::Fast);
        assert_eq!(s.gemini_url, "https://gemini.google.com");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: AppSettings =
            serde_json::from_str(r#"{ "enable_ctrl_n": false, "panel_width": 600 }"#).unwrap();
        assert!(!s.enable_ctrl_n);
        assert_eq!(s.panel_width, 600);
        assert_eq!(s.hotkey_panel, "Ctrl+Alt+G");
        assert!(s.autostart);
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(json["default_window"], "normal");
        assert_eq!(json["tray_click_action"], "panel");
        assert_eq!(json["animation_speed"], "fast");
        assert_eq!(json["enable_ctrl_n"], true);
    }

    #[test]
    fn test_unknown_speed_rejected() {
        let result: Result<AppSettings, _> =
            serde_json::from_str(r#"{ "animation_speed": "warp" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_tray_action_keeps_other_settings() {
        let s: AppSettings = serde_json::from_str(
            r#"{ "tray_click_action": "settings", "enable_ctrl_n": false, "panel_width": 512 }"#,
        )
        .unwrap();
        assert_eq!(s.tray_click_action, TrayClickAction::Panel);
        assert!(!s.enable_ctrl_n);
        assert_eq!(s.panel_width, 512);

        let s: AppSettings = serde_json::from_str(r#"{ "tray_click_action": "normal" }"#).unwrap();
        assert_eq!(s.tray_click_action, TrayClickAction::Normal);
    }

    #[test]
    fn test_animation_timing() {
        assert_eq!(AnimationSpeed::Instant.timing(), (1, 1));
        assert_eq!(AnimationSpeed::Fast.timing(), (100, 10));
        assert_eq!(AnimationSpeed::Normal.timing(), (250, 20));
        assert_eq!(AnimationSpeed::Slow.timing(), (500, 30));
    }
}
