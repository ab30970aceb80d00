pub mod autostart;
pub mod host_bridge;
pub mod hotkeys;
pub mod logger;
pub mod platform;
pub mod tray;
pub mod windows;
