//! The two Gemini windows: the slide-in side panel and the normal window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tauri::webview::{NewWindowFeatures, NewWindowResponse};
use tauri::{
    AppHandle, Manager, PhysicalPosition, PhysicalSize, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder, Wry,
};
use tracing::{info, warn};
use url::Url;

use crate::config::{AppSettings, SettingsManager};
use crate::config::schema::AnimationSpeed;
use crate::interceptor::EventInterceptor;
use crate::navigation::{script, NavigationPolicy, WindowOpen};
use crate::services::host_bridge::TauriBridge;

pub const PANEL_LABEL: &str = "main";
pub const NORMAL_LABEL: &str = "normal";

/// Used when no monitor information is available.
const FALLBACK_WORK_AREA: WorkArea = WorkArea { x: 0, y: 0, width: 1920, height: 1080 };

/// Managed state: whether the panel is (or is sliding towards) shown.
#[derive(Default)]
pub struct PanelState(pub AtomicBool);

/// Work-area rectangle in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WorkArea {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// Usable area of the primary monitor, taskbar and docks excluded.
///
/// The panel always docks here. It parks just past the right edge, which on
/// a multi-monitor desktop lies on a neighbouring screen, so the window's own
/// current monitor is not a stable reference.
fn work_area(window: &WebviewWindow) -> WorkArea {
    match window.primary_monitor() {
        Ok(Some(monitor)) => {
            let rect = monitor.work_area();
            WorkArea {
                x: rect.position.x,
                y: rect.position.y,
                width: rect.size.width as i32,
                height: rect.size.height as i32,
            }
        }
        _ => FALLBACK_WORK_AREA,
    }
}

/// Shown and parked x positions of a panel `width` pixels wide.
pub fn panel_track(area: WorkArea, width: i32) -> (i32, i32) {
    (area.right() - width, area.right())
}

/// Intermediate x positions of a slide from `start` to `end`; the last one
/// is always `end`.
pub fn slide_positions(start: i32, end: i32, steps: u32) -> Vec<i32> {
    let steps = steps.max(1);
    let distance = (end - start) as f32;
    let mut positions: Vec<i32> = (1..steps)
        .map(|i| start + (distance * i as f32 / steps as f32) as i32)
        .collect();
    positions.push(end);
    positions
}

/// Logical panel width converted to physical pixels.
pub fn panel_width_physical(panel_width: u32, scale_factor: f64) -> i32 {
    (panel_width as f64 * scale_factor).round() as i32
}

/// Create the panel and normal windows, both hidden, pointed at the home
/// page. The panel starts parked just off the right edge of the primary
/// monitor's work area.
///
/// New-window requests from either page are decided by the navigation
/// policy: web URLs go to the system browser, anything else is allowed.
pub fn create_windows(app: &AppHandle, policy: Arc<NavigationPolicy>) -> tauri::Result<()> {
    let home = WebviewUrl::External(policy.home().clone());
    let interceptor = Arc::new(EventInterceptor::new(
        Arc::new(TauriBridge::new(app.clone())),
        Arc::clone(&policy),
    ));

    let panel = WebviewWindowBuilder::new(app, PANEL_LABEL, home.clone())
        .on_new_window(new_window_handler(Arc::clone(&interceptor)))
        .title("Gemini")
        .decorations(false)
        .always_on_top(true)
        .skip_taskbar(true)
        .resizable(false)
        .visible(false)
        .build()?;
    let area = work_area(&panel);
    let _ = panel.set_position(PhysicalPosition::new(area.right(), area.y));

    WebviewWindowBuilder::new(app, NORMAL_LABEL, home)
        .on_new_window(new_window_handler(interceptor))
        .title("Gemini")
        .inner_size(1200.0, 800.0)
        .center()
        .visible(false)
        .build()?;

    info!("[windows] Created panel and normal windows at {}", policy.home());
    Ok(())
}

fn new_window_handler(
    interceptor: Arc<EventInterceptor<TauriBridge<Wry>>>,
) -> impl Fn(Url, NewWindowFeatures) -> NewWindowResponse<Wry> + Send + Sync + 'static {
    move |url, _features| match interceptor.on_window_open(url.as_str()) {
        WindowOpen::External(_) => NewWindowResponse::Deny,
        WindowOpen::Delegate => NewWindowResponse::Allow,
    }
}

fn settings(app: &AppHandle) -> AppSettings {
    app.try_state::<SettingsManager>()
        .map(|m| m.get())
        .unwrap_or_default()
}

fn panel_visible(app: &AppHandle) -> &AtomicBool {
    &app.state::<PanelState>().inner().0
}

/// Click the newest conversation in the sidebar of `window`.
pub fn open_latest_conversation(window: &WebviewWindow) {
    if let Err(e) = window.eval(&script::render_latest_conversation_script()) {
        warn!("[windows] Failed to run latest-conversation script: {}", e);
    }
}

/// Slide the panel in (`show`) or out. Blocks for the animation duration;
/// call from a background thread.
pub fn slide_panel(app: &AppHandle, show: bool) {
    let Some(window) = app.get_webview_window(PANEL_LABEL) else {
        warn!("[panel] Panel window not found");
        return;
    };
    let settings = settings(app);

    let scale_factor = window.scale_factor().unwrap_or(1.0);
    let width = panel_width_physical(settings.panel_width, scale_factor);
    let area = work_area(&window);

    let (shown_x, hidden_x) = panel_track(area, width);
    let (start_x, end_x) = if show { (hidden_x, shown_x) } else { (shown_x, hidden_x) };

    let _ = window.set_size(PhysicalSize::new(width.max(0) as u32, area.height.max(0) as u32));

    if show {
        let _ = window.set_position(PhysicalPosition::new(start_x, area.y));
        let _ = window.show();
        let _ = window.set_focus();
    }

    if settings.animation_speed == AnimationSpeed::Instant {
        let _ = window.set_position(PhysicalPosition::new(end_x, area.y));
    } else {
        let (duration_ms, steps) = settings.animation_speed.timing();
        let step_delay = Duration::from_millis(duration_ms / steps as u64);
        for x in slide_positions(start_x, end_x, steps) {
            let _ = window.set_position(PhysicalPosition::new(x, area.y));
            thread::sleep(step_delay);
        }
    }

    if show {
        if settings.panel_auto_load_conversation {
            open_latest_conversation(&window);
        }
    } else {
        let _ = window.hide();
    }
}

fn spawn_slide(app: &AppHandle, show: bool) {
    let app = app.clone();
    thread::spawn(move || slide_panel(&app, show));
}

/// Slide the panel out if it is showing.
pub fn hide_panel(app: &AppHandle) {
    if panel_visible(app).swap(false, Ordering::SeqCst) {
        spawn_slide(app, false);
    }
}

/// Show or hide the side panel. Showing it hides the normal window.
pub fn toggle_panel(app: &AppHandle) {
    let show = !panel_visible(app).load(Ordering::SeqCst);
    if show {
        if let Some(normal) = app.get_webview_window(NORMAL_LABEL) {
            let _ = normal.hide();
        }
    }
    panel_visible(app).store(show, Ordering::SeqCst);
    info!("[panel] Toggling panel: show={}", show);
    spawn_slide(app, show);
}

/// Hidden → show; shown but in the background → focus; focused → hide.
/// Bringing the normal window forward always closes the panel.
pub fn toggle_normal_window(app: &AppHandle) {
    let Some(window) = app.get_webview_window(NORMAL_LABEL) else {
        warn!("[windows] Normal window not found");
        return;
    };
    let settings = settings(app);

    if window.is_visible().unwrap_or(false) {
        if window.is_focused().unwrap_or(false) {
            let _ = window.hide();
            return;
        }
        let _ = window.set_focus();
    } else {
        let _ = window.show();
        let _ = window.set_focus();
    }
    hide_panel(app);

    if settings.normal_auto_load_conversation {
        open_latest_conversation(&window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_positions_end_exactly() {
        let positions = slide_positions(1920, 1500, 10);
        assert_eq!(positions.len(), 10);
        assert_eq!(*positions.last().unwrap(), 1500);
        assert_eq!(positions[0], 1878);
        assert!(positions.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_slide_positions_single_step() {
        assert_eq!(slide_positions(100, 0, 1), vec![0]);
        assert_eq!(slide_positions(100, 0, 0), vec![0]);
    }

    #[test]
    fn test_slide_out_moves_right() {
        let positions = slide_positions(1500, 1920, 20);
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*positions.last().unwrap(), 1920);
    }

    #[test]
    fn test_panel_width_scaling() {
        assert_eq!(panel_width_physical(420, 1.0), 420);
        assert_eq!(panel_width_physical(420, 1.5), 630);
        assert_eq!(panel_width_physical(421, 1.25), 526);
    }

    #[test]
    fn test_panel_track_stays_on_primary_work_area() {
        // Primary monitor with a 40px taskbar, secondary monitor to its right
        let primary = WorkArea { x: 0, y: 0, width: 1920, height: 1040 };
        let (shown, parked) = panel_track(primary, 420);
        assert_eq!((shown, parked), (1500, 1920));

        // A later toggle measures the same area, so it slides back in on the
        // primary monitor even though x=1920 belongs to the secondary one.
        assert_eq!(panel_track(primary, 420), (shown, parked));
        assert!(shown >= primary.x && parked == primary.right());
    }

    #[test]
    fn test_work_area_right_edge() {
        assert_eq!(FALLBACK_WORK_AREA.right(), 1920);
        let area = WorkArea { x: -1280, y: 0, width: 1280, height: 1024 };
        assert_eq!(area.right(), 0);
    }
}
