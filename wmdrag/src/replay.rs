//! A display server fed from a JSON script, used to replay drags without a
//! running window system.
//!
//! ```json
//! {
//!   "work_areas": [{ "x": 0, "y": 0, "w": 1920, "h": 1080 }],
//!   "windows": [{ "handle": 1, "content": { "x": 100, "y": 100, "w": 640, "h": 480 } }],
//!   "events": [
//!     { "MoveMotion": { "window": 1, "screen": 0,
//!                       "press_client": { "x": 100, "y": 100, "w": 640, "h": 480 },
//!                       "press_pointer": [300, 300], "pointer": [120, 310],
//!                       "modifiers": ["Alt"] } },
//!     "EndMove"
//!   ]
//! }
//! ```
use crate::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use wmdrag_core::models::{
    Insets, Manager, ScreenId, WindowGeometry, WindowHandle, WindowType, Xyhw,
};
use wmdrag_core::{DisplayAction, DisplayEvent, DisplayServer, KeyboardGrab};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScriptWindow {
    pub handle: u32,
    #[serde(default)]
    pub r#type: WindowType,
    /// Client area in root coordinates.
    pub content: Xyhw,
    #[serde(default)]
    pub insets: Insets,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Script {
    /// Usable area of each screen, indexed by screen id.
    pub work_areas: Vec<Xyhw>,
    pub windows: Vec<ScriptWindow>,
    pub events: Vec<DisplayEvent<u32>>,
}

impl Script {
    /// # Errors
    ///
    /// Fails if the file can't be read or isn't a valid script.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read script {}", path.display()))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Debug, Default)]
pub struct ScriptedDisplayServer {
    windows: Vec<(WindowHandle<u32>, WindowGeometry)>,
    work_areas: Vec<Xyhw>,
    pending: VecDeque<DisplayEvent<u32>>,
    next_grab: u32,
    grabbed: Option<u32>,
    overlay: Option<String>,
    /// Every text the popup displayed, in order.
    pub overlay_history: Vec<String>,
}

impl ScriptedDisplayServer {
    pub fn load(&mut self, script: Script) {
        self.windows = script
            .windows
            .iter()
            .map(|w| {
                (
                    WindowHandle(w.handle),
                    WindowGeometry::from_content(w.r#type, w.content, w.insets),
                )
            })
            .collect();
        self.work_areas = script.work_areas;
        self.pending = script.events.into();
    }

    /// The windows as they are now, in script order.
    #[must_use]
    pub fn windows(&self) -> Vec<ScriptWindow> {
        self.windows
            .iter()
            .map(|(handle, geometry)| ScriptWindow {
                handle: handle.0,
                r#type: geometry.r#type,
                content: geometry.content,
                insets: geometry.insets,
            })
            .collect()
    }

    #[must_use]
    pub const fn keyboard_grabbed(&self) -> bool {
        self.grabbed.is_some()
    }

    fn geometry_mut(&mut self, handle: &WindowHandle<u32>) -> Option<&mut WindowGeometry> {
        self.windows
            .iter_mut()
            .find(|(h, _)| h == handle)
            .map(|(_, g)| g)
    }
}

impl DisplayServer<u32> for ScriptedDisplayServer {
    fn new(_: &impl wmdrag_core::Config) -> Self {
        Self::default()
    }

    // Events are handed out one at a time so every event gets its own flush.
    fn get_next_events(&mut self) -> Vec<DisplayEvent<u32>> {
        self.pending.pop_front().into_iter().collect()
    }

    fn window_geometry(&self, handle: &WindowHandle<u32>) -> Option<WindowGeometry> {
        self.windows
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, g)| *g)
    }

    fn work_area(&self, screen: ScreenId) -> Option<Xyhw> {
        self.work_areas.get(screen).copied()
    }

    fn grab_keyboard(&mut self, screen: ScreenId) -> Option<KeyboardGrab> {
        if self.grabbed.is_some() {
            tracing::warn!("Keyboard is already grabbed");
            return None;
        }
        self.next_grab += 1;
        self.grabbed = Some(self.next_grab);
        tracing::debug!("Keyboard grabbed on screen {}", screen);
        Some(KeyboardGrab::new(screen, self.next_grab))
    }

    fn ungrab_keyboard(&mut self, grab: KeyboardGrab) {
        if self.grabbed == Some(grab.serial()) {
            self.grabbed = None;
            tracing::debug!("Keyboard released on screen {}", grab.screen());
        } else {
            tracing::warn!("Ignoring release of unknown keyboard grab {}", grab.serial());
        }
    }

    fn execute_action(&mut self, act: DisplayAction<u32>) {
        match act {
            DisplayAction::MoveFrame { window, x, y } => {
                if let Some(geometry) = self.geometry_mut(&window) {
                    *geometry = geometry.moved_to(x, y);
                }
            }
            DisplayAction::ResizeFrame {
                window,
                anchor,
                w,
                h,
            } => {
                if let Some(geometry) = self.geometry_mut(&window) {
                    *geometry = geometry.resized_from(anchor, w, h);
                }
            }
            DisplayAction::ShowOverlay { screen, text } => {
                tracing::info!("[screen {}] {}", screen, text);
                self.overlay_history.push(text.clone());
                self.overlay = Some(text);
            }
            DisplayAction::HideOverlay => {
                self.overlay = None;
            }
        }
    }
}

/// Replays `script` with `config` and returns the resulting windows.
///
/// # Errors
///
/// Fails when the drag state machine reports a fatal error.
pub fn run(config: Config, script: Script) -> Result<Vec<ScriptWindow>> {
    let mut manager: Manager<u32, Config, ScriptedDisplayServer> = Manager::new(config);
    manager.display_server.load(script);
    manager.event_loop()?;
    if manager.display_server.keyboard_grabbed() {
        tracing::warn!("Script ended with a drag still in progress");
    }
    Ok(manager.display_server.windows())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{
        "work_areas": [{ "x": 0, "y": 0, "w": 1000, "h": 800 }],
        "windows": [
            { "handle": 1, "content": { "x": 100, "y": 100, "w": 200, "h": 100 } },
            { "handle": 2, "type": "Dock", "content": { "x": 0, "y": 780, "w": 1000, "h": 20 } }
        ],
        "events": [
            { "MoveMotion": { "window": 1, "screen": 0,
                              "press_client": { "x": 100, "y": 100, "w": 200, "h": 100 },
                              "press_pointer": [150, 150], "pointer": [55, 150],
                              "modifiers": ["Alt"] } },
            { "MoveMotion": { "window": 1, "screen": 0,
                              "press_client": { "x": 100, "y": 100, "w": 200, "h": 100 },
                              "press_pointer": [150, 150], "pointer": [47, 150],
                              "modifiers": ["Alt"] } },
            { "MoveMotion": { "window": 2, "screen": 0,
                              "press_client": { "x": 0, "y": 780, "w": 1000, "h": 20 },
                              "press_pointer": [5, 785], "pointer": [50, 700] } },
            { "KeyRelease": { "key": ["Alt"], "state": ["Alt"] } }
        ]
    }"#;

    fn script() -> Script {
        serde_json::from_str(SCRIPT).unwrap()
    }

    #[test]
    fn a_released_move_lands_on_the_unsnapped_position() {
        let windows = run(Config::default(), script()).unwrap();
        assert_eq!(windows[0].content, Xyhw::new(-3, 100, 200, 100));
        assert_eq!(windows[1].content, Xyhw::new(0, 780, 1000, 20));
    }

    #[test]
    fn the_popup_follows_the_snapped_position() {
        let mut manager: Manager<u32, Config, ScriptedDisplayServer> =
            Manager::new(Config::default());
        manager.display_server.load(script());
        manager.event_loop().unwrap();
        assert_eq!(
            manager.display_server.overlay_history,
            vec!["X: 5 Y: 100".to_owned(), "X: 0 Y: 100".to_owned()]
        );
        assert!(!manager.display_server.keyboard_grabbed());
        assert!(manager.display_server.overlay.is_none());
    }

    #[test]
    fn resizes_from_the_nearest_corner() {
        let script: Script = serde_json::from_str(
            r#"{
            "work_areas": [{ "x": 0, "y": 0, "w": 1000, "h": 800 }],
            "windows": [{ "handle": 7, "content": { "x": 100, "y": 100, "w": 200, "h": 100 },
                          "insets": { "top": 20, "right": 2, "bottom": 2, "left": 2 } }],
            "events": [
                { "ResizeMotion": { "window": 7, "screen": 0,
                                    "press_client": { "x": 100, "y": 100, "w": 200, "h": 100 },
                                    "press_pointer": [110, 110], "pointer": [90, 100],
                                    "context": "Grip" } },
                "EndResize"
            ]
        }"#,
        )
        .unwrap();
        let windows = run(Config::default(), script).unwrap();
        assert_eq!(windows[0].content, Xyhw::new(80, 90, 220, 110));
    }

    #[test]
    fn a_missing_script_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Script::load(&dir.path().join("missing.json")).is_err());
    }
}
