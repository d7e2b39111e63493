use super::Config;
use super::DisplayEvent;
use super::DisplayServer;
use super::KeyboardGrab;
use crate::display_action::DisplayAction;
use crate::models::{Handle, ScreenId, WindowGeometry, WindowHandle, Xyhw};

/// Records everything the drag handlers ask for and keeps its window fixtures
/// in sync with executed moves and resizes.
#[derive(Debug, Default)]
pub struct MockDisplayServer<H: Handle> {
    pub windows: Vec<(WindowHandle<H>, WindowGeometry)>,
    /// Indexed by screen id.
    pub work_areas: Vec<Xyhw>,
    pub events: Vec<DisplayEvent<H>>,
    pub executed: Vec<DisplayAction<H>>,
    pub grabs_taken: u32,
    pub grabs_released: u32,
    pub refuse_grabs: bool,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn geometry_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut WindowGeometry> {
        self.windows
            .iter_mut()
            .find(|(h, _)| h == handle)
            .map(|(_, g)| g)
    }

    pub fn holds_grab(&self) -> bool {
        self.grabs_taken > self.grabs_released
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Self {
        Self {
            windows: vec![],
            work_areas: vec![],
            events: vec![],
            executed: vec![],
            grabs_taken: 0,
            grabs_released: 0,
            refuse_grabs: false,
        }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        std::mem::take(&mut self.events)
    }

    fn window_geometry(&self, handle: &WindowHandle<H>) -> Option<WindowGeometry> {
        self.windows
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, g)| *g)
    }

    fn work_area(&self, screen: ScreenId) -> Option<Xyhw> {
        self.work_areas.get(screen).copied()
    }

    fn grab_keyboard(&mut self, screen: ScreenId) -> Option<KeyboardGrab> {
        if self.refuse_grabs {
            return None;
        }
        self.grabs_taken += 1;
        Some(KeyboardGrab::new(screen, self.grabs_taken))
    }

    fn ungrab_keyboard(&mut self, _grab: KeyboardGrab) {
        self.grabs_released += 1;
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        match &act {
            DisplayAction::MoveFrame { window, x, y } => {
                if let Some(geometry) = self.geometry_mut(window) {
                    *geometry = geometry.moved_to(*x, *y);
                }
            }
            DisplayAction::ResizeFrame {
                window,
                anchor,
                w,
                h,
            } => {
                if let Some(geometry) = self.geometry_mut(window) {
                    *geometry = geometry.resized_from(*anchor, *w, *h);
                }
            }
            DisplayAction::ShowOverlay { .. } | DisplayAction::HideOverlay => {}
        }
        self.executed.push(act);
    }
}
