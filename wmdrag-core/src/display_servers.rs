#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::models::ScreenId;
use crate::models::WindowGeometry;
use crate::models::WindowHandle;
use crate::models::Xyhw;
use crate::DisplayEvent;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// Exclusive keyboard capture taken for the duration of a drag.
///
/// The token cannot be cloned and [`DisplayServer::ungrab_keyboard`] consumes it,
/// so every grab is released at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a keyboard grab has to be handed back to the display server"]
pub struct KeyboardGrab {
    screen: ScreenId,
    serial: u32,
}

impl KeyboardGrab {
    pub const fn new(screen: ScreenId, serial: u32) -> Self {
        Self { screen, serial }
    }

    #[must_use]
    pub const fn screen(&self) -> ScreenId {
        self.screen
    }

    #[must_use]
    pub const fn serial(&self) -> u32 {
        self.serial
    }
}

pub trait DisplayServer<H: Handle> {
    fn new(config: &impl Config) -> Self;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    /// Current geometry of a managed window, `None` if it is gone.
    fn window_geometry(&self, handle: &WindowHandle<H>) -> Option<WindowGeometry>;

    /// Usable area of a screen, without docks and panels.
    fn work_area(&self, screen: ScreenId) -> Option<Xyhw>;

    /// Route key releases to the window manager until the grab is returned.
    fn grab_keyboard(&mut self, screen: ScreenId) -> Option<KeyboardGrab>;

    fn ungrab_keyboard(&mut self, grab: KeyboardGrab);

    fn execute_action(&mut self, act: DisplayAction<H>);

    fn flush(&self) {}
}
