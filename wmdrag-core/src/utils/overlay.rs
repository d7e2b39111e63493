//! Bookkeeping for the coordinates/size popup shown during a drag.
use crate::display_action::DisplayAction;
use crate::models::{Handle, ScreenId};

/// Tracks whether the popup is on screen so it is hidden exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    /// Creates the popup or replaces its text, centered on `screen`.
    pub fn update<H: Handle>(&mut self, screen: ScreenId, text: String) -> DisplayAction<H> {
        self.visible = true;
        DisplayAction::ShowOverlay { screen, text }
    }

    pub fn dismiss<H: Handle>(&mut self) -> Option<DisplayAction<H>> {
        if std::mem::take(&mut self.visible) {
            Some(DisplayAction::HideOverlay)
        } else {
            None
        }
    }
}

#[must_use]
pub fn position_text(x: i32, y: i32) -> String {
    format!("X: {x} Y: {y}")
}

#[must_use]
pub fn size_text((w, h): (i32, i32)) -> String {
    format!("W: {w} H: {h}")
}
