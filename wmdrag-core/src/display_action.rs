use crate::models::Corner;
use crate::models::Handle;
use crate::models::ScreenId;
use crate::models::WindowHandle;
use serde::{Deserialize, Serialize};

/// These are responses from the drag state machine.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Move the outer frame of a window so its top left corner lands on x,y.
    #[serde(bound = "")]
    MoveFrame {
        window: WindowHandle<H>,
        x: i32,
        y: i32,
    },

    /// Resize the client area of a window to w,h keeping `anchor` in place.
    #[serde(bound = "")]
    ResizeFrame {
        window: WindowHandle<H>,
        anchor: Corner,
        w: i32,
        h: i32,
    },

    /// Create the popup if needed, set its text, center it on the screen and
    /// show it.
    ShowOverlay { screen: ScreenId, text: String },

    /// Hide and destroy the popup.
    HideOverlay,
}
