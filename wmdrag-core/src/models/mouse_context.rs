use serde::{Deserialize, Serialize};

/// The part of the screen or window decoration a pointer press landed on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MouseContext {
    Root,
    #[default]
    Client,
    Frame,
    Titlebar,
    Handle,
    /// Resize grip at the corners of the frame handle.
    Grip,
}

impl MouseContext {
    #[must_use]
    pub const fn is_grip(self) -> bool {
        matches!(self, Self::Grip)
    }
}
