use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    #[default]
    Normal,
}

impl WindowType {
    /// Windows the user may move or resize by dragging. Desktops, docks,
    /// utility windows and splash screens stay where they were placed.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        !matches!(self, Self::Desktop | Self::Dock | Self::Utility | Self::Splash)
    }
}
