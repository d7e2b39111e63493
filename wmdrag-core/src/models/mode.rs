use serde::{Deserialize, Serialize};

/// Which interactive operation, if any, the drag session is performing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragMode {
    Moving,
    Resizing,
    #[default]
    Idle,
}

/// How geometry changes are shown while a drag is in progress.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DragRendering {
    /// Move or resize the real window on every motion sample.
    #[default]
    ApplyImmediately,
    /// Only draw an outline until the drag ends. Drawing the outline is not
    /// implemented, so motion samples leave the window where it is.
    ShowOutlineOnly,
}
