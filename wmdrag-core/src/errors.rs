use thiserror::Error;

pub type Result<T> = std::result::Result<T, DragError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DragError {
    /// A key release came through the keyboard grab while no window is being
    /// moved or resized. The grab lifecycle no longer matches the drag state.
    #[error("keyboard grab is held but no drag is in progress")]
    GrabOutOfSync,
}
