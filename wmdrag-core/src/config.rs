pub use crate::models::DragRendering;

pub trait Config {
    /// Pixels a frame may be pushed past a work area edge before it breaks
    /// free. Zero or less disables the resistance.
    fn edge_resistance(&self) -> i32;

    /// Show the coordinates popup while moving.
    fn move_popup(&self) -> bool;

    /// Show the size popup while resizing.
    fn resize_popup(&self) -> bool;

    fn move_rendering(&self) -> DragRendering;

    fn resize_rendering(&self) -> DragRendering;

    /// Resize from the corner nearest to the press instead of the bottom right one.
    fn resize_nearest(&self) -> bool;
}
