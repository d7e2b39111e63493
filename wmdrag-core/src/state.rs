//! Mutable state shared by the drag handlers.

use crate::models::{DragSession, Handle};
use crate::utils::overlay::Overlay;
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct State<H: Handle> {
    pub drag: DragSession<H>,
    pub overlay: Overlay,
    pub actions: VecDeque<DisplayAction<H>>,
}
