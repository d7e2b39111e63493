use super::{Config, DisplayServer, Handle, Manager};
use crate::errors::{DragError, Result};
use crate::models::{ActiveDrag, DragMode};
use crate::utils::modmask_lookup::ModMask;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Ends the drag once none of the modifiers held when it started are
    /// still down. `state` is the modifier state before the release and `key`
    /// the modifier being released.
    ///
    /// # Errors
    ///
    /// [`DragError::GrabOutOfSync`] if the keyboard is grabbed while nothing is
    /// being dragged. The grab is released before returning.
    pub fn key_release_handler(&mut self, key: ModMask, state: ModMask) -> Result<bool> {
        if !self.state.drag.holds_grab() {
            tracing::trace!("Key release without a keyboard grab, ignoring");
            return Ok(false);
        }
        let held = state.difference(key).clean();
        let initial = self
            .state
            .drag
            .active()
            .map_or(ModMask::Zero, ActiveDrag::initial_modifiers);
        if initial.intersects(held) {
            return Ok(false);
        }

        match self.state.drag.mode() {
            DragMode::Moving => Ok(self.end_move()),
            DragMode::Resizing => Ok(self.end_resize()),
            DragMode::Idle => {
                tracing::error!("Keyboard grab outlived the drag it was taken for");
                self.finish_drag();
                Err(DragError::GrabOutOfSync)
            }
        }
    }
}
