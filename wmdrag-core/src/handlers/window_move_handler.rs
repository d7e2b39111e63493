use super::{Config, DisplayServer, Handle, Manager};
use crate::display_action::DisplayAction;
use crate::display_event::PointerMotion;
use crate::models::{ActiveDrag, DragKind, DragMode, DragRendering};
use crate::utils::{edge_resistance, overlay};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Start moving a window. Non-normal windows, unknown windows and requests
    /// arriving while another drag is in progress are ignored.
    /// Returns true if a move was started.
    pub fn begin_move(&mut self, motion: &PointerMotion<H>) -> bool {
        if self.state.drag.mode() != DragMode::Idle {
            tracing::debug!(
                "Ignoring move of {:?}, a drag is already in progress",
                motion.window
            );
            return false;
        }
        match self.display_server.window_geometry(&motion.window) {
            Some(geometry) if geometry.is_normal() => {}
            Some(geometry) => {
                tracing::debug!(
                    "Not moving {:?}, {:?} windows are not movable",
                    motion.window,
                    geometry.r#type
                );
                return false;
            }
            None => return false,
        }

        tracing::debug!("Moving window {:?}", motion.window);
        self.state
            .drag
            .start(ActiveDrag::new(DragKind::Move, motion));
        let Some((x, y)) = self.move_frame(self.config.move_rendering(), self.edge_resistance())
        else {
            return false;
        };
        match self.display_server.grab_keyboard(motion.screen) {
            Some(grab) => self.state.drag.attach_grab(grab),
            None => tracing::warn!(
                "Unable to grab the keyboard, releasing modifiers will not end the move"
            ),
        }
        self.show_position(x, y);
        true
    }

    /// Follow the pointer with the window being moved.
    pub fn window_move_handler(&mut self, pointer: (i32, i32)) -> bool {
        match self.state.drag.active_mut() {
            Some(drag) if drag.kind() == DragKind::Move => drag.update_pointer(pointer),
            _ => return false,
        }
        match self.move_frame(self.config.move_rendering(), self.edge_resistance()) {
            Some((x, y)) => {
                self.show_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Drop the window exactly where the pointer put it, ignoring edge
    /// resistance, and end the move. Does nothing unless a move is in progress.
    pub fn end_move(&mut self) -> bool {
        if self.state.drag.mode() != DragMode::Moving {
            return false;
        }
        let _ = self.move_frame(DragRendering::ApplyImmediately, 0);
        if let Some(drag) = self.finish_drag() {
            tracing::debug!("Finished moving window {:?}", drag.client());
        }
        true
    }

    fn edge_resistance(&self) -> i32 {
        self.config.edge_resistance().max(0)
    }

    // Computes the frame position for the current delta and queues the move.
    // Returns the position, or None if the window went away (the session is
    // torn down in that case).
    fn move_frame(&mut self, rendering: DragRendering, resistance: i32) -> Option<(i32, i32)> {
        let drag = self.state.drag.active()?;
        let (handle, screen) = (drag.client(), drag.screen());
        let (press, (dx, dy), last) = (drag.press_client(), drag.delta(), drag.last_snapped());

        let Some(geometry) = self.display_server.window_geometry(&handle) else {
            tracing::warn!("Window {:?} vanished while being moved", handle);
            self.finish_drag();
            return None;
        };
        let (offset_x, offset_y) = geometry.frame_offset();
        let target = (press.x() + dx + offset_x, press.y() + dy + offset_y);
        let (x, y) = match self.display_server.work_area(screen) {
            Some(area) => {
                edge_resistance::resist(target, last, geometry.outer_size(), &area, resistance)
            }
            None => target,
        };
        if let Some(drag) = self.state.drag.active_mut() {
            drag.record_snapped((x, y));
        }

        match rendering {
            DragRendering::ApplyImmediately => {
                tracing::trace!("Moving frame of {:?} to {} {}", handle, x, y);
                self.state.actions.push_back(DisplayAction::MoveFrame {
                    window: handle,
                    x,
                    y,
                });
            }
            DragRendering::ShowOutlineOnly => {
                tracing::trace!("Outline of {:?} at {} {} is not drawn", handle, x, y);
            }
        }
        Some((x, y))
    }

    fn show_position(&mut self, x: i32, y: i32) {
        if !self.config.move_popup() {
            return;
        }
        if let Some(screen) = self.state.drag.active().map(ActiveDrag::screen) {
            let act = self.state.overlay.update(screen, overlay::position_text(x, y));
            self.state.actions.push_back(act);
        }
    }
}
