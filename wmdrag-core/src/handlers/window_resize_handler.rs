use super::{Config, DisplayServer, Handle, Manager};
use crate::display_action::DisplayAction;
use crate::display_event::PointerMotion;
use crate::models::{ActiveDrag, DragKind, DragMode, DragRendering};
use crate::utils::{overlay, resize_anchor};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Start resizing a window. Same preconditions as [`Manager::begin_move`].
    pub fn begin_resize(&mut self, motion: &PointerMotion<H>) -> bool {
        if self.state.drag.mode() != DragMode::Idle {
            tracing::debug!(
                "Ignoring resize of {:?}, a drag is already in progress",
                motion.window
            );
            return false;
        }
        match self.display_server.window_geometry(&motion.window) {
            Some(geometry) if geometry.is_normal() => {}
            Some(geometry) => {
                tracing::debug!(
                    "Not resizing {:?}, {:?} windows are not resizable",
                    motion.window,
                    geometry.r#type
                );
                return false;
            }
            None => return false,
        }

        tracing::debug!("Resizing window {:?} from {:?}", motion.window, motion.context);
        self.state
            .drag
            .start(ActiveDrag::new(DragKind::Resize, motion));
        if !self.resize_frame(self.config.resize_rendering()) {
            return false;
        }
        match self.display_server.grab_keyboard(motion.screen) {
            Some(grab) => self.state.drag.attach_grab(grab),
            None => tracing::warn!(
                "Unable to grab the keyboard, releasing modifiers will not end the resize"
            ),
        }
        self.show_size();
        true
    }

    /// Resize the window to follow the pointer.
    pub fn window_resize_handler(&mut self, pointer: (i32, i32)) -> bool {
        match self.state.drag.active_mut() {
            Some(drag) if drag.kind() == DragKind::Resize => drag.update_pointer(pointer),
            _ => return false,
        }
        if !self.resize_frame(self.config.resize_rendering()) {
            return false;
        }
        self.show_size();
        true
    }

    /// Apply the final size and end the resize. Does nothing unless a resize
    /// is in progress.
    pub fn end_resize(&mut self) -> bool {
        if self.state.drag.mode() != DragMode::Resizing {
            return false;
        }
        let _ = self.resize_frame(DragRendering::ApplyImmediately);
        if let Some(drag) = self.finish_drag() {
            tracing::debug!("Finished resizing window {:?}", drag.client());
        }
        true
    }

    // Queues the resize for the current delta. Returns false if the window
    // went away (the session is torn down in that case).
    fn resize_frame(&mut self, rendering: DragRendering) -> bool {
        let Some(drag) = self.state.drag.active() else {
            return false;
        };
        let handle = drag.client();
        let press = drag.press_client();
        let (dx, dy) = drag.delta();
        let anchor = resize_anchor::select_anchor(
            drag.press_offset(),
            (press.w(), press.h()),
            drag.context().is_grip(),
            self.config.resize_nearest(),
        );

        if self.display_server.window_geometry(&handle).is_none() {
            tracing::warn!("Window {:?} vanished while being resized", handle);
            self.finish_drag();
            return false;
        }

        let (dw, dh) = anchor.size_delta(dx, dy);
        let w = (press.w() + dw).max(1);
        let h = (press.h() + dh).max(1);
        match rendering {
            DragRendering::ApplyImmediately => {
                tracing::trace!("Resizing {:?} to {}x{} from {:?}", handle, w, h, anchor.corner);
                self.state.actions.push_back(DisplayAction::ResizeFrame {
                    window: handle,
                    anchor: anchor.corner,
                    w,
                    h,
                });
            }
            DragRendering::ShowOutlineOnly => {
                tracing::trace!("Outline of {:?} at {}x{} is not drawn", handle, w, h);
            }
        }
        true
    }

    // The logical size is only known once the display server applied the resize.
    fn show_size(&mut self) {
        if !self.config.resize_popup() {
            return;
        }
        self.flush_actions();
        let Some(drag) = self.state.drag.active() else {
            return;
        };
        let (handle, screen) = (drag.client(), drag.screen());
        if let Some(geometry) = self.display_server.window_geometry(&handle) {
            let act = self
                .state
                .overlay
                .update(screen, overlay::size_text(geometry.logical_size));
            self.state.actions.push_back(act);
        }
    }
}
