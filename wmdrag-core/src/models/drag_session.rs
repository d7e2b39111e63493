//! The single interactive move or resize in progress.
#![allow(clippy::module_name_repetitions)]
use super::{DragMode, Handle, MouseContext, ScreenId, WindowHandle, Xyhw};
use crate::display_event::PointerMotion;
use crate::display_servers::KeyboardGrab;
use crate::utils::modmask_lookup::ModMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

/// A drag in progress. Everything recorded at the press is fixed for the
/// lifetime of the drag; only the pointer delta and the edge history change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag<H: Handle> {
    kind: DragKind,
    screen: ScreenId,
    client: WindowHandle<H>,
    press_client: Xyhw,
    press_pointer: (i32, i32),
    delta: (i32, i32),
    context: MouseContext,
    last_snapped: Option<(i32, i32)>,
    initial_modifiers: ModMask,
}

impl<H: Handle> ActiveDrag<H> {
    #[must_use]
    pub fn new(kind: DragKind, motion: &PointerMotion<H>) -> Self {
        let mut drag = Self {
            kind,
            screen: motion.screen,
            client: motion.window,
            press_client: motion.press_client,
            press_pointer: motion.press_pointer,
            delta: (0, 0),
            context: motion.context,
            last_snapped: None,
            initial_modifiers: motion.modifiers.clean(),
        };
        drag.update_pointer(motion.pointer);
        drag
    }

    pub fn update_pointer(&mut self, (x, y): (i32, i32)) {
        self.delta = (x - self.press_pointer.0, y - self.press_pointer.1);
    }

    pub(crate) fn record_snapped(&mut self, position: (i32, i32)) {
        self.last_snapped = Some(position);
    }

    #[must_use]
    pub const fn kind(&self) -> DragKind {
        self.kind
    }
    #[must_use]
    pub const fn screen(&self) -> ScreenId {
        self.screen
    }
    #[must_use]
    pub const fn client(&self) -> WindowHandle<H> {
        self.client
    }
    #[must_use]
    pub const fn press_client(&self) -> Xyhw {
        self.press_client
    }
    #[must_use]
    pub const fn delta(&self) -> (i32, i32) {
        self.delta
    }
    #[must_use]
    pub const fn context(&self) -> MouseContext {
        self.context
    }
    #[must_use]
    pub const fn last_snapped(&self) -> Option<(i32, i32)> {
        self.last_snapped
    }
    #[must_use]
    pub const fn initial_modifiers(&self) -> ModMask {
        self.initial_modifiers
    }

    /// Where the press landed relative to the client area.
    #[must_use]
    pub const fn press_offset(&self) -> (i32, i32) {
        (
            self.press_pointer.0 - self.press_client.x(),
            self.press_pointer.1 - self.press_client.y(),
        )
    }
}

/// Holds at most one [`ActiveDrag`] and the keyboard grab taken for it.
#[derive(Debug, Default)]
pub struct DragSession<H: Handle> {
    active: Option<ActiveDrag<H>>,
    grab: Option<KeyboardGrab>,
}

impl<H: Handle> DragSession<H> {
    #[must_use]
    pub fn mode(&self) -> DragMode {
        match self.active.as_ref().map(ActiveDrag::kind) {
            Some(DragKind::Move) => DragMode::Moving,
            Some(DragKind::Resize) => DragMode::Resizing,
            None => DragMode::Idle,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag<H>> {
        self.active.as_ref()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActiveDrag<H>> {
        self.active.as_mut()
    }

    #[must_use]
    pub const fn holds_grab(&self) -> bool {
        self.grab.is_some()
    }

    /// True while `handle` is being dragged with `kind`.
    #[must_use]
    pub fn is_dragging(&self, handle: &WindowHandle<H>, kind: DragKind) -> bool {
        self.active
            .as_ref()
            .is_some_and(|drag| drag.kind == kind && &drag.client == handle)
    }

    pub(crate) fn start(&mut self, drag: ActiveDrag<H>) {
        debug_assert!(self.active.is_none(), "a drag is already in progress");
        self.active = Some(drag);
    }

    pub(crate) fn attach_grab(&mut self, grab: KeyboardGrab) {
        debug_assert!(self.grab.is_none(), "keyboard already grabbed");
        self.grab = Some(grab);
    }

    /// Resets the session, handing back whatever it held.
    pub(crate) fn finish(&mut self) -> (Option<ActiveDrag<H>>, Option<KeyboardGrab>) {
        (self.active.take(), self.grab.take())
    }

    #[cfg(test)]
    pub(crate) fn with_stray_grab(grab: KeyboardGrab) -> Self {
        Self {
            active: None,
            grab: Some(grab),
        }
    }
}
