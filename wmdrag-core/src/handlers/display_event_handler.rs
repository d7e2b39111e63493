use super::{Config, DisplayServer, Handle, Manager};
use crate::errors::Result;
use crate::models::{DragKind, WindowHandle};
use crate::DisplayEvent;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process a single event, applying its changes to the drag session.
    /// Returns true if window geometry may have changed.
    ///
    /// # Errors
    ///
    /// Propagates the fatal errors of [`Manager::key_release_handler`].
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> Result<bool> {
        let changed = match event {
            DisplayEvent::MoveMotion(motion) => {
                if self.state.drag.is_dragging(&motion.window, DragKind::Move) {
                    self.window_move_handler(motion.pointer)
                } else {
                    self.begin_move(&motion)
                }
            }
            DisplayEvent::ResizeMotion(motion) => {
                if self.state.drag.is_dragging(&motion.window, DragKind::Resize) {
                    self.window_resize_handler(motion.pointer)
                } else {
                    self.begin_resize(&motion)
                }
            }
            DisplayEvent::EndMove => self.end_move(),
            DisplayEvent::EndResize => self.end_resize(),
            DisplayEvent::KeyRelease { key, state } => self.key_release_handler(key, state)?,
            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(&handle),
        };
        Ok(changed)
    }

    /// Drop the session if its window is gone. Nothing is applied to the window.
    fn window_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let dragged = self
            .state
            .drag
            .active()
            .is_some_and(|drag| &drag.client() == handle);
        if dragged {
            tracing::debug!("Dragged window {:?} was destroyed", handle);
            self.finish_drag();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_helpers::{executed, manager, motion, WINDOW};
    use crate::models::DragMode;
    use crate::{DisplayAction, ModMask};

    #[test]
    fn motion_events_begin_then_update_a_move() {
        let mut manager = manager();
        assert_eq!(
            manager.display_event_handler(DisplayEvent::MoveMotion(motion((160, 155)))),
            Ok(true)
        );
        assert_eq!(
            manager.display_event_handler(DisplayEvent::MoveMotion(motion((170, 160)))),
            Ok(true)
        );
        assert_eq!(manager.display_server.grabs_taken, 1);
        let moves: Vec<_> = executed(&mut manager)
            .into_iter()
            .filter(|act| matches!(act, DisplayAction::MoveFrame { .. }))
            .collect();
        assert_eq!(moves.len(), 2);
        assert_eq!(
            moves[1],
            DisplayAction::MoveFrame {
                window: WINDOW,
                x: 120,
                y: 110
            }
        );
    }

    #[test]
    fn moving_and_resizing_are_never_both_active() {
        let mut manager = manager();
        let events = vec![
            DisplayEvent::ResizeMotion(motion((160, 155))),
            DisplayEvent::MoveMotion(motion((170, 160))),
            DisplayEvent::EndMove,
            DisplayEvent::ResizeMotion(motion((165, 150))),
            DisplayEvent::EndResize,
            DisplayEvent::MoveMotion(motion((170, 160))),
        ];
        let mut modes = vec![];
        for event in events {
            manager.display_event_handler(event).unwrap();
            modes.push(manager.state.drag.mode());
        }
        assert_eq!(
            modes,
            vec![
                DragMode::Resizing,
                DragMode::Resizing,
                DragMode::Resizing,
                DragMode::Resizing,
                DragMode::Idle,
                DragMode::Moving,
            ]
        );
    }

    #[test]
    fn destroying_the_dragged_window_ends_the_session() {
        let mut manager = manager();
        manager
            .display_event_handler(DisplayEvent::MoveMotion(motion((160, 155))))
            .unwrap();
        let _ = executed(&mut manager);
        manager.display_server.windows.clear();
        manager
            .display_event_handler(DisplayEvent::WindowDestroy(WINDOW))
            .unwrap();
        assert_eq!(manager.state.drag.mode(), DragMode::Idle);
        assert!(!manager.display_server.holds_grab());
        assert_eq!(executed(&mut manager), vec![DisplayAction::HideOverlay]);
    }

    #[test]
    fn destroying_another_window_changes_nothing() {
        let mut manager = manager();
        manager
            .display_event_handler(DisplayEvent::MoveMotion(motion((160, 155))))
            .unwrap();
        manager
            .display_event_handler(DisplayEvent::WindowDestroy(WindowHandle(7)))
            .unwrap();
        assert_eq!(manager.state.drag.mode(), DragMode::Moving);
    }

    #[test]
    fn a_window_vanishing_mid_move_tears_the_session_down() {
        let mut manager = manager();
        manager
            .display_event_handler(DisplayEvent::MoveMotion(motion((160, 155))))
            .unwrap();
        let _ = executed(&mut manager);
        manager.display_server.windows.clear();
        assert_eq!(
            manager.display_event_handler(DisplayEvent::MoveMotion(motion((170, 160)))),
            Ok(false)
        );
        assert_eq!(manager.state.drag.mode(), DragMode::Idle);
        assert!(!manager.display_server.holds_grab());
        assert_eq!(executed(&mut manager), vec![DisplayAction::HideOverlay]);
    }

    #[test]
    fn key_release_events_end_the_drag() {
        let mut manager = manager();
        manager
            .display_event_handler(DisplayEvent::MoveMotion(motion((160, 155))))
            .unwrap();
        let release = DisplayEvent::KeyRelease {
            key: ModMask::Alt,
            state: ModMask::Alt,
        };
        assert_eq!(manager.display_event_handler(release), Ok(true));
        assert_eq!(manager.state.drag.mode(), DragMode::Idle);
    }
}
