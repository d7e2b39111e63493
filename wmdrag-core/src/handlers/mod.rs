mod display_event_handler;
mod key_release_handler;
mod window_move_handler;
mod window_resize_handler;

use super::config::Config;
use super::display_servers::DisplayServer;
use super::models::{ActiveDrag, Handle, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Tear down the session: give the keyboard back and hide the popup.
    /// Geometry is left as it is.
    pub(crate) fn finish_drag(&mut self) -> Option<ActiveDrag<H>> {
        let (drag, grab) = self.state.drag.finish();
        if let Some(grab) = grab {
            self.display_server.ungrab_keyboard(grab);
        }
        if let Some(act) = self.state.overlay.dismiss() {
            self.state.actions.push_back(act);
        }
        drag
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::config::tests::TestConfig;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{
        Insets, Manager, MockHandle, MouseContext, WindowGeometry, WindowHandle, WindowType, Xyhw,
    };
    use crate::{DisplayAction, ModMask, PointerMotion};

    pub type TestManager = Manager<MockHandle, TestConfig, MockDisplayServer<MockHandle>>;

    pub const WINDOW: WindowHandle<MockHandle> = WindowHandle(1);

    /// 1000x800 screen, a 200x100 client with 2px borders and a 20px title.
    pub fn manager_with(config: TestConfig, r#type: WindowType) -> TestManager {
        let mut manager = Manager::new_test(config);
        manager.display_server.work_areas = vec![Xyhw::new(0, 0, 1000, 800)];
        manager.display_server.windows = vec![(
            WINDOW,
            WindowGeometry::from_content(
                r#type,
                Xyhw::new(102, 120, 196, 78),
                Insets::new_titled(20, 2),
            ),
        )];
        manager
    }

    pub fn manager() -> TestManager {
        manager_with(TestConfig::default(), WindowType::Normal)
    }

    /// Press at (150, 150) with Alt held, pointer now at `pointer`.
    pub fn motion(pointer: (i32, i32)) -> PointerMotion<MockHandle> {
        PointerMotion {
            window: WINDOW,
            screen: 0,
            press_client: Xyhw::new(102, 120, 196, 78),
            press_pointer: (150, 150),
            pointer,
            modifiers: ModMask::Alt,
            context: MouseContext::Client,
        }
    }

    /// Flush the queue and return what the display server executed since the last call.
    pub fn executed(manager: &mut TestManager) -> Vec<DisplayAction<MockHandle>> {
        manager.flush_actions();
        std::mem::take(&mut manager.display_server.executed)
    }
}
