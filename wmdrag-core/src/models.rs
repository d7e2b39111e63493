//! Objects (such as windows and the drag session) used by the state machine.
mod corner;
mod drag_session;
mod insets;
mod manager;
mod mode;
mod mouse_context;
mod window;
mod window_type;
mod xyhw;

pub use corner::Corner;
pub use drag_session::{ActiveDrag, DragKind, DragSession};
pub use insets::Insets;
pub use manager::Manager;
pub use mode::{DragMode, DragRendering};
pub use mouse_context::MouseContext;
pub use window::Handle;
pub use window::MockHandle;
pub use window::WindowGeometry;
pub use window::WindowHandle;
pub use window_type::WindowType;
pub use xyhw::Xyhw;

pub type ScreenId = usize;
