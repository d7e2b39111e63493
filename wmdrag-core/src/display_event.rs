use crate::models::{Handle, MouseContext, ScreenId, WindowHandle, Xyhw};
use crate::utils::modmask_lookup::ModMask;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent<H: Handle> {
    /// Pointer moved while the move binding is held.
    #[serde(bound = "")]
    MoveMotion(PointerMotion<H>),
    /// Pointer moved while the resize binding is held.
    #[serde(bound = "")]
    ResizeMotion(PointerMotion<H>),
    EndMove,
    EndResize,
    /// Key released while the drag holds the keyboard. `state` is the modifier
    /// state before the release and `key` the modifier being released.
    KeyRelease { key: ModMask, state: ModMask },
    #[serde(bound = "")]
    WindowDestroy(WindowHandle<H>),
}

/// A motion sample together with what was recorded when the button went down.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PointerMotion<H: Handle> {
    #[serde(bound = "")]
    pub window: WindowHandle<H>,
    pub screen: ScreenId,
    /// Client area of the window at the press, in root coordinates.
    pub press_client: Xyhw,
    /// Pointer position at the press, in root coordinates.
    pub press_pointer: (i32, i32),
    /// Current pointer position, in root coordinates.
    pub pointer: (i32, i32),
    #[serde(default)]
    pub modifiers: ModMask,
    #[serde(default)]
    pub context: MouseContext,
}
