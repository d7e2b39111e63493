use serde::{Deserialize, Serialize};

/// Space taken by the frame decorations around a window's content area.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const fn new(size: u32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// Border on the sides and a title bar on top.
    pub const fn new_titled(title: u32, border: u32) -> Self {
        Self {
            top: title,
            right: border,
            bottom: border,
            left: border,
        }
    }

    pub const fn horizontal(&self) -> i32 {
        (self.left + self.right) as i32
    }

    pub const fn vertical(&self) -> i32 {
        (self.top + self.bottom) as i32
    }
}
