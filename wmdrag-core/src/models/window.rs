//! Window Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;

use super::Corner;
use super::Insets;
use super::WindowType;
use super::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + Send + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Generic structs with serde derive need `#[serde(bound = "")]` wherever the
/// generic is declared, see <https://github.com/serde-rs/serde/issues/1296>.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

impl Handle for u32 {}

/// What the display server reports about a window when asked for its geometry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub r#type: WindowType,
    /// Outer rectangle including decorations.
    pub frame: Xyhw,
    /// Client area in root coordinates.
    pub content: Xyhw,
    pub insets: Insets,
    /// Size in the client's own units (e.g. character cells for a terminal).
    pub logical_size: (i32, i32),
}

impl WindowGeometry {
    /// Builds a geometry whose frame wraps `content` with `insets` and whose
    /// logical size is its pixel size.
    #[must_use]
    pub fn from_content(r#type: WindowType, content: Xyhw, insets: Insets) -> Self {
        let frame = Xyhw::new(
            content.x() - insets.left as i32,
            content.y() - insets.top as i32,
            content.w() + insets.horizontal(),
            content.h() + insets.vertical(),
        );
        Self {
            r#type,
            frame,
            content,
            insets,
            logical_size: (content.w(), content.h()),
        }
    }

    /// Size of the frame computed from the client area and the decorations.
    #[must_use]
    pub const fn outer_size(&self) -> (i32, i32) {
        (
            self.content.w() + self.insets.horizontal(),
            self.content.h() + self.insets.vertical(),
        )
    }

    /// Translation from the client area origin to the frame origin.
    #[must_use]
    pub const fn frame_offset(&self) -> (i32, i32) {
        (
            self.frame.x() - self.content.x(),
            self.frame.y() - self.content.y(),
        )
    }

    #[must_use]
    pub const fn is_normal(&self) -> bool {
        self.r#type.is_normal()
    }

    /// The same window with its frame moved to x,y.
    #[must_use]
    pub fn moved_to(&self, x: i32, y: i32) -> Self {
        let (offset_x, offset_y) = self.frame_offset();
        let content = Xyhw::new(x - offset_x, y - offset_y, self.content.w(), self.content.h());
        Self::from_content(self.r#type, content, self.insets)
    }

    /// The same window with a `w` by `h` client area, keeping `anchor` in place.
    #[must_use]
    pub fn resized_from(&self, anchor: Corner, w: i32, h: i32) -> Self {
        let old = self.content;
        let x = if anchor.is_left() { old.x() } else { old.x() + old.w() - w };
        let y = if anchor.is_top() { old.y() } else { old.y() + old.h() - h };
        Self::from_content(self.r#type, Xyhw::new(x, y, w, h), self.insets)
    }
}
