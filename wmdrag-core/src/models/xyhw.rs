//! Rectangles used for frames, content areas and screen work areas.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};

/// Integer rectangle. x,y from top left, edges returned by [`Xyhw::right`] and
/// [`Xyhw::bottom`] are inclusive.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    /// Last column still inside the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Last row still inside the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }
}
