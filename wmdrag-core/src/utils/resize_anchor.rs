//! Picks the corner that stays put while a window is resized.
use crate::models::Corner;

/// The fixed corner of a resize and how the pointer delta maps onto the new size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub corner: Corner,
    /// Dragging left grows the window.
    pub flip_x: bool,
    /// Dragging up grows the window.
    pub flip_y: bool,
}

impl Anchor {
    /// Converts a raw pointer delta into a size delta.
    #[must_use]
    pub const fn size_delta(&self, dx: i32, dy: i32) -> (i32, i32) {
        (
            if self.flip_x { -dx } else { dx },
            if self.flip_y { -dy } else { dy },
        )
    }
}

/// `offset` is the press position relative to the window origin and `size` the
/// window size at the press. Without `nearest` the top left corner is always
/// the anchor, unless the resize was started from a grip. Otherwise the corner
/// opposite to the quadrant holding the press is used; a press on the exact
/// middle counts as bottom/right.
#[must_use]
pub const fn select_anchor(
    offset: (i32, i32),
    size: (i32, i32),
    from_grip: bool,
    nearest: bool,
) -> Anchor {
    if !(nearest || from_grip) {
        return Anchor {
            corner: Corner::TopLeft,
            flip_x: false,
            flip_y: false,
        };
    }
    let flip_x = offset.0 < size.0 / 2;
    let flip_y = offset.1 < size.1 / 2;
    let corner = match (flip_y, flip_x) {
        (true, true) => Corner::BottomRight,
        (true, false) => Corner::BottomLeft,
        (false, true) => Corner::TopRight,
        (false, false) => Corner::TopLeft,
    };
    Anchor {
        corner,
        flip_x,
        flip_y,
    }
}
