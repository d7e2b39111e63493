//! Sticky screen edges for windows being moved.
//!
//! A frame crossing a work area edge is held on that edge while it stays within
//! `resistance` pixels past it. Each sample is compared against the previous
//! *snapped* position, so the frame keeps sticking until the pointer has been
//! dragged far enough to push it out of the band in a single step.
use crate::models::Xyhw;

/// Returns the frame position for a raw `target`, given the position applied on
/// the previous sample (`None` right after a move begins) and the outer size of
/// the frame.
#[must_use]
pub fn resist(
    target: (i32, i32),
    last: Option<(i32, i32)>,
    outer_size: (i32, i32),
    area: &Xyhw,
    resistance: i32,
) -> (i32, i32) {
    let Some((last_x, last_y)) = last else {
        return target;
    };
    if resistance <= 0 {
        return target;
    }
    let far_x = area.right() - outer_size.0 + 1;
    let far_y = area.bottom() - outer_size.1 + 1;
    (
        resist_axis(target.0, last_x, area.x(), far_x, resistance),
        resist_axis(target.1, last_y, area.y(), far_y, resistance),
    )
}

// `near` is the left/top edge, `far` the furthest origin that keeps the frame
// inside the right/bottom edge.
fn resist_axis(pos: i32, last: i32, near: i32, far: i32, resistance: i32) -> i32 {
    if far < near {
        // frame is larger than the work area
        return pos;
    }
    if last >= near && pos < near && pos >= near.saturating_sub(resistance) {
        return near;
    }
    if last <= far && pos > far && pos <= far.saturating_add(resistance) {
        return far;
    }
    pos
}
