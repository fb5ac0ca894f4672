//! Axis-aligned bounding box overlap
//!
//! All comparisons are strict: rectangles that only share an edge or a
//! corner do not collide.

use super::actor::Actor;

/// Strict AABB overlap test on the actors' current positions
#[inline]
pub fn overlaps(a: &Actor, b: &Actor) -> bool {
    let (a_pos, b_pos) = (a.current, b.current);
    a_pos.x < b_pos.x + b.size.x
        && a_pos.x + a.size.x > b_pos.x
        && a_pos.y < b_pos.y + b.size.y
        && a_pos.y + a.size.y > b_pos.y
}
