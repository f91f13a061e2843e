//! Collision Resolution
//!
//! Per-axis sweep-and-resolve: move X, resolve X, move Y, resolve Y.
//! Resolving each axis separately keeps the player from cutting corners
//! when sliding along a wall.
//!
//! Colliders are resolved one at a time in list order with no
//! minimum-penetration tie-break. When several colliders overlap, each one
//! clamps in turn and the last overlapping collider decides the final edge.

use tracing::debug;

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;

/// Movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

/// A collider clamped the player on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Axis that was resolved
    pub axis: Axis,
    /// Index into the collider list
    pub collider: usize,
}

/// Integer displacement for one axis this frame.
///
/// Truncates toward zero, so sub-pixel motion is dropped rather than
/// accumulated.
#[inline]
pub fn axis_displacement(component: f32, speed: f32, dt: f32) -> i32 {
    (component * speed * dt) as i32
}

/// Push `rect` out of every collider it overlaps on `axis`.
///
/// The moving edge is clamped according to the sign of the velocity
/// component: travelling right puts the right edge on the collider's left
/// edge, travelling left puts the left edge on its right edge (and likewise
/// down/up for Y). A zero component clamps nothing.
pub fn resolve_collisions(
    rect: &mut Rect,
    velocity: Vec2,
    colliders: &[Rect],
    axis: Axis,
    contacts: &mut Vec<Contact>,
) {
    for (index, collider) in colliders.iter().enumerate() {
        if !rect.overlaps(collider) {
            continue;
        }

        let clamped = match axis {
            Axis::X => {
                if velocity.x > 0.0 {
                    rect.set_right(collider.left());
                    true
                } else if velocity.x < 0.0 {
                    rect.set_left(collider.right());
                    true
                } else {
                    false
                }
            }
            Axis::Y => {
                if velocity.y > 0.0 {
                    rect.set_bottom(collider.top());
                    true
                } else if velocity.y < 0.0 {
                    rect.set_top(collider.bottom());
                    true
                } else {
                    false
                }
            }
        };

        if clamped {
            debug!("Clamped on {:?} against collider {} -> {}", axis, index, rect);
            contacts.push(Contact { axis, collider: index });
        }
    }
}

/// Move `rect` along `velocity` and resolve against `colliders`.
///
/// Horizontal displacement is applied and resolved first, then vertical
/// against the already-adjusted rectangle.
///
/// Returns the requested (pre-resolution) displacement.
pub fn move_and_collide(
    rect: &mut Rect,
    velocity: Vec2,
    speed: f32,
    dt: f32,
    colliders: &[Rect],
    contacts: &mut Vec<Contact>,
) -> (i32, i32) {
    // Move on X axis
    let dx = axis_displacement(velocity.x, speed, dt);
    rect.x += dx;
    resolve_collisions(rect, velocity, colliders, Axis::X, contacts);

    // Move on Y axis
    let dy = axis_displacement(velocity.y, speed, dt);
    rect.y += dy;
    resolve_collisions(rect, velocity, colliders, Axis::Y, contacts);

    (dx, dy)
}
