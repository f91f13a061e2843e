//! Player State
//!
//! The single playable character: body rectangle, velocity and facing.

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::input::InputFrame;

/// Default player body size in pixels.
pub const PLAYER_SIZE: (i32, i32) = (86, 96);

/// Default spawn position (top-left corner).
pub const PLAYER_SPAWN: (i32, i32) = (120, 120);

/// Mutable state of the player, updated once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerState {
    /// Body rectangle in screen space
    pub rect: Rect,
    /// Movement direction (unit vector or zero)
    pub velocity: Vec2,
    /// Facing flag; drives horizontal sprite mirroring
    pub facing_right: bool,
}

impl PlayerState {
    /// Create a player with its top-left corner at `position`.
    pub fn new(position: (i32, i32), size: (i32, i32)) -> Self {
        Self {
            rect: Rect::from_top_left(position, size),
            velocity: Vec2::ZERO,
            facing_right: true,
        }
    }

    /// Replace velocity and facing from this frame's input.
    ///
    /// Velocity is reset every frame; facing only changes while a
    /// horizontal key is held.
    pub fn apply_input(&mut self, input: &InputFrame) {
        self.velocity = input.direction();
        if let Some(facing_right) = input.facing() {
            self.facing_right = facing_right;
        }
    }

    /// Whether the sprite is drawn mirrored.
    ///
    /// The source art faces left, so it is mirrored while facing right.
    #[inline]
    pub fn flip_x(&self) -> bool {
        self.facing_right
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PLAYER_SPAWN, PLAYER_SIZE)
    }
}
