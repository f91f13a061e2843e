//! Input Capture and Normalization
//!
//! One `InputFrame` per simulated frame: the four directional keys packed as
//! bit flags. The client fills it from the keyboard; the headless runner and
//! tests build it directly.

use crate::core::vec2::Vec2;

/// Directional key state for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputFrame {
    /// Packed key bits (see `FLAG_*`)
    pub flags: u8,
}

impl InputFrame {
    /// Left arrow or A
    pub const FLAG_LEFT: u8 = 0x01;

    /// Right arrow or D
    pub const FLAG_RIGHT: u8 = 0x02;

    /// Up arrow or W
    pub const FLAG_UP: u8 = 0x04;

    /// Down arrow or S
    pub const FLAG_DOWN: u8 = 0x08;

    /// No keys held.
    pub const IDLE: Self = Self { flags: 0 };

    /// Create an empty input frame.
    pub const fn new() -> Self {
        Self::IDLE
    }

    /// Create from individual key states.
    pub const fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        let mut flags = 0;
        if left {
            flags |= Self::FLAG_LEFT;
        }
        if right {
            flags |= Self::FLAG_RIGHT;
        }
        if up {
            flags |= Self::FLAG_UP;
        }
        if down {
            flags |= Self::FLAG_DOWN;
        }
        Self { flags }
    }

    /// Left held.
    #[inline]
    pub fn left(&self) -> bool {
        self.flags & Self::FLAG_LEFT != 0
    }

    /// Right held.
    #[inline]
    pub fn right(&self) -> bool {
        self.flags & Self::FLAG_RIGHT != 0
    }

    /// Up held.
    #[inline]
    pub fn up(&self) -> bool {
        self.flags & Self::FLAG_UP != 0
    }

    /// Down held.
    #[inline]
    pub fn down(&self) -> bool {
        self.flags & Self::FLAG_DOWN != 0
    }

    /// Check if this is an idle frame (no keys).
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Raw direction before normalization.
    ///
    /// Right overrides left and down overrides up when both are held.
    pub fn raw_direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left() {
            dir.x = -1.0;
        }
        if self.right() {
            dir.x = 1.0;
        }
        if self.up() {
            dir.y = -1.0;
        }
        if self.down() {
            dir.y = 1.0;
        }
        dir
    }

    /// Movement direction, normalized to unit length (or zero).
    #[inline]
    pub fn direction(&self) -> Vec2 {
        let dir = self.raw_direction();
        if dir.length_squared() > 0.0 {
            dir.normalize()
        } else {
            dir
        }
    }

    /// Facing implied by this frame's horizontal keys.
    ///
    /// `Some(true)` faces right, `Some(false)` faces left, `None` keeps the
    /// current facing.
    pub fn facing(&self) -> Option<bool> {
        if self.right() {
            Some(true)
        } else if self.left() {
            Some(false)
        } else {
            None
        }
    }
}
