//! # Cozy Game Core
//!
//! Engine-independent simulation for the Cozy Game prototype: one player,
//! four boundary walls, per-axis collision resolution.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        COZY CORE                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Geometry primitives                       │
//! │  ├── rect.rs     - Integer axis-aligned rectangles           │
//! │  └── vec2.rs     - 2D direction vector                       │
//! │                                                              │
//! │  game/           - Frame logic                               │
//! │  ├── input.rs    - Key state and normalization               │
//! │  ├── state.rs    - Player state                              │
//! │  ├── world.rs    - Static colliders                          │
//! │  ├── collision.rs- Move X, resolve X, move Y, resolve Y      │
//! │  └── tick.rs     - One frame, input replay                   │
//! │                                                              │
//! │  assets.rs       - Load image or solid placeholder           │
//! │  config.rs       - JSON configuration                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `core/` and `game/` modules do no I/O and read no clock: given the
//! same inputs and frame duration, a session replays identically.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod assets;
pub mod config;

// Re-export commonly used types
pub use crate::core::rect::Rect;
pub use crate::core::vec2::Vec2;
pub use game::input::InputFrame;
pub use game::state::PlayerState;
pub use game::world::World;
pub use game::tick::{tick, replay, TickResult};
pub use assets::{load_or_placeholder, AssetError, LoadedImage};
pub use config::{GameConfig, ConfigError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation frame rate (Hz)
pub const TICK_RATE: u32 = 60;

/// Player speed in pixels per second
pub const PLAYER_SPEED: f32 = 250.0;
