//! Game Logic Module
//!
//! Everything that happens inside one frame. Engine-independent and
//! deterministic for a given input sequence and frame duration.
//!
//! ## Module Structure
//!
//! - `input`: Directional key state and normalization
//! - `state`: Player state
//! - `world`: Static collider layout
//! - `collision`: Per-axis movement and collision resolution
//! - `tick`: One frame, plus input replay

pub mod input;
pub mod state;
pub mod world;
pub mod collision;
pub mod tick;

// Re-export key types
pub use input::InputFrame;
pub use state::PlayerState;
pub use world::World;
pub use collision::{Axis, Contact};
pub use tick::{tick, replay, TickResult};
