//! Geometry primitives shared by the simulation and the client.

pub mod rect;
pub mod vec2;

// Re-export core types
pub use rect::Rect;
pub use vec2::Vec2;
