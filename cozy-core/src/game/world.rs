//! World Geometry
//!
//! The static collider layout. Colliders are fixed once the world is built.

use tracing::info;

use crate::core::rect::Rect;

/// Default boundary wall thickness in pixels.
pub const WALL_THICKNESS: i32 = 16;

/// Static world: screen bounds plus collider rectangles.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    width: i32,
    height: i32,
    colliders: Vec<Rect>,
}

impl World {
    /// Build the default world: four boundary walls around the screen.
    ///
    /// Wall order is top, bottom, left, right. Collision resolution walks
    /// colliders in this order.
    pub fn new(width: i32, height: i32, wall_thickness: i32) -> Self {
        let t = wall_thickness;
        let colliders = vec![
            Rect::new(0, 0, width, t),
            Rect::new(0, height - t, width, t),
            Rect::new(0, 0, t, height),
            Rect::new(width - t, 0, t, height),
        ];

        info!("World {}x{} with {} boundary walls ({}px)", width, height, colliders.len(), t);

        Self { width, height, colliders }
    }

    /// Build a world from an explicit collider list (kept in the given order).
    pub fn with_colliders(width: i32, height: i32, colliders: Vec<Rect>) -> Self {
        Self { width, height, colliders }
    }

    /// Screen width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Screen height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Colliders in resolution order.
    #[inline]
    pub fn colliders(&self) -> &[Rect] {
        &self.colliders
    }

    /// Index of the first collider overlapping `rect`, if any.
    pub fn first_overlap(&self, rect: &Rect) -> Option<usize> {
        self.colliders.iter().position(|c| c.overlaps(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_walls() {
        let world = World::new(960, 540, WALL_THICKNESS);
        let walls = world.colliders();
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[0], Rect::new(0, 0, 960, 16));
        assert_eq!(walls[1], Rect::new(0, 524, 960, 16));
        assert_eq!(walls[2], Rect::new(0, 0, 16, 540));
        assert_eq!(walls[3], Rect::new(944, 0, 16, 540));
    }

    #[test]
    fn test_first_overlap() {
        let world = World::new(960, 540, WALL_THICKNESS);

        // Inside the walls
        assert_eq!(world.first_overlap(&Rect::new(120, 120, 86, 96)), None);
        // Touching the left wall is not an overlap
        assert_eq!(world.first_overlap(&Rect::new(16, 120, 86, 96)), None);
        // Corner overlap reports the first wall in order (top)
        assert_eq!(world.first_overlap(&Rect::new(10, 10, 86, 96)), Some(0));
    }
}
