//! Property tests for movement and collision resolution.

use proptest::prelude::*;

use cozy_core::game::collision::{move_and_collide, resolve_collisions, Axis};
use cozy_core::{tick, InputFrame, PlayerState, Rect, Vec2, World};

const SPEED: f32 = 250.0;

fn arb_rect() -> impl Strategy<Value = Rect> {
    (-200i32..1200, -200i32..800, 1i32..200, 1i32..200)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn arb_input() -> impl Strategy<Value = InputFrame> {
    (0u8..16).prop_map(|flags| InputFrame { flags })
}

proptest! {
    /// A player that starts clear of every collider ends the frame clear of
    /// every collider, whatever the layout and direction.
    #[test]
    fn prop_no_overlap_after_resolution(
        start in arb_rect(),
        colliders in prop::collection::vec(arb_rect(), 0..8),
        input in arb_input(),
        dt in 0.001f32..0.1,
    ) {
        prop_assume!(colliders.iter().all(|c| !c.overlaps(&start)));

        let mut rect = start;
        let mut contacts = Vec::new();
        move_and_collide(&mut rect, input.direction(), SPEED, dt, &colliders, &mut contacts);

        for (i, collider) in colliders.iter().enumerate() {
            prop_assert!(!rect.overlaps(collider), "overlaps collider {}: {} vs {}", i, rect, collider);
        }
        prop_assert_eq!((rect.width, rect.height), (start.width, start.height));
    }

    /// Resolving one axis never moves the rectangle on the other axis.
    #[test]
    fn prop_resolution_stays_on_axis(
        start in arb_rect(),
        colliders in prop::collection::vec(arb_rect(), 0..8),
        input in arb_input(),
    ) {
        let velocity = input.direction();

        let mut rect = start;
        resolve_collisions(&mut rect, velocity, &colliders, Axis::X, &mut Vec::new());
        prop_assert_eq!(rect.y, start.y);

        let mut rect = start;
        resolve_collisions(&mut rect, velocity, &colliders, Axis::Y, &mut Vec::new());
        prop_assert_eq!(rect.x, start.x);
    }

    /// Any non-zero key combination normalizes to unit length.
    #[test]
    fn prop_direction_is_unit_or_zero(input in arb_input()) {
        let dir = input.direction();
        if input.raw_direction().is_zero() {
            prop_assert_eq!(dir, Vec2::ZERO);
        } else {
            prop_assert!((dir.length() - 1.0).abs() < 1e-6);
        }
    }

    /// Diagonal movement is never faster than axis movement.
    #[test]
    fn prop_no_diagonal_speed_boost(dt in 0.001f32..0.1) {
        let world = World::with_colliders(10_000, 10_000, Vec::new());
        let mut axis = PlayerState::new((5_000, 5_000), (10, 10));
        let mut diagonal = axis;

        let a = tick(&mut axis, &world, &InputFrame::from_keys(false, true, false, false), dt, SPEED);
        let d = tick(&mut diagonal, &world, &InputFrame::from_keys(false, true, false, true), dt, SPEED);

        let axis_len = (a.displacement.0 as f32).hypot(a.displacement.1 as f32);
        let diag_len = (d.displacement.0 as f32).hypot(d.displacement.1 as f32);
        prop_assert!(diag_len <= axis_len + 1.0);
    }

    /// Left then right with the same dt lands within a pixel of the start.
    #[test]
    fn prop_left_then_right_returns(
        x in 100i32..700,
        y in 100i32..400,
        dt in 0.001f32..0.1,
    ) {
        let world = World::new(960, 540, 16);
        let mut player = PlayerState::new((x, y), (86, 96));
        prop_assume!(world.first_overlap(&player.rect).is_none());
        // Keep a full step of clearance from the walls on both sides
        prop_assume!(player.rect.left() - 16 > 25 && 944 - player.rect.right() > 25);

        tick(&mut player, &world, &InputFrame::from_keys(true, false, false, false), dt, SPEED);
        tick(&mut player, &world, &InputFrame::from_keys(false, true, false, false), dt, SPEED);

        prop_assert!((player.rect.x - x).abs() <= 1);
        prop_assert_eq!(player.rect.y, y);
    }
}
