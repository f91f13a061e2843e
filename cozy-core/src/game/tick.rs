//! Frame Tick
//!
//! One simulated frame: apply input, move and resolve, update facing.
//! Pure function of (state, world, input, dt, speed); no clock, no I/O.

use crate::game::collision::{move_and_collide, Contact};
use crate::game::input::InputFrame;
use crate::game::state::PlayerState;
use crate::game::world::World;

/// Result of a tick.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickResult {
    /// Requested displacement before collision resolution
    pub displacement: (i32, i32),
    /// Colliders that clamped the player this tick, in resolution order
    pub contacts: Vec<Contact>,
}

impl TickResult {
    /// True if any collider stopped the player this tick.
    #[inline]
    pub fn blocked(&self) -> bool {
        !self.contacts.is_empty()
    }
}

/// Run one frame.
///
/// # Arguments
///
/// * `player` - The player state (will be mutated)
/// * `world` - Static colliders
/// * `input` - Keys held this frame
/// * `dt` - Frame duration in seconds
/// * `speed` - Player speed in pixels per second
pub fn tick(
    player: &mut PlayerState,
    world: &World,
    input: &InputFrame,
    dt: f32,
    speed: f32,
) -> TickResult {
    let mut result = TickResult::default();

    // 1. Input -> velocity and facing
    player.apply_input(input);

    // 2. Move X, resolve X, move Y, resolve Y
    result.displacement = move_and_collide(
        &mut player.rect,
        player.velocity,
        speed,
        dt,
        world.colliders(),
        &mut result.contacts,
    );

    result
}

/// Replay a recorded input sequence at a fixed frame duration.
///
/// Returns the final state and every contact, in order.
pub fn replay(
    initial: PlayerState,
    world: &World,
    inputs: &[InputFrame],
    dt: f32,
    speed: f32,
) -> (PlayerState, Vec<Contact>) {
    let mut player = initial;
    let mut all_contacts = Vec::new();

    for input in inputs {
        let result = tick(&mut player, world, input, dt, speed);
        all_contacts.extend(result.contacts);
    }

    (player, all_contacts)
}
