//! Player systems - keyboard sampling and fixed-step movement

use bevy::prelude::*;

use cozy_core::{tick, InputFrame, PlayerState};

use super::{visuals, Arena, Player, PlayerInput, Settings};

// ============================================================================
// PLAYER SPAWNING
// ============================================================================

/// Spawn the player entity with the given sprite texture
pub fn spawn_player(commands: &mut Commands, state: PlayerState, texture: Handle<Image>, screen: (i32, i32)) {
    commands.spawn((
        Player { state },
        PlayerInput::default(),
        Name::new("Player"),
        Sprite {
            image: texture,
            custom_size: Some(visuals::rect_size(&state.rect)),
            flip_x: state.flip_x(),
            ..default()
        },
        Transform::from_translation(visuals::rect_to_translation(&state.rect, screen, visuals::PLAYER_Z)),
    ));

    info!("Player spawned at {:?}", state.position());
}

// ============================================================================
// PLAYER INPUT
// ============================================================================

/// Arrow keys or WASD
pub fn read_keys(keyboard: &ButtonInput<KeyCode>) -> InputFrame {
    InputFrame::from_keys(
        keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]),
        keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]),
        keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]),
        keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]),
    )
}

/// Sample the keyboard for this step
pub fn player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut PlayerInput, With<Player>>,
) {
    let Ok(mut input) = query.get_single_mut() else {
        return;
    };

    input.0 = read_keys(&keyboard);
}

// ============================================================================
// MOVEMENT
// ============================================================================

/// Advance the simulation one step (fixed timestep)
pub fn player_movement(
    time: Res<Time>,
    settings: Res<Settings>,
    arena: Res<Arena>,
    mut query: Query<(&mut Player, &PlayerInput)>,
) {
    let dt = time.delta_secs();

    for (mut player, input) in query.iter_mut() {
        let result = tick(&mut player.state, &arena.0, &input.0, dt, settings.0.player_speed);

        if result.blocked() {
            trace!("Blocked by {:?}", result.contacts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use bevy::ecs::system::RunSystemOnce;
    use cozy_core::GameConfig;

    #[test]
    fn test_read_keys() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        assert!(read_keys(&keyboard).is_idle());

        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::ArrowUp);
        let frame = read_keys(&keyboard);
        assert!(frame.left() && frame.up());
        assert!(!frame.right() && !frame.down());
    }

    #[test]
    fn test_movement_system_runs_tick() {
        let config = GameConfig::default();
        let mut world = bevy::ecs::world::World::new();

        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(100));
        world.insert_resource(time);
        world.insert_resource(Arena(config.build_world()));
        world.insert_resource(Settings(config.clone()));

        let entity = world
            .spawn((
                Player { state: config.spawn_player() },
                PlayerInput(InputFrame::from_keys(true, false, false, false)),
            ))
            .id();

        world.run_system_once(player_movement).expect("movement system runs");

        let player = world.get::<Player>(entity).expect("player exists");
        // 250 px/s for 0.1 s
        assert_eq!(player.state.position(), (95, 120));
        assert!(!player.state.facing_right);
    }
}
