//! Game module - one character, four walls
//!
//! Frame order:
//! - FixedUpdate: sample keys, then tick the simulation
//! - Update: move and mirror the player sprite

use bevy::prelude::*;

use cozy_core::GameConfig;

pub mod components;
pub mod player;
pub mod visuals;

pub use components::*;
pub use player::*;
pub use visuals::*;

// ============================================================================
// GAME PLUGIN
// ============================================================================

pub struct GamePlugin {
    config: GameConfig,
}

impl GamePlugin {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .insert_resource(ClearColor(to_color(self.config.background_color)))
            .insert_resource(Arena(self.config.build_world()))
            .insert_resource(Settings(self.config.clone()))

            // Scene setup
            .add_systems(Startup, setup_game)

            // Simulation (fixed timestep for consistency)
            .add_systems(FixedUpdate, (
                player_input,
                player_movement,
            ).chain())

            // Visual updates (variable timestep)
            .add_systems(Update, sync_player_sprite);
    }
}

// ============================================================================
// GAME SETUP
// ============================================================================

fn setup_game(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    settings: Res<Settings>,
    arena: Res<Arena>,
) {
    let config = &settings.0;
    let screen = config.screen_size();

    // Background
    let background = load_texture(
        &config.background_image_path(),
        (config.screen_width, config.screen_height),
        config.background_color,
    );
    commands.spawn((
        Sprite {
            image: images.add(to_bevy_image(&background)),
            custom_size: Some(Vec2::new(screen.0 as f32, screen.1 as f32)),
            ..default()
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, BACKGROUND_Z)),
        Background,
    ));

    // Debug: placeholder hitboxes
    if config.show_colliders {
        for (index, rect) in arena.0.colliders().iter().enumerate() {
            commands.spawn((
                Sprite {
                    color: to_color(config.collider_color),
                    custom_size: Some(rect_size(rect)),
                    ..default()
                },
                Transform::from_translation(rect_to_translation(rect, screen, COLLIDER_Z)),
                Collider,
                Name::new(format!("Collider {}", index)),
            ));
        }
    }

    // Player
    let state = config.spawn_player();
    let sprite = load_texture(
        &config.player_image_path(),
        (config.player_size[0], config.player_size[1]),
        config.player_color,
    );
    spawn_player(&mut commands, state, images.add(to_bevy_image(&sprite)), screen);

    info!("Game ready! {} colliders", arena.0.colliders().len());
}
