//! Cozy Game Prototype
//!
//! A single character walking over a static background, blocked by the
//! screen's boundary walls. Game logic lives in `cozy-core`; this crate is
//! the window, keyboard and sprites.

mod game;

use std::path::Path;

use bevy::prelude::*;
use bevy::window::WindowMode;

use cozy_core::GameConfig;
use game::GamePlugin;

/// Config file looked up in the working directory when `COZY_CONFIG` is unset.
const CONFIG_FILE: &str = "cozy.json";

fn main() -> AppExit {
    let (config, config_error) = match GameConfig::from_env(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (GameConfig::default(), Some(err)),
    };

    let mut app = App::new();

    // Bevy defaults with custom window
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: config.window_title.clone(),
            resolution: (config.screen_width as f32, config.screen_height as f32).into(),
            mode: WindowMode::Windowed,
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // LogPlugin is installed now, so this reaches the log
    if let Some(err) = config_error {
        warn!("{}; using default config", err);
    }

    app
        // Fixed-rate simulation at the configured frame rate
        .insert_resource(Time::<Fixed>::from_hz(config.fps as f64))
        .add_plugins(GamePlugin::new(config))
        .add_systems(Startup, setup_2d_camera)
        .run()
}

/// Unscaled 2D camera: one world unit per logical pixel
fn setup_2d_camera(mut commands: Commands) {
    commands.spawn(Camera2d);

    info!("Cozy Game Prototype v{} initialized!", cozy_core::VERSION);
}
