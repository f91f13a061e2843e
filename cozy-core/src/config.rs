//! Game Configuration
//!
//! Every tunable of the prototype, loadable from an optional JSON file.
//! Missing fields take their defaults, so `{}` is a valid config.

use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::assets::Color;
use crate::game::state::{PlayerState, PLAYER_SIZE, PLAYER_SPAWN};
use crate::game::world::{World, WALL_THICKNESS};
use crate::{PLAYER_SPEED, TICK_RATE};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "COZY_CONFIG";

/// Largest accepted screen, player or wall dimension, and spawn coordinate
/// magnitude. Keeps all rectangle edge arithmetic well inside `i32`.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest accepted player speed in pixels per second.
pub const MAX_PLAYER_SPEED: f32 = 100_000.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the file
    #[error("failed to read {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid config JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// Values are out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Prototype configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window caption
    pub window_title: String,
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Simulation frames per second
    pub fps: u32,
    /// Player speed in pixels per second
    pub player_speed: f32,
    /// Player body size
    pub player_size: [u32; 2],
    /// Player top-left spawn position
    pub player_spawn: [i32; 2],
    /// Boundary wall thickness
    pub wall_thickness: u32,
    /// Directory holding the image assets
    pub asset_dir: PathBuf,
    /// Player sprite file name
    pub player_image: String,
    /// Background file name
    pub background_image: String,
    /// Player placeholder color
    pub player_color: Color,
    /// Background placeholder color
    pub background_color: Color,
    /// Debug collider color
    pub collider_color: Color,
    /// Draw collider rectangles
    pub show_colliders: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "Cozy Game Prototype".to_string(),
            screen_width: 960,
            screen_height: 540,
            fps: TICK_RATE,
            player_speed: PLAYER_SPEED,
            player_size: [PLAYER_SIZE.0 as u32, PLAYER_SIZE.1 as u32],
            player_spawn: [PLAYER_SPAWN.0, PLAYER_SPAWN.1],
            wall_thickness: WALL_THICKNESS as u32,
            asset_dir: PathBuf::from("assets"),
            player_image: "player.png".to_string(),
            background_image: "background.png".to_string(),
            player_color: [240, 200, 60, 255],
            background_color: [40, 48, 56, 255],
            collider_color: [80, 120, 140, 255],
            show_colliders: true,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the config from `COZY_CONFIG`, then `fallback`, then defaults.
    ///
    /// A path named by the environment variable must exist.
    pub fn from_env(fallback: &Path) -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::load_or_default(fallback),
        }
    }

    /// Check value ranges.
    ///
    /// Dimensions are bounded before any edge arithmetic, so the `i32`
    /// conversions in `screen_size`, `build_world` and `spawn_player` are
    /// lossless on a validated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid("screen size must be non-zero".into()));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be non-zero".into()));
        }
        if self.player_size[0] == 0 || self.player_size[1] == 0 {
            return Err(ConfigError::Invalid("player size must be non-zero".into()));
        }

        let dimensions = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player width", self.player_size[0]),
            ("player height", self.player_size[1]),
            ("wall_thickness", self.wall_thickness),
        ];
        for (name, value) in dimensions {
            if value > MAX_DIMENSION {
                return Err(ConfigError::Invalid(format!(
                    "{} {} exceeds {}",
                    name, value, MAX_DIMENSION
                )));
            }
        }
        if self.player_spawn.iter().any(|c| c.unsigned_abs() > MAX_DIMENSION) {
            return Err(ConfigError::Invalid(format!(
                "player spawn {:?} outside +/-{}",
                self.player_spawn, MAX_DIMENSION
            )));
        }

        if !self.player_speed.is_finite()
            || self.player_speed <= 0.0
            || self.player_speed > MAX_PLAYER_SPEED
        {
            return Err(ConfigError::Invalid(format!(
                "player speed must be in (0, {}], got {}",
                MAX_PLAYER_SPEED, self.player_speed
            )));
        }
        if self.wall_thickness * 2 >= self.screen_width.min(self.screen_height) {
            return Err(ConfigError::Invalid(format!(
                "wall thickness {} leaves no room inside {}x{}",
                self.wall_thickness, self.screen_width, self.screen_height
            )));
        }

        let world = self.build_world();
        let player = self.spawn_player();
        if let Some(index) = world.first_overlap(&player.rect) {
            warn!("Player spawns inside collider {}", index);
        }

        Ok(())
    }

    /// Fixed frame duration in seconds.
    #[inline]
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Screen size as signed pixels.
    #[inline]
    pub fn screen_size(&self) -> (i32, i32) {
        (self.screen_width as i32, self.screen_height as i32)
    }

    /// World with four boundary walls around the screen.
    pub fn build_world(&self) -> World {
        let (width, height) = self.screen_size();
        World::new(width, height, self.wall_thickness as i32)
    }

    /// Player at the configured spawn.
    pub fn spawn_player(&self) -> PlayerState {
        PlayerState::new(
            (self.player_spawn[0], self.player_spawn[1]),
            (self.player_size[0] as i32, self.player_size[1] as i32),
        )
    }

    /// Full path of the player sprite.
    pub fn player_image_path(&self) -> PathBuf {
        self.asset_dir.join(&self.player_image)
    }

    /// Full path of the background image.
    pub fn background_image_path(&self) -> PathBuf {
        self.asset_dir.join(&self.background_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.screen_size(), (960, 540));
        assert_eq!(config.fps, 60);
        assert_eq!(config.player_speed, 250.0);
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(config.player_image_path(), PathBuf::from("assets/player.png"));
        assert_eq!(config.background_image_path(), PathBuf::from("assets/background.png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "player_speed": 100.0, "show_colliders": false }"#).unwrap();
        assert_eq!(config.player_speed, 100.0);
        assert!(!config.show_colliders);
        assert_eq!(config.screen_width, 960);
        assert_eq!(config.player_color, [240, 200, 60, 255]);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_fps = GameConfig { fps: 0, ..GameConfig::default() };
        assert!(matches!(bad_fps.validate(), Err(ConfigError::Invalid(_))));

        let bad_speed = GameConfig { player_speed: -1.0, ..GameConfig::default() };
        assert!(matches!(bad_speed.validate(), Err(ConfigError::Invalid(_))));

        let nan_speed = GameConfig { player_speed: f32::NAN, ..GameConfig::default() };
        assert!(nan_speed.validate().is_err());

        let thick = GameConfig { wall_thickness: 270, ..GameConfig::default() };
        assert!(thick.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_wall_without_overflow() {
        let config: GameConfig = serde_json::from_str(r#"{ "wall_thickness": 3000000000 }"#).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_oversized_wall_is_invalid() {
        let path = std::env::temp_dir().join(format!("cozy-config-wall-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "wall_thickness": 3000000000 }"#).unwrap();

        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_values_beyond_i32() {
        let wide_player = GameConfig { player_size: [3_000_000_000, 96], ..GameConfig::default() };
        assert!(matches!(wide_player.validate(), Err(ConfigError::Invalid(_))));

        let huge_screen = GameConfig { screen_width: u32::MAX, ..GameConfig::default() };
        assert!(matches!(huge_screen.validate(), Err(ConfigError::Invalid(_))));

        let far_spawn = GameConfig { player_spawn: [i32::MAX - 10, 120], ..GameConfig::default() };
        assert!(matches!(far_spawn.validate(), Err(ConfigError::Invalid(_))));

        let min_spawn = GameConfig { player_spawn: [120, i32::MIN], ..GameConfig::default() };
        assert!(matches!(min_spawn.validate(), Err(ConfigError::Invalid(_))));

        let fast = GameConfig { player_speed: f32::MAX, ..GameConfig::default() };
        assert!(matches!(fast.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_largest_valid_config_keeps_player_inside_walls() {
        let config = GameConfig {
            screen_width: MAX_DIMENSION,
            screen_height: MAX_DIMENSION,
            player_size: [MAX_DIMENSION / 4, MAX_DIMENSION / 4],
            player_spawn: [100, 100],
            wall_thickness: 16,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());

        let world = config.build_world();
        let mut player = config.spawn_player();
        assert!(!player.rect.is_empty());

        let left = crate::InputFrame::from_keys(true, false, false, false);
        for _ in 0..600 {
            crate::tick(&mut player, &world, &left, config.frame_dt(), config.player_speed);
        }
        assert_eq!(player.rect.left(), 16);
        assert!(world.first_overlap(&player.rect).is_none());
    }

    #[test]
    fn test_load_errors() {
        let dir = std::env::temp_dir();
        let missing = dir.join(format!("cozy-config-missing-{}.json", std::process::id()));
        assert!(matches!(GameConfig::load(&missing), Err(ConfigError::Io { .. })));
        assert_eq!(GameConfig::load_or_default(&missing).unwrap(), GameConfig::default());

        let broken = dir.join(format!("cozy-config-broken-{}.json", std::process::id()));
        std::fs::write(&broken, "{ not json").unwrap();
        let result = GameConfig::load(&broken);
        std::fs::remove_file(&broken).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("cozy-config-ok-{}.json", std::process::id()));
        let config = GameConfig { fps: 30, ..GameConfig::default() };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_build_world_and_player() {
        let config = GameConfig::default();
        let world = config.build_world();
        assert_eq!(world.colliders().len(), 4);
        let player = config.spawn_player();
        assert_eq!(player.position(), (120, 120));
        assert!(world.first_overlap(&player.rect).is_none());
    }
}
