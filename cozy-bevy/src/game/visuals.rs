//! Visuals - screen-to-world mapping, textures, sprite sync

use std::path::Path;

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use cozy_core::assets::{placeholder, AssetSource, Color as Rgba8, LoadedImage};
use cozy_core::{load_or_placeholder, Rect};

use super::{Player, Settings};

/// Draw layers
pub const BACKGROUND_Z: f32 = -100.0;
pub const COLLIDER_Z: f32 = -50.0;
pub const PLAYER_Z: f32 = 10.0;

// ============================================================================
// COORDINATES
// ============================================================================

/// Map a screen-space rectangle (top-left origin, y down) to the translation
/// of a centered sprite in Bevy's world space (screen center origin, y up).
pub fn rect_to_translation(rect: &Rect, screen: (i32, i32), z: f32) -> Vec3 {
    let (cx, cy) = rect.center();
    Vec3::new(
        cx - screen.0 as f32 / 2.0,
        screen.1 as f32 / 2.0 - cy,
        z,
    )
}

/// Sprite size for a rectangle
pub fn rect_size(rect: &Rect) -> Vec2 {
    Vec2::new(rect.width as f32, rect.height as f32)
}

/// Convert an 8-bit RGBA color
pub fn to_color(c: Rgba8) -> Color {
    Color::srgba_u8(c[0], c[1], c[2], c[3])
}

// ============================================================================
// TEXTURES
// ============================================================================

/// Load an asset, falling back to a placeholder on any failure.
///
/// Missing files are expected and stay quiet; unreadable ones are logged.
pub fn load_texture(path: &Path, size: (u32, u32), color: Rgba8) -> LoadedImage {
    match load_or_placeholder(path, size, color) {
        Ok(loaded) => loaded,
        Err(err) => {
            warn!("{}, using placeholder", err);
            LoadedImage {
                image: placeholder(size, color),
                source: AssetSource::Placeholder,
            }
        }
    }
}

/// Upload-ready Bevy image from RGBA8 pixels
pub fn to_bevy_image(loaded: &LoadedImage) -> Image {
    Image::new(
        Extent3d {
            width: loaded.width(),
            height: loaded.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        loaded.image.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

// ============================================================================
// SPRITE SYNC
// ============================================================================

/// Place the player sprite on its simulated rectangle and mirror it by facing
pub fn sync_player_sprite(
    settings: Res<Settings>,
    mut query: Query<(&Player, &mut Transform, &mut Sprite)>,
) {
    let screen = settings.0.screen_size();

    for (player, mut transform, mut sprite) in query.iter_mut() {
        transform.translation = rect_to_translation(&player.state.rect, screen, PLAYER_Z);
        sprite.flip_x = player.state.flip_x();
    }
}
