//! Components and resources shared by the game systems

use bevy::prelude::*;

use cozy_core::{GameConfig, InputFrame, PlayerState, World};

// ============================================================================
// RESOURCES
// ============================================================================

/// Active configuration
#[derive(Resource, Clone, Debug)]
pub struct Settings(pub GameConfig);

/// Static collider layout
#[derive(Resource, Clone, Debug)]
pub struct Arena(pub World);

// ============================================================================
// PLAYER
// ============================================================================

/// The controlled character; wraps the simulation state
#[derive(Component, Debug)]
pub struct Player {
    pub state: PlayerState,
}

/// Keys sampled for the next simulation step
#[derive(Component, Default, Debug)]
pub struct PlayerInput(pub InputFrame);

// ============================================================================
// SCENERY
// ============================================================================

/// Marker for a collider debug sprite
#[derive(Component)]
pub struct Collider;

/// Marker for the background sprite
#[derive(Component)]
pub struct Background;
