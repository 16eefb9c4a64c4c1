//! Orb Blaster - a dodge-and-shoot arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, frame tick, spawner, collisions)
//! - `input`: Adapter from key/pointer events to per-frame input
//! - `render`: Drawing abstraction handed to the presentation layer
//! - `ui`: Score/game-over notification sink
//! - `game`: Lifecycle controller (start/restart, frame stepping)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Per-axis velocity pull toward zero, applied to the player every frame
    pub const FRICTION: f32 = 0.1;
    /// Player speed while a movement direction is held (pixels/frame)
    pub const MOVE_SPEED: f32 = 3.0;
    /// Player circle radius
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Enemy spawn radius range
    pub const ENEMY_RADIUS_MIN: f32 = 4.0;
    pub const ENEMY_RADIUS_MAX: f32 = 30.0;
    /// Enemy speed scalar range (pixels/frame)
    pub const ENEMY_SPEED_MIN: f32 = 1.0;
    pub const ENEMY_SPEED_MAX: f32 = 2.5;
    /// Enemies above this radius shrink when hit instead of dying
    pub const SHRINK_THRESHOLD: f32 = 12.0;
    /// Radius lost per hit on a large enemy
    pub const SHRINK_STEP: f32 = 10.0;

    /// Score awarded per enemy fully destroyed
    pub const SCORE_PER_KILL: u32 = 250;

    /// Wall-clock interval between enemy spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Particle burst size: one particle per this many units of enemy radius
    pub const PARTICLE_PER_RADIUS: f32 = 5.0;
    /// Per-frame particle velocity damping factor
    pub const PARTICLE_DRAG: f32 = 0.99;
    /// Per-frame particle opacity decay
    pub const ALPHA_DECAY: f32 = 0.01;
    /// Particle launch speed scale (pixels/frame)
    pub const PARTICLE_MAX_SPEED: f32 = 6.0;

    /// Frame-trail fade alpha passed to the render surface each frame
    pub const FADE_ALPHA: f32 = 0.1;

    /// Circles collide when their edge gap drops below this
    pub const HIT_SLACK: f32 = 1.0;
}

/// Unit vector pointing from `from` toward `to`.
///
/// Returns `None` when the points coincide - normalizing a zero vector is
/// undefined, so callers must handle "no direction" explicitly.
#[inline]
pub fn aim_direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    if delta.length_squared() > f32::EPSILON {
        Some(delta.normalize())
    } else {
        None
    }
}
