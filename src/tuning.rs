//! Data-driven game balance
//!
//! Every gameplay knob in one serde struct. Defaults come from `consts`;
//! deployments can override any subset via a JSON blob.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values read by the session and the spawner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-axis player velocity pull toward zero, per frame
    pub friction: f32,
    /// Player speed while a direction is held (pixels/frame)
    pub move_speed: f32,
    pub player_radius: f32,
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    /// Wall-clock interval between enemy spawns (milliseconds)
    pub spawn_interval_ms: f64,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Enemies above this radius shrink when hit instead of dying
    pub shrink_threshold: f32,
    /// Radius lost per hit on a large enemy
    pub shrink_step: f32,
    /// Score per enemy fully destroyed
    pub score_per_kill: u32,
    /// Trail fade alpha passed to the render surface each frame
    pub fade_alpha: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            move_speed: MOVE_SPEED,
            player_radius: PLAYER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            shrink_threshold: SHRINK_THRESHOLD,
            shrink_step: SHRINK_STEP,
            score_per_kill: SCORE_PER_KILL,
            fade_alpha: FADE_ALPHA,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
