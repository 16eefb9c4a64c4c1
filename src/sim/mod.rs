//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Per-frame stepping, removal in place
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_collide, fully_outside};
pub use spawner::{Spawner, spawn_enemy};
pub use state::{
    Bounds, Enemy, GameEvent, GamePhase, GameSession, Hsl, Particle, Player, Projectile,
};
pub use tick::{FrameInput, tick};
