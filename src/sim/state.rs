//! Game state and entity models
//!
//! Everything the simulation mutates lives on [`GameSession`]; collections
//! are plain insertion-ordered `Vec`s owned by the session, never shared.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::aim_direction;
use crate::consts::*;
use crate::tuning::Tuning;

/// Canvas rectangle the simulation plays inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Opaque color tag handed to the render surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees [0, 360)
    pub h: f32,
    /// Saturation percent
    pub s: f32,
    /// Lightness percent
    pub l: f32,
}

impl Hsl {
    pub const WHITE: Hsl = Hsl { h: 0.0, s: 0.0, l: 100.0 };

    /// Random hue at fixed saturation/lightness - enemy palette
    pub fn random_hue(rng: &mut impl Rng) -> Self {
        Self {
            h: rng.random_range(0.0..360.0),
            s: 50.0,
            l: 50.0,
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal collision happened; the session no longer ticks
    GameOver,
}

/// State-change notifications emitted by the simulation for the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    ScoreChanged(u32),
    GameOver(u32),
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub move_speed: f32,
    pub friction: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            color: Hsl::WHITE,
            move_speed: tuning.move_speed,
            friction: tuning.friction,
        }
    }

    /// Per-frame movement: direction input overwrites velocity, then friction
    /// pulls each axis toward zero, then position integrates.
    ///
    /// A zero direction leaves velocity untouched so the friction decay from
    /// the previous input plays out.
    pub fn update(&mut self, direction: Vec2) {
        if direction.length_squared() > f32::EPSILON {
            self.vel = direction.normalize() * self.move_speed;
        }
        self.vel.x = friction_step(self.vel.x, self.friction);
        self.vel.y = friction_step(self.vel.y, self.friction);
        self.pos += self.vel;
    }
}

/// Pull one velocity axis toward zero by `friction`, clamped at zero.
///
/// Overshoot is clamped, never negated, so an axis can't oscillate around
/// rest.
fn friction_step(v: f32, friction: f32) -> f32 {
    if v > 0.0 {
        (v - friction).max(0.0)
    } else if v < 0.0 {
        (v + friction).min(0.0)
    } else {
        0.0
    }
}

/// A fired projectile: unit direction plus a speed scalar applied at update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub color: Hsl,
}

impl Projectile {
    pub fn update(&mut self) {
        self.pos += self.dir * self.speed;
    }
}

/// An enemy: aimed at the player once at spawn time, then travels in a
/// straight line (intentional - never re-aimed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub color: Hsl,
}

impl Enemy {
    pub fn update(&mut self) {
        self.pos += self.dir * self.speed;
    }
}

/// Cosmetic debris from a destroyed enemy; no gameplay effect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Hsl) -> Self {
        Self { pos, vel, radius, color, alpha: 1.0 }
    }

    pub fn update(&mut self) {
        self.vel *= PARTICLE_DRAG;
        self.pos += self.vel;
        self.alpha -= ALPHA_DECAY;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// One game session: the single aggregate owning all dynamic state.
///
/// No globals - the driver passes the session explicitly to the tick and to
/// the renderer.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub bounds: Bounds,
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub score: u32,
}

impl GameSession {
    pub fn new(bounds: Bounds, tuning: Tuning, seed: u64) -> Self {
        let player = Player::new(bounds.center(), &tuning);
        Self {
            bounds,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Running,
            player,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
        }
    }

    /// Reset to a fresh session: player recreated at canvas center, all
    /// collections cleared, score zeroed. The RNG stream continues.
    pub fn reset(&mut self) {
        self.player = Player::new(self.bounds.center(), &self.tuning);
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
    }

    /// Spawn a projectile from the player's edge toward `target`.
    ///
    /// A click on the player's exact position has no aim and is ignored.
    pub fn fire_at(&mut self, target: Vec2) {
        let Some(dir) = aim_direction(self.player.pos, target) else {
            return;
        };
        let radius = self.tuning.projectile_radius;
        let pos = self.player.pos + dir * (self.player.radius + radius);
        self.projectiles.push(Projectile {
            pos,
            dir,
            speed: self.tuning.projectile_speed,
            radius,
            color: Hsl::WHITE,
        });
    }
}
