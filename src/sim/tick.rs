//! Per-frame simulation step
//!
//! The core loop: advance every entity once, detect collisions, and mutate
//! the entity collections in place. Removal during iteration walks indices
//! back-to-front so nothing is skipped or double-processed; there is no
//! deferred-removal scheduling.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::state::{GameEvent, GamePhase, GameSession, Particle};
use crate::consts::*;

/// Input accumulated for a single frame by the input adapter.
///
/// `direction` is edge-triggered: it must be re-supplied every frame or the
/// player decays to rest under friction.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pending movement direction (unnormalized; zero means "no input")
    pub direction: Vec2,
    /// Projectile targets requested since the last frame
    pub fire: Vec<Vec2>,
}

/// Advance the session by one frame.
///
/// Order matters: player, fire requests, particles, projectiles, enemies.
/// On a terminal player/enemy collision the phase flips to `GameOver`, a
/// `GameOver` event carries the final score, and the frame ends immediately.
pub fn tick(session: &mut GameSession, input: &FrameInput, events: &mut Vec<GameEvent>) {
    if session.phase == GamePhase::GameOver {
        return;
    }

    session.player.update(input.direction);

    for &target in &input.fire {
        session.fire_at(target);
    }

    // Particles: advance, then compact out the dead ones.
    for particle in session.particles.iter_mut() {
        particle.update();
    }
    session.particles.retain(|p| !p.is_dead());

    // Projectiles: advance, then cull any fully off-canvas.
    for projectile in session.projectiles.iter_mut() {
        projectile.update();
    }
    let bounds = session.bounds;
    session
        .projectiles
        .retain(|p| !collision::fully_outside(p.pos, p.radius, &bounds));

    // Enemies, back-to-front: in-place removal by index must not disturb
    // the unvisited prefix.
    for i in (0..session.enemies.len()).rev() {
        session.enemies[i].update();

        let enemy = &session.enemies[i];
        if collision::circles_collide(
            enemy.pos,
            enemy.radius,
            session.player.pos,
            session.player.radius,
        ) {
            session.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver(session.score));
            log::info!("player hit, session over at score {}", session.score);
            return;
        }

        // Test this enemy against every live projectile, newest first.
        for j in (0..session.projectiles.len()).rev() {
            let enemy = &session.enemies[i];
            let projectile = &session.projectiles[j];
            if !collision::circles_collide(
                enemy.pos,
                enemy.radius,
                projectile.pos,
                projectile.radius,
            ) {
                continue;
            }

            let burst_at = projectile.pos;
            let color = enemy.color;
            let burst = (enemy.radius / PARTICLE_PER_RADIUS).floor() as usize;
            session.projectiles.remove(j);

            for _ in 0..burst {
                let vel = Vec2::new(
                    (session.rng.random::<f32>() - 0.5)
                        * (session.rng.random::<f32>() * PARTICLE_MAX_SPEED),
                    (session.rng.random::<f32>() - 0.5)
                        * (session.rng.random::<f32>() * PARTICLE_MAX_SPEED),
                );
                let radius = session.rng.random_range(0.5..2.0);
                session.particles.push(Particle::new(burst_at, vel, radius, color));
            }

            if session.enemies[i].radius > session.tuning.shrink_threshold {
                // Large enemy: chip it down, it stays alive.
                session.enemies[i].radius -= session.tuning.shrink_step;
            } else {
                session.enemies.remove(i);
                session.score += session.tuning.score_per_kill;
                events.push(GameEvent::ScoreChanged(session.score));
                break;
            }
        }
    }
}
