//! Render surface abstraction
//!
//! The simulation never draws; the driver walks the session once per frame
//! and pushes circles into whatever surface the presentation layer provides
//! (canvas 2d context, GPU pipeline, a test recorder).

use glam::Vec2;

use crate::sim::{GameSession, Hsl};

/// Minimal drawing collaborator the core calls once per frame per entity.
pub trait RenderSurface {
    /// Fade the previous frame toward the background by `alpha`, leaving
    /// motion trails.
    fn clear_or_fade(&mut self, alpha: f32);

    /// Draw one filled circle at `alpha` opacity.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Hsl, alpha: f32);
}

/// Surface that draws nothing - headless runs and benchmarks.
#[derive(Debug, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear_or_fade(&mut self, _alpha: f32) {}
    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Hsl, _alpha: f32) {}
}

/// Draw every live entity. Particles carry their own opacity; everything
/// else is opaque.
pub fn draw_session(session: &GameSession, surface: &mut dyn RenderSurface) {
    let player = &session.player;
    surface.draw_circle(player.pos, player.radius, player.color, 1.0);

    for projectile in &session.projectiles {
        surface.draw_circle(projectile.pos, projectile.radius, projectile.color, 1.0);
    }
    for enemy in &session.enemies {
        surface.draw_circle(enemy.pos, enemy.radius, enemy.color, 1.0);
    }
    for particle in &session.particles {
        surface.draw_circle(particle.pos, particle.radius, particle.color, particle.alpha);
    }
}
