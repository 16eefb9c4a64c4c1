//! Collision predicates
//!
//! Everything in this game is a circle, so collision detection reduces to
//! distance checks plus an axis-aligned out-of-bounds test.

use glam::Vec2;

use super::state::Bounds;
use crate::consts::HIT_SLACK;

/// True when two circles touch: edge gap below the slack threshold.
///
/// Used for both the enemy/player terminal collision and enemy/projectile
/// hits.
#[inline]
pub fn circles_collide(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) - a_radius - b_radius < HIT_SLACK
}

/// True when a circle's bounding extent is fully past any side of the canvas.
#[inline]
pub fn fully_outside(pos: Vec2, radius: f32, bounds: &Bounds) -> bool {
    pos.x + radius < 0.0
        || pos.x - radius > bounds.width
        || pos.y + radius < 0.0
        || pos.y - radius > bounds.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coincident_circles_collide() {
        // Player and enemy stacked on the same point with any real radii
        assert!(circles_collide(
            Vec2::new(100.0, 100.0),
            10.0,
            Vec2::new(100.0, 100.0),
            15.0
        ));
    }

    #[test]
    fn test_touching_circles_collide() {
        // Gap of exactly 0 is below the slack threshold of 1
        assert!(circles_collide(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        // Gap of 0.5 still collides
        assert!(circles_collide(Vec2::ZERO, 10.0, Vec2::new(20.5, 0.0), 10.0));
    }

    #[test]
    fn test_separated_circles_miss() {
        assert!(!circles_collide(Vec2::ZERO, 10.0, Vec2::new(22.0, 0.0), 10.0));
    }

    #[test]
    fn test_projectile_boundary_cull() {
        let bounds = Bounds::new(800.0, 600.0);
        let radius = 5.0;
        // Just past the left edge: whole circle off-canvas, culled
        assert!(fully_outside(Vec2::new(-radius - 1.0, 300.0), radius, &bounds));
        // Still one pixel inside: retained
        assert!(!fully_outside(Vec2::new(-radius + 1.0, 300.0), radius, &bounds));
    }

    #[test]
    fn test_fully_outside_each_side() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(fully_outside(Vec2::new(810.0, 300.0), 5.0, &bounds));
        assert!(fully_outside(Vec2::new(400.0, -10.0), 5.0, &bounds));
        assert!(fully_outside(Vec2::new(400.0, 610.0), 5.0, &bounds));
        assert!(!fully_outside(Vec2::new(400.0, 300.0), 5.0, &bounds));
        // Straddling an edge is not fully outside
        assert!(!fully_outside(Vec2::new(0.0, 300.0), 5.0, &bounds));
    }
}
