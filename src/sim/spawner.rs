//! Periodic enemy spawner
//!
//! Runs on its own wall-clock interval, independent of the frame callback.
//! Enemies appear just off a random canvas edge, aimed at the player's
//! position at spawn time - they are never re-aimed afterward.

use glam::Vec2;
use rand::Rng;

use super::state::{Bounds, Enemy, Hsl};
use crate::aim_direction;
use crate::consts::*;
use crate::tuning::Tuning;

/// Wall-clock interval timer; accumulates elapsed time and reports how many
/// spawns are due.
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl Spawner {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, elapsed_ms: 0.0 }
    }

    /// Restart the interval from zero (on session restart).
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }

    /// Account `dt_ms` of wall-clock time; returns the number of spawns due.
    ///
    /// A long frame can owe more than one spawn.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms;
        let mut due = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            due += 1;
        }
        due
    }
}

/// Create one enemy at a random off-edge position, aimed at the player.
///
/// 50% chance of the vertical edges (x at -r or width+r), else the
/// horizontal edges. The radius is picked first so the spawn point can sit
/// fully outside the visible canvas.
pub fn spawn_enemy(
    bounds: &Bounds,
    player_pos: Vec2,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Enemy {
    let radius = rng.random_range(ENEMY_RADIUS_MIN..ENEMY_RADIUS_MAX);

    let pos = if rng.random_bool(0.5) {
        let x = if rng.random_bool(0.5) { -radius } else { bounds.width + radius };
        Vec2::new(x, rng.random_range(0.0..bounds.height))
    } else {
        let y = if rng.random_bool(0.5) { -radius } else { bounds.height + radius };
        Vec2::new(rng.random_range(0.0..bounds.width), y)
    };

    // Off-edge spawns can't coincide with an on-canvas player, but the guard
    // keeps the zero-vector normalize out of reach regardless.
    let dir = aim_direction(pos, player_pos).unwrap_or(Vec2::X);

    Enemy {
        pos,
        dir,
        speed: rng.random_range(tuning.enemy_speed_min..tuning.enemy_speed_max),
        radius,
        color: Hsl::random_hue(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_accumulation() {
        let mut spawner = Spawner::new(1000.0);
        assert_eq!(spawner.advance(500.0), 0);
        assert_eq!(spawner.advance(500.0), 1);
        // Long frame owes multiple spawns, remainder carries over
        assert_eq!(spawner.advance(2500.0), 2);
        assert_eq!(spawner.advance(500.0), 1);
    }

    #[test]
    fn test_reset_clears_accumulated_time() {
        let mut spawner = Spawner::new(1000.0);
        spawner.advance(900.0);
        spawner.reset();
        assert_eq!(spawner.advance(900.0), 0);
        assert_eq!(spawner.advance(100.0), 1);
    }

    #[test]
    fn test_spawns_are_always_off_edge() {
        let bounds = Bounds::new(800.0, 600.0);
        let tuning = Tuning::default();
        let player = bounds.center();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let enemy = spawn_enemy(&bounds, player, &tuning, &mut rng);
            let inside_x = enemy.pos.x - enemy.radius > 0.0
                && enemy.pos.x + enemy.radius < bounds.width;
            let inside_y = enemy.pos.y - enemy.radius > 0.0
                && enemy.pos.y + enemy.radius < bounds.height;
            assert!(
                !(inside_x && inside_y),
                "enemy spawned fully on-canvas at {:?}",
                enemy.pos
            );
        }
    }

    #[test]
    fn test_spawn_aims_at_player() {
        let bounds = Bounds::new(800.0, 600.0);
        let tuning = Tuning::default();
        let player = Vec2::new(200.0, 450.0);
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..20 {
            let enemy = spawn_enemy(&bounds, player, &tuning, &mut rng);
            assert!((enemy.dir.length() - 1.0).abs() < 1e-4);
            // Direction points at the player: stepping the full distance
            // along it lands on the player position.
            let landed = enemy.pos + enemy.dir * enemy.pos.distance(player);
            assert!((landed - player).length() < 1e-2);
        }
    }

    #[test]
    fn test_spawn_radius_and_speed_ranges() {
        let bounds = Bounds::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(13);
        for _ in 0..100 {
            let enemy = spawn_enemy(&bounds, bounds.center(), &tuning, &mut rng);
            assert!(enemy.radius >= ENEMY_RADIUS_MIN && enemy.radius < ENEMY_RADIUS_MAX);
            assert!(enemy.speed >= tuning.enemy_speed_min && enemy.speed < tuning.enemy_speed_max);
        }
    }

    proptest! {
        #[test]
        fn spawn_never_fully_inside_bounds(seed in 0u64..10_000) {
            let bounds = Bounds::new(1024.0, 768.0);
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let enemy = spawn_enemy(&bounds, bounds.center(), &tuning, &mut rng);
            let inside_x = enemy.pos.x - enemy.radius > 0.0
                && enemy.pos.x + enemy.radius < bounds.width;
            let inside_y = enemy.pos.y - enemy.radius > 0.0
                && enemy.pos.y + enemy.radius < bounds.height;
            prop_assert!(!(inside_x && inside_y));
        }
    }
}
