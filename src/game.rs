//! Lifecycle controller
//!
//! Owns the session, the spawner timer, and the running flag. The platform
//! calls [`Game::frame`] from its display-synced callback; a `false` return
//! means the loop cancelled itself (terminal collision) and must not be
//! rescheduled until a restart. Stopping the frame loop also stops the
//! spawner, since its clock is only advanced here.

use crate::input::InputAdapter;
use crate::render::{self, RenderSurface};
use crate::sim::{Bounds, GamePhase, GameSession, Spawner, spawn_enemy, tick};
use crate::tuning::Tuning;
use crate::ui::{self, UiSink};

pub struct Game {
    session: GameSession,
    spawner: Spawner,
    running: bool,
}

impl Game {
    pub fn new(bounds: Bounds, tuning: Tuning, seed: u64) -> Self {
        let spawner = Spawner::new(tuning.spawn_interval_ms);
        Self {
            session: GameSession::new(bounds, tuning, seed),
            spawner,
            running: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a fresh session. Also serves as restart: the session resets,
    /// the spawner interval starts over, and the UI hears `start` plus a
    /// zeroed score.
    pub fn start(&mut self, ui: &mut dyn UiSink) {
        self.session.reset();
        self.spawner.reset();
        self.running = true;
        log::info!("session started (seed {})", self.session.seed);
        ui.on_game_start();
        ui.on_score_changed(0);
    }

    /// One frame: fade the surface, spawn due enemies, drain input, tick the
    /// simulation, notify the UI, draw. Returns whether the loop should
    /// reschedule itself.
    pub fn frame(
        &mut self,
        dt_ms: f64,
        input: &mut InputAdapter,
        surface: &mut dyn RenderSurface,
        ui: &mut dyn UiSink,
    ) -> bool {
        if !self.running {
            return false;
        }

        surface.clear_or_fade(self.session.tuning.fade_alpha);

        for _ in 0..self.spawner.advance(dt_ms) {
            let enemy = spawn_enemy(
                &self.session.bounds,
                self.session.player.pos,
                &self.session.tuning,
                &mut self.session.rng,
            );
            log::debug!("enemy spawned at {:?} r={:.1}", enemy.pos, enemy.radius);
            self.session.enemies.push(enemy);
        }

        let frame_input = input.drain();
        let mut events = Vec::new();
        tick(&mut self.session, &frame_input, &mut events);
        ui::dispatch(&events, ui);

        render::draw_session(&self.session, surface);

        if self.session.phase == GamePhase::GameOver {
            self.running = false;
        }
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullSurface;
    use crate::sim::{Enemy, Hsl};
    use crate::ui::NullUi;
    use glam::Vec2;

    const FRAME_MS: f64 = 16.0;

    fn game() -> Game {
        Game::new(Bounds::new(800.0, 600.0), Tuning::default(), 123)
    }

    #[test]
    fn test_frame_is_noop_before_start() {
        let mut game = game();
        let mut input = InputAdapter::new();
        assert!(!game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi));
        assert!(game.session().enemies.is_empty());
    }

    #[test]
    fn test_spawner_fires_after_interval() {
        let mut game = game();
        let mut input = InputAdapter::new();
        game.start(&mut NullUi);

        // ~62 frames at 16ms pass the 1000ms spawn interval
        for _ in 0..63 {
            game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi);
        }
        assert_eq!(game.session().enemies.len(), 1);
    }

    #[test]
    fn test_game_over_cancels_loop_and_spawner() {
        let mut game = game();
        let mut input = InputAdapter::new();
        game.start(&mut NullUi);

        // Drop an enemy on the player: the next frame is terminal
        let player_pos = game.session().player.pos;
        game.session.enemies.push(Enemy {
            pos: player_pos,
            dir: Vec2::ZERO,
            speed: 0.0,
            radius: 20.0,
            color: Hsl::WHITE,
        });
        assert!(!game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi));
        assert!(!game.is_running());

        // Stopped loop means the spawner clock never advances
        for _ in 0..200 {
            game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi);
        }
        assert_eq!(game.session().enemies.len(), 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = game();
        let mut input = InputAdapter::new();
        game.start(&mut NullUi);

        let player_pos = game.session().player.pos;
        game.session.enemies.push(Enemy {
            pos: player_pos,
            dir: Vec2::ZERO,
            speed: 0.0,
            radius: 20.0,
            color: Hsl::WHITE,
        });
        game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi);
        assert!(!game.is_running());

        game.start(&mut NullUi);
        assert!(game.is_running());
        assert!(game.session().enemies.is_empty());
        assert_eq!(game.session().score, 0);
        assert!(game.frame(FRAME_MS, &mut input, &mut NullSurface, &mut NullUi));
    }
}
