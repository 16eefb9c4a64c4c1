//! Headless demo driver
//!
//! Runs the simulation at a 16ms frame cadence with a trivial autopilot:
//! steer away from the nearest enemy and fire at it. Useful for exercising
//! the full loop without a canvas attached.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use orb_blaster::input::{Axis, InputAdapter};
use orb_blaster::render::NullSurface;
use orb_blaster::sim::Bounds;
use orb_blaster::ui::UiSink;
use orb_blaster::{Game, Tuning};

const FRAME_MS: f64 = 16.0;
const MAX_FRAMES: u32 = 3600;

struct LogUi;

impl UiSink for LogUi {
    fn on_game_start(&mut self) {
        log::info!("game started");
    }
    fn on_score_changed(&mut self, score: u32) {
        log::info!("score: {}", score);
    }
    fn on_game_over(&mut self, final_score: u32) {
        log::info!("game over, final score: {}", final_score);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let bounds = Bounds::new(1024.0, 768.0);
    let mut game = Game::new(bounds, Tuning::default(), seed);
    let mut input = InputAdapter::new();
    let mut surface = NullSurface;
    let mut ui = LogUi;

    game.start(&mut ui);

    let mut frames = 0;
    while frames < MAX_FRAMES {
        autopilot(&game, frames, &mut input);
        if !game.frame(FRAME_MS, &mut input, &mut surface, &mut ui) {
            break;
        }
        frames += 1;
    }

    log::info!(
        "demo finished after {} frames, score {}",
        frames,
        game.session().score
    );
}

/// Dodge the nearest enemy and shoot at it every few frames.
fn autopilot(game: &Game, frame: u32, input: &mut InputAdapter) {
    let session = game.session();
    let player = session.player.pos;

    let nearest = session.enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(enemy) = nearest {
        let away = player - enemy.pos;
        if away != Vec2::ZERO {
            input.direction_change(Axis::X, away.x);
            input.direction_change(Axis::Y, away.y);
        }
        if frame % 10 == 0 {
            input.fire(enemy.pos);
        }
    }
}
