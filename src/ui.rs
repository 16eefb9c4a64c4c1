//! UI notification sink
//!
//! The score text and game-over modal live outside the core; the driver
//! forwards simulation events to whatever implements [`UiSink`].

use crate::sim::GameEvent;

/// Receiver for state-change notifications. All methods default to no-ops so
/// a UI only wires what it shows.
pub trait UiSink {
    fn on_game_start(&mut self) {}
    fn on_score_changed(&mut self, _score: u32) {}
    fn on_game_over(&mut self, _final_score: u32) {}
}

/// Sink that ignores everything.
#[derive(Debug, Default)]
pub struct NullUi;

impl UiSink for NullUi {}

/// Forward a frame's events to the sink, in order.
pub fn dispatch(events: &[GameEvent], ui: &mut dyn UiSink) {
    for event in events {
        match *event {
            GameEvent::Started => ui.on_game_start(),
            GameEvent::ScoreChanged(score) => ui.on_score_changed(score),
            GameEvent::GameOver(final_score) => ui.on_game_over(final_score),
        }
    }
}
