//! Input adapter
//!
//! Converts discrete key/pointer events into the per-frame [`FrameInput`].
//! Movement is a single pending direction vector: a new key event on an axis
//! overwrites, never stacks, and draining resets the direction so it must be
//! re-supplied every frame.

use glam::Vec2;

use crate::sim::FrameInput;

/// Movement axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Movement keys the adapter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

/// Accumulates platform events between frames.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    direction: Vec2,
    fire: Vec<Vec2>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A movement key went down: set the axis to its sign.
    ///
    /// f32::signum treats +0.0 as positive, so zero is mapped explicitly.
    pub fn direction_change(&mut self, axis: Axis, sign: f32) {
        let sign = if sign == 0.0 { 0.0 } else { sign.signum() };
        match axis {
            Axis::X => self.direction.x = sign,
            Axis::Y => self.direction.y = sign,
        }
    }

    /// Convenience mapping for the standard WASD/arrow layout.
    ///
    /// Y grows downward, matching canvas coordinates.
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::W | Key::Up => self.direction_change(Axis::Y, -1.0),
            Key::S | Key::Down => self.direction_change(Axis::Y, 1.0),
            Key::A | Key::Left => self.direction_change(Axis::X, -1.0),
            Key::D | Key::Right => self.direction_change(Axis::X, 1.0),
        }
    }

    /// Click/tap: request a projectile aimed at the target point.
    pub fn fire(&mut self, target: Vec2) {
        self.fire.push(target);
    }

    /// Hand the accumulated input to the frame and reset for the next one.
    pub fn drain(&mut self) -> FrameInput {
        let input = FrameInput {
            direction: self.direction,
            fire: std::mem::take(&mut self.fire),
        };
        self.direction = Vec2::ZERO;
        input
    }
}
