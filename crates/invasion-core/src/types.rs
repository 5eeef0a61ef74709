//! Fundamental simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking. Advanced once per tick by the
/// caller-supplied frame delta; the simulation is variable-step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// RGB color attached to visual intents (pickup rings).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Squared distance between two points.
pub fn dist_sq(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}

/// True when two circles overlap. Symmetric in its arguments.
pub fn circle_hit(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    dist_sq(a, b) <= r * r
}
