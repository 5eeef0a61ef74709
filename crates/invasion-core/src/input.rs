//! Raw input intents produced by the platform layer and consumed by the
//! simulation each tick.

use serde::{Deserialize, Serialize};

/// Per-frame input sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Horizontal movement axis: -1, 0, or +1.
    pub axis: i8,
    /// Whether the fire control is held this frame. Firing is
    /// edge-triggered: a new volley requires a release in between.
    pub fire: bool,
}

impl InputState {
    pub fn new(axis: i8, fire: bool) -> Self {
        Self {
            axis: axis.clamp(-1, 1),
            fire,
        }
    }
}
