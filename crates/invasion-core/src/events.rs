//! Intents emitted by the simulation for the rendering and audio
//! collaborators. The core produces these; it never consumes them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::SoundKind;
use crate::types::Color;

/// One frame's worth of fire-and-forget intents, drained into the
/// snapshot at the end of each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// Start an explosion animation at a position.
    SpawnExplosion { pos: Vec2 },
    /// Start an expanding pickup ring at a position.
    SpawnPickupEffect { pos: Vec2, color: Color },
    /// Play a one-shot sound effect.
    PlaySound { kind: SoundKind },
}
