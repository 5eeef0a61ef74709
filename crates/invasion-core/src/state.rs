//! Render snapshot: the complete visible state handed to the external
//! renderer/audio collaborators after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BossArchetype, GameMode, GamePhase, ItemKind, ShootingStyle};
use crate::events::FrameEvent;
use crate::types::{Color, SimTime};

/// Complete per-tick output of the simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub mode: GameMode,
    pub level: i32,
    pub score: i32,
    /// Elapsed survival time in seconds; zero outside Survival mode.
    pub survival_secs: f32,
    pub player: PlayerView,
    pub style: ShootingStyle,
    pub enemies: Vec<EnemyView>,
    pub player_bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<BulletView>,
    pub items: Vec<ItemView>,
    pub explosions: Vec<ExplosionView>,
    pub pickup_effects: Vec<PickupEffectView>,
    /// Intents emitted this tick, in emission order.
    pub events: Vec<FrameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub damage: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
    pub boss: bool,
    pub archetype: BossArchetype,
    pub phase: u8,
    /// hp / max_hp, for health bars.
    pub hp_ratio: f32,
    /// True while the post-damage hit flash is showing.
    pub hit_flash: bool,
    /// Bob animation phase in seconds.
    pub bob: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
    pub damage: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub pos: Vec2,
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupEffectView {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub color: Color,
}
