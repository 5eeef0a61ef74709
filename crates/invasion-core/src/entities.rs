//! Entity records stored in the fixed-capacity pools.
//!
//! `active` is the sole existence flag for pooled entities; there is no
//! separate allocation step. Deactivating a slot makes it available for
//! reuse by the next `acquire`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{BossArchetype, DiveState, ItemKind};
use crate::pool::Slot;
use crate::types::Color;

/// The player ship. Created once per session, reset on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub damage: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                FIELD_WIDTH / 2.0,
                FIELD_HEIGHT - PLAYER_SPAWN_OFFSET_Y,
            ),
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            damage: PLAYER_START_DAMAGE,
        }
    }
}

/// A formation enemy, survival straggler, summoned minion, or boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub active: bool,
    pub boss: bool,
    pub archetype: BossArchetype,
    /// Health tier 1..=4, meaningful for bosses only.
    pub phase: u8,
    pub dive: DiveState,
    pub pos: Vec2,
    /// Formation anchor. For non-grid enemies this is the spawn point.
    pub base_pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub fire_cooldown: f32,
    /// Formation slot as (col, row); `None` for survival spawns and minions.
    pub grid: Option<(u8, u8)>,
    /// Remaining hit-flash time after taking damage.
    pub hit_flash: f32,
    /// Bob animation phase, staggered per formation slot.
    pub bob: f32,
    /// Accumulated angle of the rotating radial volley (Shooter phase 4).
    pub pattern_angle: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            active: false,
            boss: false,
            archetype: BossArchetype::Shooter,
            phase: 1,
            dive: DiveState::Normal,
            pos: Vec2::ZERO,
            base_pos: Vec2::ZERO,
            radius: ENEMY_RADIUS,
            hp: 10,
            max_hp: 100,
            fire_cooldown: 1.0,
            grid: None,
            hit_flash: 0.0,
            bob: 0.0,
            pattern_angle: 0.0,
        }
    }
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Enemy {
    /// Health ratio in 0.0..=1.0, used for phase selection and HUD bars.
    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp.max(0) as f32) / (self.max_hp as f32)
    }
}

/// A projectile. Separate pools exist for player- and enemy-owned bullets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub active: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub radius: f32,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            damage: 1,
            radius: BULLET_RADIUS,
        }
    }
}

impl Slot for Bullet {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A falling power-up dropped at an enemy's death position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub active: bool,
    pub pos: Vec2,
    pub kind: ItemKind,
    pub radius: f32,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            kind: ItemKind::DamageUp,
            radius: ITEM_RADIUS,
        }
    }
}

impl Slot for Item {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Transient explosion animation record, driven purely by elapsed time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explosion {
    pub active: bool,
    pub pos: Vec2,
    pub frame_timer: f32,
    pub current_frame: u32,
}

impl Slot for Explosion {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Expanding, fading ring shown when the player collects an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickupEffect {
    pub active: bool,
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub color: Color,
}

impl Slot for PickupEffect {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}
