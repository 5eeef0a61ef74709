//! Formation movement, dive triggering, and regular enemy fire.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invasion_ai::fsm::{self, DiveContext};
use invasion_core::constants::*;
use invasion_core::entities::Bullet;
use invasion_core::enums::{DiveState, GameMode};
use invasion_core::pool::EntityPools;

use crate::systems::spawn::ModeScaling;

/// Shared formation state owned by the engine.
#[derive(Debug, Clone)]
pub struct FormationState {
    /// Horizontal direction of the whole formation: -1.0 or 1.0.
    pub dir: f32,
    /// Remaining time before another dive may be triggered.
    pub dive_cooldown: f32,
}

impl Default for FormationState {
    fn default() -> Self {
        Self {
            dir: 1.0,
            dive_cooldown: 0.0,
        }
    }
}

/// One frame of formation logic: edge flip, random dive trigger, dive
/// FSM stepping, and regular enemy fire.
pub fn run(
    pools: &mut EntityPools,
    rng: &mut ChaCha8Rng,
    state: &mut FormationState,
    mode: GameMode,
    level: i32,
    dt: f32,
) {
    state.dive_cooldown = (state.dive_cooldown - dt).max(0.0);

    flip_at_edges(pools, state, mode);
    trigger_dive(pools, rng, state);

    // Anchor drift sampled once, before anyone moves this frame.
    let shift = formation_shift(pools);
    let scaling = ModeScaling::for_mode(mode);
    let damage = (1 + 2 * level).min(ENEMY_BULLET_DAMAGE_CAP);

    let EntityPools {
        enemies,
        enemy_bullets,
        ..
    } = pools;

    for e in enemies.slots_mut() {
        if !e.active {
            continue;
        }
        e.hit_flash = (e.hit_flash - dt).max(0.0);
        e.bob += dt;
        if e.boss {
            // Boss movement and fire run in the boss system.
            continue;
        }

        let update = fsm::evaluate(&DiveContext {
            state: e.dive,
            pos: e.pos,
            base_pos: e.base_pos,
            formation_shift: shift,
            formation_dir: state.dir,
            dt,
        });
        e.dive = update.new_state;
        e.pos = update.new_pos;

        e.fire_cooldown -= dt;
        if e.fire_cooldown <= 0.0 {
            e.fire_cooldown = (ENEMY_FIRE_BASE_COOLDOWN
                + rng.gen_range(0.0..ENEMY_FIRE_COOLDOWN_JITTER))
                * scaling.enemy_cooldown_mult;
            let origin = e.pos + Vec2::new(0.0, e.radius + ENEMY_MUZZLE_OFFSET);
            if let Some(b) = enemy_bullets.acquire() {
                *b = Bullet {
                    active: true,
                    pos: origin,
                    vel: Vec2::new(0.0, ENEMY_BULLET_SPEED),
                    damage,
                    radius: BULLET_RADIUS,
                };
            }
        }
    }
}

/// Flip the shared direction when the bounding box of all active
/// enemies reaches an edge margin. Outside survival, every enemy still
/// in formation also steps downward.
fn flip_at_edges(pools: &mut EntityPools, state: &mut FormationState, mode: GameMode) {
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut any = false;
    for e in pools.enemies.iter_active() {
        any = true;
        min_x = min_x.min(e.pos.x - e.radius);
        max_x = max_x.max(e.pos.x + e.radius);
    }
    if !any {
        return;
    }

    let drop = if mode == GameMode::Survival {
        0.0
    } else {
        FORMATION_DROP_Y
    };
    if min_x < FORMATION_MARGIN && state.dir < 0.0 {
        state.dir = 1.0;
        apply_drop(pools, drop);
    } else if max_x > FIELD_WIDTH - FORMATION_MARGIN && state.dir > 0.0 {
        state.dir = -1.0;
        apply_drop(pools, drop);
    }
}

fn apply_drop(pools: &mut EntityPools, drop: f32) {
    for e in pools.enemies.iter_active_mut() {
        if !e.boss && e.dive == DiveState::Normal {
            e.pos.y += drop;
        }
    }
}

/// Once per frame, roll the dive odds and send one formation enemy
/// toward the player. A fresh trigger is gated by a short cooldown.
fn trigger_dive(pools: &mut EntityPools, rng: &mut ChaCha8Rng, state: &mut FormationState) {
    if state.dive_cooldown > 0.0 || rng.gen_range(0..DIVE_TRIGGER_ODDS) != 0 {
        return;
    }
    let cap = pools.enemies.capacity();
    let start = rng.gen_range(0..cap);
    for k in 0..cap {
        let Some(e) = pools.enemies.get_mut((start + k) % cap) else {
            continue;
        };
        if e.active && !e.boss && e.dive == DiveState::Normal {
            e.dive = DiveState::Attacking;
            state.dive_cooldown = DIVE_TRIGGER_COOLDOWN;
            break;
        }
    }
}

/// Net drift of the formation since spawn, sampled from any enemy
/// still flying in formation.
pub fn formation_shift(pools: &EntityPools) -> Vec2 {
    pools
        .enemies
        .iter_active()
        .find(|e| !e.boss && e.dive == DiveState::Normal)
        .map(|e| e.pos - e.base_pos)
        .unwrap_or(Vec2::ZERO)
}
