//! Spawn director: campaign waves and the survival trickle.
//!
//! Campaign play spawns a full wave whenever the field is cleared:
//! a 3x6 grid on ordinary levels, a single boss on every fifth level.
//! Survival play never uses waves; it drip-feeds enemies on a shrinking
//! cooldown and injects a boss once per 60-second bucket.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invasion_core::constants::*;
use invasion_core::entities::Enemy;
use invasion_core::enums::{BossArchetype, GameMode};
use invasion_core::pool::EntityPools;

use crate::systems::formation::FormationState;

/// Per-mode difficulty scaling applied at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct ModeScaling {
    pub enemy_hp_mult: f32,
    pub enemy_cooldown_mult: f32,
    pub boss_hp_per_level: i32,
    pub boss_cooldown_mult: f32,
}

impl ModeScaling {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Hard => Self {
                enemy_hp_mult: 2.0,
                enemy_cooldown_mult: 0.7,
                boss_hp_per_level: 30,
                boss_cooldown_mult: 0.4,
            },
            // Survival scaling is time-based, not level-based; it never
            // reads this table for its own spawns.
            GameMode::Normal | GameMode::Survival => Self {
                enemy_hp_mult: 1.0,
                enemy_cooldown_mult: 1.0,
                boss_hp_per_level: 20,
                boss_cooldown_mult: 0.8,
            },
        }
    }
}

/// Mutable survival-director state owned by the engine.
#[derive(Debug, Clone)]
pub struct SurvivalState {
    /// Total survival time in seconds.
    pub timer: f32,
    pub spawn_cooldown: f32,
    /// Highest boss bucket already spawned; -1 before the first boss.
    pub last_boss_bucket: i32,
}

impl Default for SurvivalState {
    fn default() -> Self {
        Self {
            timer: 0.0,
            spawn_cooldown: SURVIVAL_SPAWN_BASE_COOLDOWN,
            last_boss_bucket: -1,
        }
    }
}

/// Campaign director: level-up and respawn once the field is cleared.
pub fn run_campaign(
    pools: &mut EntityPools,
    rng: &mut ChaCha8Rng,
    formation: &mut FormationState,
    mode: GameMode,
    level: &mut i32,
) {
    if !pools.field_cleared() {
        return;
    }
    *level += 1;
    formation.dir = 1.0;
    log::info!("field cleared, spawning wave for level {level}");
    spawn_wave(pools, rng, mode, *level);
}

/// Spawn the wave for a level: a boss on every fifth level, otherwise
/// the formation grid.
pub fn spawn_wave(pools: &mut EntityPools, rng: &mut ChaCha8Rng, mode: GameMode, level: i32) {
    let scaling = ModeScaling::for_mode(mode);
    pools.enemies.clear();

    if level % 5 == 0 {
        let max_hp = BOSS_BASE_HP + scaling.boss_hp_per_level * level;
        let nth = (level / 5 - 1).max(0) as usize;
        let e = pools.enemies.acquire_or_overwrite();
        *e = Enemy {
            active: true,
            boss: true,
            archetype: BossArchetype::cycled(nth),
            pos: Vec2::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
            base_pos: Vec2::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
            radius: BOSS_RADIUS,
            hp: max_hp,
            max_hp,
            fire_cooldown: ENEMY_FIRE_BASE_COOLDOWN * scaling.boss_cooldown_mult,
            ..Default::default()
        };
        return;
    }

    let base_hp = (ENEMY_BASE_HP + ENEMY_HP_PER_LEVEL * level).max(ENEMY_BASE_HP);
    let hp = (base_hp as f32 * scaling.enemy_hp_mult) as i32;
    for row in 0..FORMATION_ROWS {
        for col in 0..FORMATION_COLS {
            let Some(e) = pools.enemies.acquire() else {
                return;
            };
            let pos = Vec2::new(
                FORMATION_START_X + col as f32 * FORMATION_GAP_X,
                FORMATION_START_Y + row as f32 * FORMATION_GAP_Y,
            );
            *e = Enemy {
                active: true,
                pos,
                base_pos: pos,
                radius: ENEMY_RADIUS,
                hp,
                max_hp: hp,
                fire_cooldown: (ENEMY_FIRE_BASE_COOLDOWN
                    + rng.gen_range(0.0..ENEMY_FIRE_COOLDOWN_JITTER))
                    * scaling.enemy_cooldown_mult,
                grid: Some((col as u8, row as u8)),
                // Stagger the bob animation across the grid.
                bob: ((row * 17 + col * 13) % 100) as f32 * 0.01,
                ..Default::default()
            };
        }
    }
}

/// Survival director: trickle spawns, bucketed bosses, and time score.
pub fn run_survival(
    pools: &mut EntityPools,
    rng: &mut ChaCha8Rng,
    state: &mut SurvivalState,
    score: &mut i32,
    dt: f32,
) {
    state.timer += dt;
    state.spawn_cooldown -= dt;

    if state.spawn_cooldown <= 0.0 {
        let hp = (SURVIVAL_ENEMY_BASE_HP + (state.timer / SURVIVAL_HP_RAMP_SECS) as i32)
            .max(SURVIVAL_ENEMY_BASE_HP);
        let pos = Vec2::new(
            rng.gen_range(SURVIVAL_SPAWN_MARGIN_X..FIELD_WIDTH - SURVIVAL_SPAWN_MARGIN_X),
            SURVIVAL_SPAWN_Y,
        );
        // A scheduled spawn is never dropped; a full pool recycles slot 0.
        let e = pools.enemies.acquire_or_overwrite();
        *e = Enemy {
            active: true,
            pos,
            base_pos: pos,
            radius: ENEMY_RADIUS,
            hp,
            max_hp: hp,
            fire_cooldown: ENEMY_FIRE_BASE_COOLDOWN
                + rng.gen_range(0.0..ENEMY_FIRE_COOLDOWN_JITTER),
            bob: rng.gen_range(0.0..1.0),
            ..Default::default()
        };
        state.spawn_cooldown = (SURVIVAL_SPAWN_BASE_COOLDOWN
            - state.timer / SURVIVAL_SPAWN_RAMP_SECS)
            .max(SURVIVAL_SPAWN_MIN_COOLDOWN);
    }

    let bucket = (state.timer / SURVIVAL_BOSS_BUCKET_SECS) as i32;
    if bucket > state.last_boss_bucket {
        let max_hp = SURVIVAL_BOSS_BASE_HP + SURVIVAL_BOSS_HP_PER_CYCLE * bucket;
        let e = pools.enemies.acquire_or_overwrite();
        *e = Enemy {
            active: true,
            boss: true,
            archetype: BossArchetype::cycled(bucket as usize),
            pos: Vec2::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
            base_pos: Vec2::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
            radius: BOSS_RADIUS,
            hp: max_hp,
            max_hp,
            fire_cooldown: ENEMY_FIRE_BASE_COOLDOWN * SURVIVAL_BOSS_COOLDOWN_SCALE,
            ..Default::default()
        };
        state.last_boss_bucket = bucket;
        log::info!("survival boss {bucket} spawned with {max_hp} hp");
    }

    // Survival score is purely elapsed time; kills never add to it.
    *score = state.timer as i32 * SURVIVAL_SCORE_RATE;
}
