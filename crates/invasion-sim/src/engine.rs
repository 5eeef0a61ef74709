//! Simulation engine.
//!
//! `GameEngine` owns the entity pools, the seeded RNG, and all session
//! state. Each call to `tick` runs the full system pass in a fixed
//! serial order and returns the resulting `RenderSnapshot`. Given the
//! same seed, the same mode, and the same (dt, input) sequence, two
//! engines produce identical snapshots.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invasion_core::constants::*;
use invasion_core::entities::{Enemy, Item, Player};
use invasion_core::enums::{BossArchetype, DiveState, GameMode, GamePhase, ShootingStyle};
use invasion_core::events::FrameEvent;
use invasion_core::input::InputState;
use invasion_core::pool::EntityPools;
use invasion_core::state::RenderSnapshot;
use invasion_core::types::SimTime;

use invasion_persistence::save::{self, EnemyRecord, ItemRecord, SaveState};

use crate::systems;
use crate::systems::formation::FormationState;
use crate::systems::spawn::SurvivalState;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    pub mode: GameMode,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            seed: 42,
        }
    }
}

/// The simulation engine. Owns the pools and all session state.
pub struct GameEngine {
    pools: EntityPools,
    player: Player,
    style: ShootingStyle,
    mode: GameMode,
    phase: GamePhase,
    level: i32,
    score: i32,
    time: SimTime,
    formation: FormationState,
    survival: SurvivalState,
    can_fire: bool,
    rng: ChaCha8Rng,
    events: Vec<FrameEvent>,
}

impl GameEngine {
    /// Create a new engine and spawn the opening wave (campaign modes
    /// start at level 1; survival starts with an empty field).
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            pools: EntityPools::default(),
            player: Player::default(),
            style: ShootingStyle::default(),
            mode: config.mode,
            phase: GamePhase::default(),
            level: 1,
            score: 0,
            time: SimTime::default(),
            formation: FormationState::default(),
            survival: SurvivalState::default(),
            can_fire: true,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        };
        if engine.mode != GameMode::Survival {
            systems::spawn::spawn_wave(
                &mut engine.pools,
                &mut engine.rng,
                engine.mode,
                engine.level,
            );
        }
        engine
    }

    /// Advance the simulation by one frame and return the snapshot.
    pub fn tick(&mut self, dt: f32, input: InputState) -> RenderSnapshot {
        if self.phase == GamePhase::Playing {
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.pools,
            &self.player,
            self.time,
            self.phase,
            self.mode,
            self.level,
            self.score,
            self.survival.timer,
            self.style,
            events,
        )
    }

    fn run_systems(&mut self, dt: f32, input: InputState) {
        systems::player_control::run(
            &mut self.pools,
            &mut self.player,
            self.style,
            &mut self.can_fire,
            input,
            dt,
            &mut self.events,
        );

        match self.mode {
            GameMode::Survival => systems::spawn::run_survival(
                &mut self.pools,
                &mut self.rng,
                &mut self.survival,
                &mut self.score,
                dt,
            ),
            _ => systems::spawn::run_campaign(
                &mut self.pools,
                &mut self.rng,
                &mut self.formation,
                self.mode,
                &mut self.level,
            ),
        }

        systems::formation::run(
            &mut self.pools,
            &mut self.rng,
            &mut self.formation,
            self.mode,
            self.level,
            dt,
        );
        systems::boss::run(
            &mut self.pools,
            &mut self.player,
            &mut self.rng,
            self.formation.dir,
            self.level,
            dt,
            &mut self.events,
        );
        systems::projectiles::run(&mut self.pools, dt);
        systems::collision::run(
            &mut self.pools,
            &mut self.player,
            &mut self.style,
            &mut self.rng,
            self.mode,
            &mut self.score,
            &mut self.events,
        );
        systems::effects::run(&mut self.pools, dt);

        if self.player.hp <= 0 {
            log::info!(
                "game over at level {} with score {}",
                self.level,
                self.score
            );
            self.phase = GamePhase::GameOver;
        }
    }

    /// Reset the session in place, keeping the mode and the RNG stream.
    pub fn restart(&mut self) {
        self.pools = EntityPools::default();
        self.player = Player::default();
        self.style = ShootingStyle::default();
        self.phase = GamePhase::Playing;
        self.level = 1;
        self.score = 0;
        self.time = SimTime::default();
        self.formation = FormationState::default();
        self.survival = SurvivalState::default();
        self.can_fire = true;
        self.events.clear();
        if self.mode != GameMode::Survival {
            systems::spawn::spawn_wave(&mut self.pools, &mut self.rng, self.mode, self.level);
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn style(&self) -> ShootingStyle {
        self.style
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pools(&self) -> &EntityPools {
        &self.pools
    }

    // --- persistence ---

    /// Capture the current session as a save state. Enemy rows record
    /// the formation anchor rather than the live position, so a dive in
    /// progress is saved as if the enemy had already returned.
    pub fn save_state(&self) -> SaveState {
        SaveState {
            level: self.level,
            score: self.score,
            player_hp: self.player.hp,
            player_damage: self.player.damage,
            player_pos: self.player.pos,
            style: self.style,
            enemies: self
                .pools
                .enemies
                .iter()
                .map(|e| EnemyRecord {
                    active: e.active,
                    boss: e.boss,
                    archetype: e.archetype.to_int(),
                    phase: e.phase as i32,
                    hp: e.hp,
                    pos: e.base_pos,
                    attacking: e.dive == DiveState::Attacking,
                    returning: e.dive == DiveState::Returning,
                    fire_cooldown: e.fire_cooldown,
                })
                .collect(),
            items: self
                .pools
                .items
                .iter()
                .map(|i| ItemRecord {
                    active: i.active,
                    kind: i.active.then_some(i.kind),
                    pos: i.pos,
                })
                .collect(),
        }
    }

    /// Replace the session with a decoded save state. Bullets and
    /// transient effects are never persisted and start empty.
    pub fn apply_save_state(&mut self, state: &SaveState) {
        self.level = state.level;
        self.score = state.score;
        self.player = Player {
            hp: state.player_hp,
            damage: state.player_damage,
            pos: state.player_pos,
            ..Player::default()
        };
        self.style = state.style;
        self.phase = if state.player_hp > 0 {
            GamePhase::Playing
        } else {
            GamePhase::GameOver
        };
        self.time = SimTime::default();
        self.formation = FormationState::default();
        self.survival = SurvivalState::default();
        self.can_fire = true;
        self.events.clear();

        self.pools = EntityPools::default();
        for (slot, rec) in self.pools.enemies.iter_mut().zip(&state.enemies) {
            *slot = enemy_from_record(rec);
        }
        for (slot, rec) in self.pools.items.iter_mut().zip(&state.items) {
            if let (true, Some(kind)) = (rec.active, rec.kind) {
                *slot = Item {
                    active: true,
                    pos: rec.pos,
                    kind,
                    radius: ITEM_RADIUS,
                };
            }
        }
    }

    /// Write the session to `Save<slot>.txt` under `dir`.
    pub fn save_to_slot(&self, dir: &Path, slot: u32) -> Result<(), String> {
        save::save_slot(dir, slot, &self.save_state())
    }

    /// Load `Save<slot>.txt` under `dir` and replace the session. The
    /// file is fully parsed before anything is mutated, so a malformed
    /// file leaves the running session untouched.
    pub fn load_from_slot(&mut self, dir: &Path, slot: u32) -> Result<(), String> {
        let state = save::load_slot(dir, slot)?;
        self.apply_save_state(&state);
        Ok(())
    }

    #[cfg(test)]
    pub fn pools_mut(&mut self) -> &mut EntityPools {
        &mut self.pools
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

/// Rehydrate one enemy slot from a save row. The anchor doubles as the
/// position, hp doubles as max hp, a non-positive hp deactivates the
/// slot, and an unknown archetype falls back to Shooter.
fn enemy_from_record(rec: &EnemyRecord) -> Enemy {
    let dive = if rec.attacking {
        DiveState::Attacking
    } else if rec.returning {
        DiveState::Returning
    } else {
        DiveState::Normal
    };
    Enemy {
        active: rec.active && rec.hp > 0,
        boss: rec.boss,
        archetype: BossArchetype::from_int(rec.archetype).unwrap_or_default(),
        phase: rec.phase.clamp(1, 4) as u8,
        dive,
        pos: rec.pos,
        base_pos: rec.pos,
        radius: if rec.boss { BOSS_RADIUS } else { ENEMY_RADIUS },
        hp: rec.hp,
        max_hp: rec.hp.max(1),
        fire_cooldown: rec.fire_cooldown,
        ..Default::default()
    }
}
