//! Boss behavior: phase selection, movement, and table-driven fire.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invasion_ai::patterns::{self, SummonSpec, Volley};
use invasion_core::constants::*;
use invasion_core::entities::{Bullet, Enemy, Player};
use invasion_core::enums::{DiveState, SoundKind};
use invasion_core::events::FrameEvent;
use invasion_core::pool::EntityPools;
use invasion_core::types::circle_hit;

/// A resolved volley, carried out after the boss borrow ends.
struct FireAction {
    origin: Vec2,
    velocities: Vec<Vec2>,
    summon: Option<SummonSpec>,
    boss_pos: Vec2,
}

/// One frame of boss logic for every active boss in the pool.
pub fn run(
    pools: &mut EntityPools,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    formation_dir: f32,
    level: i32,
    dt: f32,
    events: &mut Vec<FrameEvent>,
) {
    let damage = (4 + 2 * level).min(ENEMY_BULLET_DAMAGE_CAP);

    for i in 0..pools.enemies.capacity() {
        let action = {
            let Some(e) = pools.enemies.get_mut(i) else {
                break;
            };
            if !e.active || !e.boss {
                continue;
            }

            // Phase is recomputed from health every frame, so it can
            // only ever rise as the boss takes damage.
            e.phase = patterns::phase_for_health(e.hp, e.max_hp);
            step_movement(e, player, formation_dir, dt, events);

            e.fire_cooldown -= dt;
            if e.fire_cooldown <= 0.0 {
                let row = patterns::pattern(e.archetype, e.phase);
                e.fire_cooldown = ENEMY_FIRE_BASE_COOLDOWN * row.cooldown_scale;
                if row.triggers_charge && e.dive == DiveState::Normal {
                    e.dive = DiveState::Attacking;
                }
                let velocities = patterns::bullet_velocities(row.volley, e.pattern_angle);
                if let Volley::Radial { advance, .. } = row.volley {
                    e.pattern_angle += advance;
                }
                Some(FireAction {
                    origin: e.pos + Vec2::new(0.0, e.radius + ENEMY_MUZZLE_OFFSET),
                    velocities,
                    summon: row.summon,
                    boss_pos: e.pos,
                })
            } else {
                None
            }
        };

        if let Some(action) = action {
            for vel in action.velocities {
                // Boss volleys always land; a full pool recycles slot 0.
                let b = pools.enemy_bullets.acquire_or_overwrite();
                *b = Bullet {
                    active: true,
                    pos: action.origin,
                    vel,
                    damage,
                    radius: BULLET_RADIUS,
                };
            }
            if let Some(spec) = action.summon {
                spawn_minions(pools, rng, spec, action.boss_pos, level);
            }
        }
    }
}

/// Bosses drift with the formation direction, and a charging boss runs
/// the dive loop itself: plunge, hit or miss, then climb back to its
/// anchor. Unlike a formation enemy, a boss survives the collision.
fn step_movement(
    e: &mut Enemy,
    player: &mut Player,
    formation_dir: f32,
    dt: f32,
    events: &mut Vec<FrameEvent>,
) {
    match e.dive {
        DiveState::Normal => {
            e.pos.x += formation_dir * FORMATION_SPEED * dt;
        }
        DiveState::Attacking => {
            e.pos.y += DIVE_SPEED * dt;
            if circle_hit(e.pos, e.radius, player.pos, player.radius) {
                let was_alive = player.hp > 0;
                player.hp = (player.hp - CONTACT_DAMAGE).max(0);
                events.push(FrameEvent::PlaySound {
                    kind: SoundKind::Crash,
                });
                if was_alive && player.hp == 0 {
                    events.push(FrameEvent::PlaySound {
                        kind: SoundKind::Death,
                    });
                }
                e.dive = DiveState::Returning;
            } else if e.pos.y > FIELD_HEIGHT - DIVE_BOTTOM_MARGIN {
                e.dive = DiveState::Returning;
            }
        }
        DiveState::Returning => {
            let to_anchor = e.base_pos - e.pos;
            let dist = to_anchor.length();
            if dist < RETURN_EPSILON {
                e.pos = e.base_pos;
                e.dive = DiveState::Normal;
            } else {
                e.pos += to_anchor / dist * RETURN_SPEED * dt;
            }
        }
    }
}

/// Inject summoned minions into the enemy pool below the boss.
fn spawn_minions(
    pools: &mut EntityPools,
    rng: &mut ChaCha8Rng,
    spec: SummonSpec,
    boss_pos: Vec2,
    level: i32,
) {
    for _ in 0..spec.count {
        let offset = Vec2::new(rng.gen_range(-spec.spread_x..=spec.spread_x), spec.drop_y);
        let slot = if spec.random_slot {
            // Roll a slot; an occupied roll forfeits that minion.
            let idx = rng.gen_range(0..pools.enemies.capacity());
            pools.enemies.acquire_at(idx)
        } else {
            pools.enemies.acquire()
        };
        let Some(e) = slot else {
            continue;
        };
        let pos = boss_pos + offset;
        let hp = spec.hp_base + level;
        *e = Enemy {
            active: true,
            pos,
            base_pos: pos,
            radius: spec.radius,
            hp,
            max_hp: hp,
            fire_cooldown: ENEMY_FIRE_BASE_COOLDOWN
                + rng.gen_range(0.0..SUMMON_FIRE_COOLDOWN_JITTER),
            bob: rng.gen_range(0.0..1.0),
            ..Default::default()
        };
    }
}
