//! Collision resolution. The four checks run in a fixed order so later
//! checks observe state written by earlier ones:
//!
//! 1. player bullets vs enemies
//! 2. enemy bullets vs player
//! 3. diving enemies vs player
//! 4. items vs player

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invasion_core::constants::*;
use invasion_core::entities::{Explosion, Item, PickupEffect, Player};
use invasion_core::enums::{DiveState, GameMode, ItemKind, ShootingStyle, SoundKind};
use invasion_core::events::FrameEvent;
use invasion_core::pool::{EntityPools, Pool};
use invasion_core::types::circle_hit;

#[allow(clippy::too_many_arguments)]
pub fn run(
    pools: &mut EntityPools,
    player: &mut Player,
    style: &mut ShootingStyle,
    rng: &mut ChaCha8Rng,
    mode: GameMode,
    score: &mut i32,
    events: &mut Vec<FrameEvent>,
) {
    player_bullets_vs_enemies(pools, rng, mode, score, events);
    enemy_bullets_vs_player(pools, player, events);
    divers_vs_player(pools, player, events);
    items_vs_player(pools, player, style, events);
}

fn player_bullets_vs_enemies(
    pools: &mut EntityPools,
    rng: &mut ChaCha8Rng,
    mode: GameMode,
    score: &mut i32,
    events: &mut Vec<FrameEvent>,
) {
    let EntityPools {
        player_bullets,
        enemies,
        explosions,
        items,
        ..
    } = pools;

    for b in player_bullets.slots_mut() {
        if !b.active {
            continue;
        }
        for e in enemies.slots_mut() {
            if !e.active || !circle_hit(b.pos, b.radius, e.pos, e.radius) {
                continue;
            }
            e.hp -= b.damage;
            e.hit_flash = HIT_FLASH_DURATION;
            b.active = false;

            if e.hp <= 0 {
                e.active = false;
                if mode != GameMode::Survival {
                    *score += if e.boss { SCORE_PER_BOSS } else { SCORE_PER_ENEMY };
                }
                if let Some(ex) = explosions.acquire() {
                    *ex = Explosion {
                        active: true,
                        pos: e.pos,
                        frame_timer: 0.0,
                        current_frame: 0,
                    };
                }
                events.push(FrameEvent::SpawnExplosion { pos: e.pos });
                events.push(FrameEvent::PlaySound {
                    kind: SoundKind::Explosion,
                });
                maybe_drop_item(items, rng, e.pos);
            }
            // One bullet damages at most one enemy.
            break;
        }
    }
}

fn enemy_bullets_vs_player(
    pools: &mut EntityPools,
    player: &mut Player,
    events: &mut Vec<FrameEvent>,
) {
    for b in pools.enemy_bullets.iter_active_mut() {
        if !circle_hit(b.pos, b.radius, player.pos, player.radius) {
            continue;
        }
        b.active = false;
        damage_player(player, b.damage, SoundKind::Hit, events);
    }
}

fn divers_vs_player(pools: &mut EntityPools, player: &mut Player, events: &mut Vec<FrameEvent>) {
    for e in pools.enemies.iter_active_mut() {
        if e.boss || e.dive != DiveState::Attacking {
            continue;
        }
        if !circle_hit(e.pos, e.radius, player.pos, player.radius) {
            continue;
        }
        // The crashing enemy is spent regardless of the outcome.
        e.active = false;
        damage_player(player, CONTACT_DAMAGE, SoundKind::Crash, events);
    }
}

fn items_vs_player(
    pools: &mut EntityPools,
    player: &mut Player,
    style: &mut ShootingStyle,
    events: &mut Vec<FrameEvent>,
) {
    let EntityPools {
        items,
        pickup_effects,
        ..
    } = pools;

    for item in items.iter_active_mut() {
        if !circle_hit(item.pos, item.radius, player.pos, player.radius) {
            continue;
        }
        item.active = false;
        apply_item(item.kind, player, style);

        let color = item.kind.color();
        if let Some(fx) = pickup_effects.acquire() {
            *fx = PickupEffect {
                active: true,
                pos: item.pos,
                radius: item.radius,
                alpha: 255.0,
                color,
            };
        }
        events.push(FrameEvent::SpawnPickupEffect {
            pos: item.pos,
            color,
        });
        events.push(FrameEvent::PlaySound {
            kind: SoundKind::Powerup,
        });
    }
}

/// Apply damage to the player, clamped at zero; emits the hit sound and
/// the death sound on the transition to zero.
fn damage_player(player: &mut Player, damage: i32, sound: SoundKind, events: &mut Vec<FrameEvent>) {
    let was_alive = player.hp > 0;
    player.hp = (player.hp - damage).max(0);
    events.push(FrameEvent::PlaySound { kind: sound });
    if was_alive && player.hp == 0 {
        events.push(FrameEvent::PlaySound {
            kind: SoundKind::Death,
        });
    }
}

fn apply_item(kind: ItemKind, player: &mut Player, style: &mut ShootingStyle) {
    match kind {
        ItemKind::DamageUp => player.damage += 1,
        ItemKind::SingleStyle => switch_style(ShootingStyle::Single, player, style),
        ItemKind::DoubleStyle => switch_style(ShootingStyle::Double, player, style),
        ItemKind::SpreadStyle => switch_style(ShootingStyle::Spread, player, style),
        ItemKind::Heal => player.hp = (player.hp + HEAL_AMOUNT).min(PLAYER_MAX_HP),
    }
}

/// A style pickup switches the fire style; picking up the style the
/// player already has grants +1 damage instead.
fn switch_style(target: ShootingStyle, player: &mut Player, style: &mut ShootingStyle) {
    if *style == target {
        player.damage += 1;
    } else {
        *style = target;
    }
}

/// Roll the drop chance, then partition a 0..20 roll into item kinds.
pub(crate) fn maybe_drop_item(items: &mut Pool<Item>, rng: &mut ChaCha8Rng, pos: glam::Vec2) {
    if rng.gen_range(0..100u32) >= DROP_CHANCE_PERCENT {
        return;
    }
    let Some(item) = items.acquire() else {
        return;
    };
    *item = Item {
        active: true,
        pos,
        kind: roll_item_kind(rng),
        radius: ITEM_RADIUS,
    };
}

pub(crate) fn roll_item_kind(rng: &mut ChaCha8Rng) -> ItemKind {
    match rng.gen_range(0..20u32) {
        0..=6 => ItemKind::DamageUp,
        7..=13 => ItemKind::SingleStyle,
        14..=16 => ItemKind::DoubleStyle,
        17..=18 => ItemKind::SpreadStyle,
        _ => ItemKind::Heal,
    }
}
