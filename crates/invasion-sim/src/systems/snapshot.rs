//! Snapshot assembly. Copies the visible slice of the pools into a
//! serializable `RenderSnapshot` at the end of each tick.

use invasion_core::entities::Player;
use invasion_core::enums::{GameMode, GamePhase, ShootingStyle};
use invasion_core::events::FrameEvent;
use invasion_core::pool::EntityPools;
use invasion_core::state::{
    BulletView, EnemyView, ExplosionView, ItemView, PickupEffectView, PlayerView, RenderSnapshot,
};
use invasion_core::types::SimTime;

#[allow(clippy::too_many_arguments)]
pub fn build(
    pools: &EntityPools,
    player: &Player,
    time: SimTime,
    phase: GamePhase,
    mode: GameMode,
    level: i32,
    score: i32,
    survival_secs: f32,
    style: ShootingStyle,
    events: Vec<FrameEvent>,
) -> RenderSnapshot {
    RenderSnapshot {
        time,
        phase,
        mode,
        level,
        score,
        survival_secs,
        player: PlayerView {
            pos: player.pos,
            radius: player.radius,
            hp: player.hp,
            damage: player.damage,
        },
        style,
        enemies: pools
            .enemies
            .iter_active()
            .map(|e| EnemyView {
                pos: e.pos,
                radius: e.radius,
                boss: e.boss,
                archetype: e.archetype,
                phase: e.phase,
                hp_ratio: e.hp_ratio(),
                hit_flash: e.hit_flash > 0.0,
                bob: e.bob,
            })
            .collect(),
        player_bullets: bullet_views(pools, true),
        enemy_bullets: bullet_views(pools, false),
        items: pools
            .items
            .iter_active()
            .map(|i| ItemView {
                pos: i.pos,
                radius: i.radius,
                kind: i.kind,
            })
            .collect(),
        explosions: pools
            .explosions
            .iter_active()
            .map(|ex| ExplosionView {
                pos: ex.pos,
                frame: ex.current_frame,
            })
            .collect(),
        pickup_effects: pools
            .pickup_effects
            .iter_active()
            .map(|fx| PickupEffectView {
                pos: fx.pos,
                radius: fx.radius,
                alpha: fx.alpha,
                color: fx.color,
            })
            .collect(),
        events,
    }
}

fn bullet_views(pools: &EntityPools, player_owned: bool) -> Vec<BulletView> {
    let pool = if player_owned {
        &pools.player_bullets
    } else {
        &pools.enemy_bullets
    };
    pool.iter_active()
        .map(|b| BulletView {
            pos: b.pos,
            radius: b.radius,
            damage: b.damage,
        })
        .collect()
}
