//! Player movement and firing.

use glam::Vec2;

use invasion_core::constants::*;
use invasion_core::entities::{Bullet, Player};
use invasion_core::enums::{ShootingStyle, SoundKind};
use invasion_core::events::FrameEvent;
use invasion_core::input::InputState;
use invasion_core::pool::{EntityPools, Pool};

/// Apply one frame of input: move the player and, on a fresh press of
/// the fire control, spawn a volley for the current style.
pub fn run(
    pools: &mut EntityPools,
    player: &mut Player,
    style: ShootingStyle,
    can_fire: &mut bool,
    input: InputState,
    dt: f32,
    events: &mut Vec<FrameEvent>,
) {
    player.pos.x += input.axis as f32 * PLAYER_SPEED * dt;
    player.pos.x = player
        .pos
        .x
        .clamp(player.radius, FIELD_WIDTH - player.radius);

    if input.fire {
        if *can_fire {
            *can_fire = false;
            fire_volley(&mut pools.player_bullets, player, style);
            events.push(FrameEvent::PlaySound {
                kind: SoundKind::Shoot,
            });
        }
    } else {
        // Firing is edge-triggered: re-arm only on release.
        *can_fire = true;
    }
}

fn fire_volley(bullets: &mut Pool<Bullet>, player: &Player, style: ShootingStyle) {
    let muzzle = player.pos - Vec2::new(0.0, player.radius + PLAYER_MUZZLE_OFFSET);
    let up = Vec2::new(0.0, -PLAYER_BULLET_SPEED);
    match style {
        ShootingStyle::Single => {
            spawn_bullet(bullets, muzzle, up, player.damage);
        }
        ShootingStyle::Double => {
            let offset = Vec2::new(DOUBLE_STYLE_OFFSET_X, 0.0);
            spawn_bullet(bullets, muzzle - offset, up, player.damage);
            spawn_bullet(bullets, muzzle + offset, up, player.damage);
        }
        ShootingStyle::Spread => {
            spawn_bullet(bullets, muzzle, up, player.damage);
            spawn_bullet(
                bullets,
                muzzle,
                Vec2::new(-SPREAD_STYLE_VEL_X, -PLAYER_BULLET_SPEED),
                player.damage,
            );
            spawn_bullet(
                bullets,
                muzzle,
                Vec2::new(SPREAD_STYLE_VEL_X, -PLAYER_BULLET_SPEED),
                player.damage,
            );
        }
    }
}

/// Spawn into a free slot; a full pool silently drops the bullet.
fn spawn_bullet(bullets: &mut Pool<Bullet>, pos: Vec2, vel: Vec2, damage: i32) {
    if let Some(b) = bullets.acquire() {
        *b = Bullet {
            active: true,
            pos,
            vel,
            damage,
            radius: BULLET_RADIUS,
        };
    }
}
