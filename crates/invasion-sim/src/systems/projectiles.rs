//! Bullet and item integration plus out-of-bounds culling.

use glam::Vec2;

use invasion_core::constants::*;
use invasion_core::pool::EntityPools;

/// Integrate bullets and items by one frame and cull anything that has
/// left the playfield (plus a margin, so nothing pops at the edge).
pub fn run(pools: &mut EntityPools, dt: f32) {
    for b in pools.player_bullets.iter_active_mut() {
        b.pos += b.vel * dt;
        if out_of_bounds(b.pos, BULLET_CULL_MARGIN) {
            b.active = false;
        }
    }

    for b in pools.enemy_bullets.iter_active_mut() {
        b.pos += b.vel * dt;
        if out_of_bounds(b.pos, BULLET_CULL_MARGIN) {
            b.active = false;
        }
    }

    for item in pools.items.iter_active_mut() {
        item.pos.y += ITEM_FALL_SPEED * dt;
        if item.pos.y > FIELD_HEIGHT + ITEM_CULL_MARGIN {
            item.active = false;
        }
    }
}

fn out_of_bounds(pos: Vec2, margin: f32) -> bool {
    pos.x < -margin
        || pos.x > FIELD_WIDTH + margin
        || pos.y < -margin
        || pos.y > FIELD_HEIGHT + margin
}
