//! Transient visual effects: explosion frames and pickup rings.

use invasion_core::constants::*;
use invasion_core::pool::EntityPools;

pub fn run(pools: &mut EntityPools, dt: f32) {
    for ex in pools.explosions.iter_active_mut() {
        ex.frame_timer += dt;
        while ex.frame_timer >= EXPLOSION_FRAME_DURATION {
            ex.frame_timer -= EXPLOSION_FRAME_DURATION;
            ex.current_frame += 1;
        }
        if ex.current_frame >= EXPLOSION_FRAMES {
            ex.active = false;
        }
    }

    for fx in pools.pickup_effects.iter_active_mut() {
        fx.radius += EFFECT_EXPAND_SPEED * dt;
        fx.alpha -= EFFECT_FADE_SPEED * dt;
        if fx.alpha <= 0.0 {
            fx.active = false;
        }
    }
}
