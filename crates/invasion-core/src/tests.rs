#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::constants::*;
    use crate::entities::{Bullet, Enemy, Item, Player};
    use crate::enums::*;
    use crate::events::FrameEvent;
    use crate::pool::{EntityPools, Pool, Slot};
    use crate::types::{circle_hit, Color};

    #[test]
    fn test_game_mode_int_roundtrip() {
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_int(mode.to_int()), Some(mode));
        }
        assert_eq!(GameMode::from_int(3), None);
        assert_eq!(GameMode::from_int(-1), None);
    }

    #[test]
    fn test_style_int_roundtrip() {
        for style in [
            ShootingStyle::Single,
            ShootingStyle::Double,
            ShootingStyle::Spread,
        ] {
            assert_eq!(ShootingStyle::from_int(style.to_int()), Some(style));
        }
        assert_eq!(ShootingStyle::from_int(5), None);
    }

    #[test]
    fn test_item_kind_int_roundtrip() {
        for kind in [
            ItemKind::DamageUp,
            ItemKind::SingleStyle,
            ItemKind::DoubleStyle,
            ItemKind::SpreadStyle,
            ItemKind::Heal,
        ] {
            assert_eq!(ItemKind::from_int(kind.to_int()), Some(kind));
        }
        assert_eq!(ItemKind::from_int(-1), None);
    }

    #[test]
    fn test_archetype_cycling() {
        assert_eq!(BossArchetype::cycled(0), BossArchetype::Shooter);
        assert_eq!(BossArchetype::cycled(4), BossArchetype::Laser);
        assert_eq!(BossArchetype::cycled(5), BossArchetype::Shooter);
        assert_eq!(BossArchetype::cycled(12), BossArchetype::Summoner);
    }

    #[test]
    fn test_frame_event_serde() {
        let events = vec![
            FrameEvent::SpawnExplosion {
                pos: Vec2::new(10.0, 20.0),
            },
            FrameEvent::SpawnPickupEffect {
                pos: Vec2::new(1.0, 2.0),
                color: Color::new(0, 255, 0),
            },
            FrameEvent::PlaySound {
                kind: SoundKind::Crash,
            },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: FrameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    // ---- circle test ----

    #[test]
    fn test_circle_hit_symmetric() {
        let cases = [
            (Vec2::new(0.0, 0.0), 5.0, Vec2::new(3.0, 4.0), 1.0),
            (Vec2::new(-10.0, 2.0), 0.5, Vec2::new(8.0, -3.0), 20.0),
            (Vec2::new(100.0, 100.0), 26.0, Vec2::new(120.0, 110.0), 14.0),
            (Vec2::new(0.0, 0.0), 0.0, Vec2::new(0.0, 0.0), 0.0),
        ];
        for (a, ra, b, rb) in cases {
            assert_eq!(circle_hit(a, ra, b, rb), circle_hit(b, rb, a, ra));
        }
    }

    #[test]
    fn test_circle_hit_boundary_inclusive() {
        // Touching circles count as a hit: distance == r1 + r2.
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(circle_hit(a, 4.0, b, 6.0));
        assert!(!circle_hit(a, 4.0, b, 5.9));
    }

    // ---- pools ----

    #[test]
    fn test_pool_capacity_invariant() {
        let mut pool: Pool<Bullet> = Pool::new(8);
        assert_eq!(pool.capacity(), 8);
        for _ in 0..5 {
            let b = pool.acquire().unwrap();
            b.active = true;
        }
        let active = pool.active_count();
        let inactive = pool.iter().filter(|b| !b.is_active()).count();
        assert_eq!(active + inactive, pool.capacity());
        assert_eq!(active, 5);
    }

    #[test]
    fn test_pool_acquire_exhaustion() {
        let mut pool: Pool<Item> = Pool::new(3);
        for _ in 0..3 {
            pool.acquire().unwrap().active = true;
        }
        assert!(pool.acquire().is_none());
    }

    #[test]
    fn test_pool_acquire_or_overwrite_falls_back_to_slot_zero() {
        let mut pool: Pool<Enemy> = Pool::new(4);
        for i in 0..4 {
            let e = pool.acquire().unwrap();
            e.active = true;
            e.hp = i as i32;
        }
        let slot = pool.acquire_or_overwrite();
        // Full pool: the returned slot is slot 0, already active.
        assert!(slot.is_active());
        assert_eq!(slot.hp, 0);
    }

    #[test]
    fn test_pool_release_makes_slot_reusable() {
        let mut pool: Pool<Bullet> = Pool::new(2);
        pool.acquire().unwrap().active = true;
        pool.acquire().unwrap().active = true;
        assert!(pool.acquire().is_none());
        pool.get_mut(1).unwrap().deactivate();
        assert!(pool.acquire().is_some());
    }

    #[test]
    fn test_pool_acquire_at_occupied() {
        let mut pool: Pool<Enemy> = Pool::new(4);
        pool.get_mut(2).unwrap().active = true;
        assert!(pool.acquire_at(2).is_none());
        assert!(pool.acquire_at(1).is_some());
        assert!(pool.acquire_at(99).is_none());
    }

    #[test]
    fn test_entity_pools_default_capacities() {
        let pools = EntityPools::default();
        assert_eq!(pools.player_bullets.capacity(), MAX_PLAYER_BULLETS);
        assert_eq!(pools.enemy_bullets.capacity(), MAX_ENEMY_BULLETS);
        assert_eq!(pools.enemies.capacity(), MAX_ENEMIES);
        assert_eq!(pools.items.capacity(), MAX_ITEMS);
        assert_eq!(pools.explosions.capacity(), MAX_EXPLOSIONS);
        assert_eq!(pools.pickup_effects.capacity(), MAX_PICKUP_EFFECTS);
        assert!(pools.field_cleared());
    }

    // ---- entities ----

    #[test]
    fn test_player_defaults() {
        let p = Player::default();
        assert_eq!(p.hp, PLAYER_MAX_HP);
        assert_eq!(p.damage, PLAYER_START_DAMAGE);
        assert_eq!(p.pos.x, FIELD_WIDTH / 2.0);
    }

    #[test]
    fn test_enemy_hp_ratio() {
        let mut e = Enemy::default();
        e.max_hp = 100;
        e.hp = 80;
        assert!((e.hp_ratio() - 0.8).abs() < 1e-6);
        e.hp = -5;
        assert_eq!(e.hp_ratio(), 0.0);
        e.max_hp = 0;
        assert_eq!(e.hp_ratio(), 0.0);
    }
}
