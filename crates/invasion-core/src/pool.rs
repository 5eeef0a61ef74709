//! Fixed-capacity slot pools.
//!
//! Every pooled entity kind lives in a `Pool<T>` whose capacity is set at
//! construction and never changes. A slot's `active` flag is its only
//! existence marker; acquisition scans for the first inactive slot and
//! capacity exhaustion is handled by a caller-chosen fallback policy,
//! never by failure or reallocation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::entities::{Bullet, Enemy, Explosion, Item, PickupEffect};

/// A pooled entity. `deactivate` returns the slot for reuse.
pub trait Slot {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Fixed-capacity arena of `T` slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Slot + Default> Pool<T> {
    /// A pool of `capacity` default (inactive) slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self { slots }
    }
}

impl<T: Slot> Pool<T> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot, or `None` when the pool is full.
    pub fn acquire(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.is_active())
    }

    /// First inactive slot, or slot 0 when the pool is full. Used by the
    /// survival spawner, which must never drop a scheduled spawn.
    pub fn acquire_or_overwrite(&mut self) -> &mut T {
        let idx = self
            .slots
            .iter()
            .position(|s| !s.is_active())
            .unwrap_or(0);
        &mut self.slots[idx]
    }

    /// The slot at `idx` iff it is inactive. Used by summon patterns that
    /// roll a random slot and give up when it is occupied.
    pub fn acquire_at(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).filter(|s| !s.is_active())
    }

    /// Deactivate every slot.
    pub fn clear(&mut self) {
        for s in &mut self.slots {
            s.deactivate();
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx)
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

/// All entity pools, exclusively owned by the engine and mutated only by
/// the current tick's serial pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPools {
    pub player_bullets: Pool<Bullet>,
    pub enemy_bullets: Pool<Bullet>,
    pub enemies: Pool<Enemy>,
    pub items: Pool<Item>,
    pub explosions: Pool<Explosion>,
    pub pickup_effects: Pool<PickupEffect>,
}

impl Default for EntityPools {
    fn default() -> Self {
        Self {
            player_bullets: Pool::new(MAX_PLAYER_BULLETS),
            enemy_bullets: Pool::new(MAX_ENEMY_BULLETS),
            enemies: Pool::new(MAX_ENEMIES),
            items: Pool::new(MAX_ITEMS),
            explosions: Pool::new(MAX_EXPLOSIONS),
            pickup_effects: Pool::new(MAX_PICKUP_EFFECTS),
        }
    }
}

impl EntityPools {
    /// True when no enemy slot is active (a cleared wave).
    pub fn field_cleared(&self) -> bool {
        self.enemies.active_count() == 0
    }
}
