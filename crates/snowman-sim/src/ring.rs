//! Fixed-capacity ring of entity handles.
//!
//! New entities are written at a counter that wraps to zero at capacity,
//! so once full each insert evicts the oldest occupant instead of failing.

use hecs::Entity;

#[derive(Debug, Clone)]
pub struct RingSlots {
    slots: Vec<Option<Entity>>,
    counter: usize,
}

impl RingSlots {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be non-zero");
        Self {
            slots: vec![None; capacity],
            counter: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next insert will write to.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Store `entity` at the counter and advance it. Returns the previous
    /// occupant of that slot, which the caller is expected to despawn.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        let evicted = self.slots[self.counter].replace(entity);
        self.counter += 1;
        if self.counter == self.slots.len() {
            self.counter = 0;
        }
        evicted
    }

    /// Every occupied slot, in slot order. Handles may be stale if the
    /// entity was despawned by another system.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.counter = 0;
    }
}
