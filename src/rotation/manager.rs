//! Cycling a large photo set through a fixed number of slots

use crate::math::shuffle::SineSource;
use crate::photo::PhotoRef;
use crate::rotation::mask::SlotMask;
use crate::rotation::pool::PhotoPool;
use rand::{Rng, rngs::StdRng};
use std::collections::HashSet;
use tracing::debug;

/// One rendering cell and the photo it currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Fixed position of the slot in the layout
    pub index: usize,
    /// Photo on display
    pub current_photo: PhotoRef,
    /// Bumped on every photo swap, never reused within a slot
    pub rotation_key: u64,
}

/// Outcome of a successful rotation tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    /// Slot whose photo changed
    pub slot: usize,
    /// New rotation key of that slot
    pub rotation_key: u64,
    /// Photo now on display
    pub photo: PhotoRef,
    /// Photo that was replaced
    pub previous: PhotoRef,
}

/// Owns slot assignments and the pool of off-screen photos
///
/// Slots are filled from the front of the photo list at construction. Each
/// tick then moves one pooled photo into a random eligible slot.
#[derive(Debug)]
pub struct RotationManager {
    photos: Vec<PhotoRef>,
    slots: Vec<Slot>,
    pool: PhotoPool,
    excluded: HashSet<String>,
    rng: StdRng,
}

impl RotationManager {
    /// Assign the first `slot_count` photos to slots
    pub fn new(photos: Vec<PhotoRef>, slot_count: usize, rng: StdRng) -> Self {
        let slots = photos
            .iter()
            .take(slot_count)
            .enumerate()
            .map(|(index, photo)| Slot {
                index,
                current_photo: photo.clone(),
                rotation_key: 0,
            })
            .collect();
        Self {
            photos,
            slots,
            pool: PhotoPool::new(),
            excluded: HashSet::new(),
            rng,
        }
    }

    /// Whether there are more photos than slots, so rotation is useful
    pub fn rotates(&self) -> bool {
        self.photos.len() > self.slots.len()
    }

    /// Replace the photo of one random slot out of `targets`
    ///
    /// Returns `None` without touching any slot when no slot is eligible or
    /// no photo is available after a rebuild attempt.
    pub fn tick(&mut self, targets: &SlotMask) -> Option<Rotation> {
        let eligible: Vec<usize> = targets
            .to_vec()
            .into_iter()
            .filter(|&slot| slot < self.slots.len())
            .collect();
        if eligible.is_empty() {
            debug!("rotation skipped: no eligible slot");
            return None;
        }

        if self.pool.is_empty() {
            self.rebuild_pool();
        }

        let slot_index = eligible
            .get(self.rng.random_range(0..eligible.len()))
            .copied()?;
        let Some(photo) = self.pool.pop() else {
            debug!("rotation skipped: pool empty after rebuild");
            return None;
        };
        let slot = self.slots.get_mut(slot_index)?;
        let previous = std::mem::replace(&mut slot.current_photo, photo.clone());
        slot.rotation_key += 1;

        debug!(
            slot = slot_index,
            rotation_key = slot.rotation_key,
            source = %photo.source,
            "rotated slot"
        );

        Some(Rotation {
            slot: slot_index,
            rotation_key: slot.rotation_key,
            photo,
            previous,
        })
    }

    fn rebuild_pool(&mut self) {
        let displayed: HashSet<&str> = self
            .slots
            .iter()
            .map(|slot| slot.current_photo.source.as_str())
            .collect();
        let mut source = SineSource::new(self.rng.random::<f64>() * 10_000.0);
        let queued = self
            .pool
            .rebuild(&self.photos, &displayed, &self.excluded, &mut source);
        debug!(queued, rebuilds = self.pool.rebuilds(), "rebuilt photo pool");
    }

    /// Never queue `source` again and drop it from the pool
    pub fn exclude(&mut self, source: &str) {
        self.pool.remove_source(source);
        self.excluded.insert(source.to_string());
    }

    /// All slots in index order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// One slot by index
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The pool of off-screen photos
    pub const fn pool(&self) -> &PhotoPool {
        &self.pool
    }

    /// Every photo known to the manager, in mount order
    pub fn photos(&self) -> &[PhotoRef] {
        &self.photos
    }
}
