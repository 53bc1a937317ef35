//! Bitset of slot indices used for rotation targets and failed slots

use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of slot indices
///
/// Uses 0-based slot indices. Indices past the capacity are ignored on
/// insert and reported absent on lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotMask {
    bits: BitVec,
}

impl SlotMask {
    /// Create a mask with no slots present
    pub fn new(slots: usize) -> Self {
        Self {
            bits: bitvec![0; slots],
        }
    }

    /// Create a mask containing every slot
    pub fn all(slots: usize) -> Self {
        Self {
            bits: bitvec![1; slots],
        }
    }

    /// Add a slot
    pub fn insert(&mut self, slot: usize) {
        if slot < self.bits.len() {
            self.bits.set(slot, true);
        }
    }

    /// Remove a slot
    pub fn remove(&mut self, slot: usize) {
        if slot < self.bits.len() {
            self.bits.set(slot, false);
        }
    }

    /// Test slot membership
    pub fn contains(&self, slot: usize) -> bool {
        self.bits.get(slot).as_deref() == Some(&true)
    }

    /// Slots present in `self` but not in `other`
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for slot in other.bits.iter_ones() {
            result.remove(slot);
        }
        result
    }

    /// Test if no slots are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count slots in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of slots the mask can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Present slot indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for SlotMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotMask({} slots: {:?})", self.count(), self.to_vec())
    }
}
