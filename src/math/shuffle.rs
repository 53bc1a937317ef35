//! Fisher–Yates shuffling driven by a reseedable sine source

use crate::math::hash::seeded_random;

/// Stream of pseudo-random values in `[0, 1)` derived from one seed
///
/// Cheap to create, so callers reseed it on every use instead of keeping it
/// around between shuffles.
#[derive(Clone, Debug)]
pub struct SineSource {
    seed: f64,
    counter: u32,
}

impl SineSource {
    /// Start a new stream from `seed`
    pub const fn new(seed: f64) -> Self {
        Self { seed, counter: 0 }
    }

    /// Next value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        self.counter = self.counter.wrapping_add(1);
        seeded_random(self.seed, f64::from(self.counter))
    }

    /// Next index in `0..bound`, or 0 when `bound` is 0
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        ((self.next_unit() * bound as f64) as usize).min(bound - 1)
    }
}

/// Shuffle `items` in place
///
/// Walks from the back, swapping each element with a uniformly chosen one at
/// or before it.
pub fn fisher_yates<T>(items: &mut [T], source: &mut SineSource) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1);
        items.swap(i, j);
    }
}
