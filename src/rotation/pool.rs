//! Reserve of photos waiting to be rotated into view

use crate::math::shuffle::{SineSource, fisher_yates};
use crate::photo::PhotoRef;
use std::collections::{HashSet, VecDeque};

/// FIFO queue of photos that are not on screen
///
/// Starts empty and is rebuilt from the full photo list whenever it runs dry.
#[derive(Clone, Debug, Default)]
pub struct PhotoPool {
    queue: VecDeque<PhotoRef>,
    rebuilds: u64,
}

impl PhotoPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Refill the pool with a shuffled selection of `photos`
    ///
    /// Prefers photos whose source is not in `displayed`; if every photo is on
    /// screen, falls back to the full list. Sources in `excluded` are never
    /// queued. Returns the number of photos queued.
    pub fn rebuild(
        &mut self,
        photos: &[PhotoRef],
        displayed: &HashSet<&str>,
        excluded: &HashSet<String>,
        source: &mut SineSource,
    ) -> usize {
        let eligible = |photo: &&PhotoRef| !excluded.contains(&photo.source);
        let mut candidates: Vec<PhotoRef> = photos
            .iter()
            .filter(eligible)
            .filter(|photo| !displayed.contains(photo.source.as_str()))
            .cloned()
            .collect();
        if candidates.is_empty() {
            candidates = photos.iter().filter(eligible).cloned().collect();
        }
        fisher_yates(&mut candidates, source);
        self.queue = candidates.into();
        self.rebuilds += 1;
        self.queue.len()
    }

    /// Take the next photo
    pub fn pop(&mut self) -> Option<PhotoRef> {
        self.queue.pop_front()
    }

    /// Drop every queued photo with the given source
    pub fn remove_source(&mut self, source: &str) {
        self.queue.retain(|photo| photo.source != source);
    }

    /// Number of queued photos
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of times the pool was rebuilt
    pub const fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Queued photos in pop order
    pub fn iter(&self) -> impl Iterator<Item = &PhotoRef> {
        self.queue.iter()
    }
}
