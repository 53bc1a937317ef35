//! Deterministic slot placement

/// Seeded grid-plus-jitter layout generator
pub mod generator;

pub use generator::{SlotLayout, generate, generate_with_seed, seed_from_sources};
