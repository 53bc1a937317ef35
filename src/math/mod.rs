//! Deterministic pseudo-random utilities

/// Seeded sine hash and string hashing
pub mod hash;
/// Fisher–Yates shuffling over a sine-based source
pub mod shuffle;
