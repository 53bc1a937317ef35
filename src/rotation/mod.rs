//! Slot assignment and photo rotation

/// Manager moving pooled photos into slots
pub mod manager;
/// Bitset of slot indices
pub mod mask;
/// FIFO reserve of off-screen photos
pub mod pool;

pub use manager::{Rotation, RotationManager, Slot};
pub use mask::SlotMask;
pub use pool::PhotoPool;
