//! Pointer tracking and cursor repulsion

/// Latest pointer position
pub mod pointer;
/// Radial-decay displacement field
pub mod repulsion;
/// Commit rate limiting
pub mod throttle;

pub use pointer::PointerTracker;
pub use repulsion::{OffsetField, PointerOffset, RepulsionField};
pub use throttle::CommitThrottle;
