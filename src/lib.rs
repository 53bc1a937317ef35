//! Floating photo collage engine
//!
//! Lays out a bounded number of photo tiles on a seeded grid, pushes them
//! away from the pointer, and rotates a larger photo set through the visible
//! tiles. Legacy-format photos are transcoded on demand, and tiles whose
//! photos cannot be loaded quietly drop out.

#![forbid(unsafe_code)]

/// The mounted collage and its render-ready view
pub mod engine;
/// Screen-space points and rectangles
pub mod geometry;
/// Pointer tracking and cursor repulsion
pub mod interaction;
/// Input/output operations and error handling
pub mod io;
/// Deterministic slot placement
pub mod layout;
/// Photo loading, transcoding and resource handles
pub mod loading;
/// Deterministic pseudo-random utilities
pub mod math;
/// Photo references
pub mod photo;
/// Slot assignment and photo rotation
pub mod rotation;
/// Frame loops and timers with explicit cancellation
pub mod schedule;

pub use engine::CollageEngine;
pub use io::error::{CollageError, Result};
pub use photo::PhotoRef;
