//! Latest pointer position, written on every raw move event

use crate::geometry::Point;

/// Last known pointer position
///
/// Updated on every move event independently of the throttled offset
/// recompute, which simply reads whatever position is current.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    position: Point,
    moves: u64,
}

impl PointerTracker {
    /// Tracker with the pointer at the origin
    pub const fn new() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            moves: 0,
        }
    }

    /// Record a raw pointer move
    pub const fn moved(&mut self, position: Point) {
        self.position = position;
        self.moves += 1;
    }

    /// Current pointer position
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Number of move events seen
    pub const fn moves(&self) -> u64 {
        self.moves
    }
}
