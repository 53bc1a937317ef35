//! Radial-decay displacement pushing tiles away from the pointer
//!
//! Each tile is displaced along the line from the pointer through the tile's
//! center, by an amount that falls linearly from `strength` at the pointer to
//! zero at `radius`. Nothing carries over between frames.

use crate::geometry::{Point, Rect};
use crate::layout::SlotLayout;
use ndarray::{Array2, Zip};

/// Displacement of one tile in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    /// Horizontal displacement
    pub dx: f64,
    /// Vertical displacement
    pub dy: f64,
}

impl PointerOffset {
    /// No displacement
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Length of the displacement vector
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Repulsion parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepulsionField {
    /// Distance beyond which tiles are unaffected
    pub radius: f64,
    /// Displacement of a tile right next to the pointer
    pub strength: f64,
}

impl RepulsionField {
    /// Create a field
    pub const fn new(radius: f64, strength: f64) -> Self {
        Self { radius, strength }
    }

    /// Displacement magnitude for a tile `distance` pixels from the pointer
    ///
    /// Zero at the pointer itself and at or beyond the radius.
    pub fn magnitude_at(&self, distance: f64) -> f64 {
        if distance > 0.0 && distance < self.radius {
            (1.0 - distance / self.radius) * self.strength
        } else {
            0.0
        }
    }

    /// Displacement of a tile centered at `center`
    pub fn displacement(&self, center: Point, pointer: Point) -> PointerOffset {
        let dx = center.x - pointer.x;
        let dy = center.y - pointer.y;
        let force = self.magnitude_at(dx.hypot(dy));
        if force == 0.0 {
            return PointerOffset::ZERO;
        }
        let angle = dy.atan2(dx);
        PointerOffset {
            dx: angle.cos() * force,
            dy: angle.sin() * force,
        }
    }

    /// Offsets for every layout inside `container`
    pub fn compute(&self, container: Rect, layouts: &[SlotLayout], pointer: Point) -> OffsetField {
        let mut field = OffsetField::zeros(layouts.len());
        for (index, layout) in layouts.iter().enumerate() {
            let center = tile_center(container, layout);
            field.set(index, self.displacement(center, pointer));
        }
        field
    }
}

/// Screen-space center of an undisplaced tile
pub fn tile_center(container: Rect, layout: &SlotLayout) -> Point {
    let corner = container.at_percent(layout.left_percent, layout.top_percent);
    let half = layout.size_px / 2.0;
    Point::new(corner.x + half, corner.y + half)
}

/// Offsets of all slots, one `[dx, dy]` row per slot index
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetField {
    offsets: Array2<f64>,
}

impl OffsetField {
    /// Field of `slots` zero offsets
    pub fn zeros(slots: usize) -> Self {
        Self {
            offsets: Array2::zeros((slots, 2)),
        }
    }

    /// Number of slots in the field
    pub fn len(&self) -> usize {
        self.offsets.nrows()
    }

    /// Whether the field has no slots
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offset of one slot, zero for unknown slots
    pub fn get(&self, slot: usize) -> PointerOffset {
        match (self.offsets.get([slot, 0]), self.offsets.get([slot, 1])) {
            (Some(&dx), Some(&dy)) => PointerOffset { dx, dy },
            _ => PointerOffset::ZERO,
        }
    }

    /// Overwrite the offset of one slot; unknown slots are ignored
    pub fn set(&mut self, slot: usize, offset: PointerOffset) {
        if let Some(dx) = self.offsets.get_mut([slot, 0]) {
            *dx = offset.dx;
        }
        if let Some(dy) = self.offsets.get_mut([slot, 1]) {
            *dy = offset.dy;
        }
    }

    /// Largest per-slot distance between this field and `other`
    ///
    /// Fields of different sizes are infinitely far apart.
    pub fn max_change(&self, other: &Self) -> f64 {
        if self.offsets.dim() != other.offsets.dim() {
            return f64::INFINITY;
        }
        let mut max = 0.0_f64;
        Zip::from(self.offsets.rows())
            .and(other.offsets.rows())
            .for_each(|a, b| {
                let (ax, ay) = (a.get(0).copied(), a.get(1).copied());
                let (bx, by) = (b.get(0).copied(), b.get(1).copied());
                if let (Some(ax), Some(ay), Some(bx), Some(by)) = (ax, ay, bx, by) {
                    max = max.max((ax - bx).hypot(ay - by));
                }
            });
        max
    }

    /// Iterate offsets in slot order
    pub fn iter(&self) -> impl Iterator<Item = PointerOffset> + '_ {
        (0..self.len()).map(|slot| self.get(slot))
    }
}
