//! Render-ready description of the visible tiles

use crate::geometry::{Point, Rect};
use crate::interaction::repulsion::PointerOffset;
use crate::layout::SlotLayout;
use crate::photo::{PhotoRef, RenderElement};

/// Keys the collage and lightbox react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Activates a focused tile
    Enter,
    /// Activates a focused tile
    Space,
    /// Closes the lightbox
    Escape,
    /// Anything else
    Other,
}

/// User gesture aimed at a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Pointer click
    Click,
    /// Key press while the tile has focus
    Key(Key),
}

impl Activation {
    /// Whether the gesture selects the tile
    pub const fn selects(self) -> bool {
        matches!(
            self,
            Self::Click | Self::Key(Key::Enter) | Self::Key(Key::Space)
        )
    }
}

/// Signal emitted when a tile is activated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Slot that was activated
    pub slot: usize,
    /// Photo shown in the slot
    pub photo: PhotoRef,
    /// Renderable URI of that photo
    pub display: String,
}

/// One tile as it should be drawn this frame
#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    /// Slot index
    pub slot: usize,
    /// Changes whenever the slot's photo is swapped
    pub rotation_key: u64,
    /// Photo assigned to the slot
    pub photo: PhotoRef,
    /// URI to render, `None` while transcoding
    pub display: Option<String>,
    /// Element to render `display` with
    pub element: Option<RenderElement>,
    /// Fixed placement of the slot
    pub layout: SlotLayout,
    /// Current pointer displacement, in the tile's rotated frame
    pub offset: PointerOffset,
}

impl TileView {
    /// Accessible text of the tile
    pub fn accessible_label(&self) -> &str {
        &self.photo.label
    }

    /// Whether the tile is drawn (transcoding tiles are fully transparent)
    pub const fn is_visible(&self) -> bool {
        self.display.is_some()
    }

    /// Whether the tile receives clicks
    pub const fn is_interactive(&self) -> bool {
        self.is_visible()
    }

    /// Displacement in screen space
    ///
    /// The tile is rotated before it is translated, so the offset is turned
    /// by the tile's tilt.
    pub fn screen_offset(&self) -> PointerOffset {
        let (sin, cos) = self.layout.rotation_deg.to_radians().sin_cos();
        PointerOffset {
            dx: self.offset.dx.mul_add(cos, -self.offset.dy * sin),
            dy: self.offset.dx.mul_add(sin, self.offset.dy * cos),
        }
    }

    /// Axis-aligned box of the displaced, unrotated tile
    pub fn bounds(&self, container: Rect) -> Rect {
        let corner = container.at_percent(self.layout.left_percent, self.layout.top_percent);
        let offset = self.screen_offset();
        Rect::new(
            corner.x + offset.dx,
            corner.y + offset.dy,
            self.layout.size_px,
            self.layout.size_px,
        )
    }

    /// Center of the displaced tile
    pub fn center(&self, container: Rect) -> Point {
        let bounds = self.bounds(container);
        Point::new(
            bounds.left + bounds.width / 2.0,
            bounds.top + bounds.height / 2.0,
        )
    }
}
