//! Tests for render-ready tile descriptions

#[cfg(test)]
mod tests {
    use photodrift::engine::{Activation, Key, TileView};
    use photodrift::geometry::{Point, Rect};
    use photodrift::interaction::PointerOffset;
    use photodrift::layout::SlotLayout;
    use photodrift::photo::{PhotoRef, RenderElement};

    fn tile(rotation_deg: f64, offset: PointerOffset, display: Option<&str>) -> TileView {
        TileView {
            slot: 0,
            rotation_key: 0,
            photo: PhotoRef::new("/photos/a.jpg", "Sunset at the pier"),
            display: display.map(str::to_string),
            element: display.map(RenderElement::for_source),
            layout: SlotLayout {
                left_percent: 10.0,
                top_percent: 20.0,
                size_px: 100.0,
                rotation_deg,
                animation_delay_sec: 1.0,
                animation_duration_sec: 9.0,
            },
            offset,
        }
    }

    // Tests click, Enter and Space select a tile
    // Verified by dropping Space from the match
    #[test]
    fn test_activation_selects() {
        assert!(Activation::Click.selects());
        assert!(Activation::Key(Key::Enter).selects());
        assert!(Activation::Key(Key::Space).selects());
        assert!(!Activation::Key(Key::Escape).selects());
        assert!(!Activation::Key(Key::Other).selects());
    }

    // Tests the label doubles as accessible text
    // Verified by returning the source instead
    #[test]
    fn test_accessible_label() {
        let view = tile(0.0, PointerOffset::ZERO, Some("/photos/a.jpg"));

        assert_eq!(view.accessible_label(), "Sunset at the pier");
    }

    // Tests loading tiles are invisible and inert
    // Verified by treating every tile as visible
    #[test]
    fn test_visibility_follows_display() {
        assert!(tile(0.0, PointerOffset::ZERO, Some("/photos/a.jpg")).is_visible());
        let loading = tile(0.0, PointerOffset::ZERO, None);
        assert!(!loading.is_visible());
        assert!(!loading.is_interactive());
    }

    // Tests offsets are turned by the tile rotation
    // Verified by translating before rotating
    #[test]
    fn test_screen_offset_rotated() {
        let offset = PointerOffset { dx: 10.0, dy: 0.0 };

        let flat = tile(0.0, offset, None).screen_offset();
        assert!((flat.dx - 10.0).abs() < 1e-9);
        assert!(flat.dy.abs() < 1e-9);

        let turned = tile(90.0, offset, None).screen_offset();
        assert!(turned.dx.abs() < 1e-9);
        assert!((turned.dy - 10.0).abs() < 1e-9);
        assert!((turned.magnitude() - 10.0).abs() < 1e-9);
    }

    // Tests the displaced box and its center
    // Verified by ignoring the offset in bounds
    #[test]
    fn test_bounds_and_center() {
        let container = Rect::from_size(1000.0, 1000.0);
        let view = tile(0.0, PointerOffset { dx: 5.0, dy: -5.0 }, None);

        let bounds = view.bounds(container);
        assert!((bounds.left - 105.0).abs() < 1e-9);
        assert!((bounds.top - 195.0).abs() < 1e-9);
        assert!((bounds.width - 100.0).abs() < 1e-9);

        let center = view.center(container);
        assert!(center.distance_to(Point::new(155.0, 245.0)) < 1e-9);
    }
}
