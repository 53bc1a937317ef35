//! Tests for the radial-decay repulsion field

#[cfg(test)]
mod tests {
    use photodrift::geometry::{Point, Rect};
    use photodrift::interaction::repulsion::tile_center;
    use photodrift::interaction::{OffsetField, PointerOffset, RepulsionField};
    use photodrift::layout::SlotLayout;

    fn layout(left_percent: f64, top_percent: f64, size_px: f64) -> SlotLayout {
        SlotLayout {
            left_percent,
            top_percent,
            size_px,
            rotation_deg: 0.0,
            animation_delay_sec: 0.0,
            animation_duration_sec: 8.0,
        }
    }

    // Tests the linear falloff at known distances
    // Verified by squaring the falloff term
    #[test]
    fn test_magnitude_known_values() {
        let field = RepulsionField::new(200.0, 30.0);

        assert!((field.magnitude_at(100.0) - 15.0).abs() < 1e-12);
        assert!((field.magnitude_at(50.0) - 22.5).abs() < 1e-12);
    }

    // Tests the magnitude vanishes at the pointer and beyond the radius
    // Verified by making the radius check inclusive
    #[test]
    fn test_magnitude_zero_outside_open_interval() {
        let field = RepulsionField::new(200.0, 30.0);

        assert!(field.magnitude_at(0.0).abs() < f64::EPSILON);
        assert!(field.magnitude_at(200.0).abs() < f64::EPSILON);
        assert!(field.magnitude_at(350.0).abs() < f64::EPSILON);
    }

    // Tests the magnitude falls as distance grows
    // Verified by inverting the falloff
    #[test]
    fn test_magnitude_strictly_decreasing() {
        let field = RepulsionField::new(200.0, 30.0);
        let mut previous = f64::INFINITY;

        for step in 1..200 {
            let magnitude = field.magnitude_at(f64::from(step));
            assert!(magnitude < previous);
            previous = magnitude;
        }
    }

    // Tests the displacement points away from the pointer
    // Verified by swapping center and pointer in the angle
    #[test]
    fn test_displacement_direction() {
        let field = RepulsionField::new(200.0, 30.0);

        let right = field.displacement(Point::new(100.0, 0.0), Point::new(0.0, 0.0));
        assert!((right.dx - 15.0).abs() < 1e-9);
        assert!(right.dy.abs() < 1e-9);

        let below = field.displacement(Point::new(0.0, 100.0), Point::new(0.0, 0.0));
        assert!(below.dx.abs() < 1e-9);
        assert!((below.dy - 15.0).abs() < 1e-9);

        let up_left = field.displacement(Point::new(-30.0, -40.0), Point::new(0.0, 0.0));
        assert!(up_left.dx < 0.0);
        assert!(up_left.dy < 0.0);
        assert!((up_left.magnitude() - field.magnitude_at(50.0)).abs() < 1e-9);
    }

    // Tests a pointer on the tile center causes no displacement
    // Verified by defaulting the angle for zero distance
    #[test]
    fn test_displacement_at_center() {
        let field = RepulsionField::new(200.0, 30.0);
        let offset = field.displacement(Point::new(5.0, 5.0), Point::new(5.0, 5.0));

        assert_eq!(offset, PointerOffset::ZERO);
    }

    // Tests tile centers use the container origin and half the size
    // Verified by dropping the half-size term
    #[test]
    fn test_tile_center() {
        let container = Rect::new(100.0, 50.0, 1000.0, 1000.0);
        let center = tile_center(container, &layout(10.0, 20.0, 100.0));

        assert!((center.x - 250.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);
    }

    // Tests a full field computation over several layouts
    // Verified by computing offsets for the first slot only
    #[test]
    fn test_compute_field() {
        let container = Rect::from_size(1000.0, 1000.0);
        let layouts = [layout(10.0, 10.0, 100.0), layout(80.0, 80.0, 100.0)];
        let field = RepulsionField::new(200.0, 30.0).compute(
            container,
            &layouts,
            Point::new(150.0, 50.0),
        );

        assert_eq!(field.len(), 2);
        let near = field.get(0);
        assert!(near.dx.abs() < 1e-9);
        assert!((near.dy - 15.0).abs() < 1e-9);
        assert_eq!(field.get(1), PointerOffset::ZERO);
    }

    // Tests offset storage and lookups past the end
    // Verified by panicking on unknown slots
    #[test]
    fn test_offset_field_get_set() {
        let mut field = OffsetField::zeros(3);
        field.set(1, PointerOffset { dx: 3.0, dy: -4.0 });
        field.set(9, PointerOffset { dx: 1.0, dy: 1.0 });

        assert_eq!(field.len(), 3);
        assert!(!field.is_empty());
        assert_eq!(field.get(1), PointerOffset { dx: 3.0, dy: -4.0 });
        assert_eq!(field.get(9), PointerOffset::ZERO);
        assert_eq!(field.iter().count(), 3);
        assert!(OffsetField::zeros(0).is_empty());
    }

    // Tests the largest per-slot change between fields
    // Verified by summing changes instead of taking the maximum
    #[test]
    fn test_max_change() {
        let zeros = OffsetField::zeros(3);
        let mut moved = OffsetField::zeros(3);
        moved.set(0, PointerOffset { dx: 1.0, dy: 0.0 });
        moved.set(2, PointerOffset { dx: 3.0, dy: 4.0 });

        assert!((moved.max_change(&zeros) - 5.0).abs() < 1e-12);
        assert!(zeros.max_change(&zeros).abs() < f64::EPSILON);
        assert!(zeros.max_change(&OffsetField::zeros(2)).is_infinite());
    }
}
