//! Tests for the sine source and Fisher-Yates shuffle

#[cfg(test)]
mod tests {
    use photodrift::math::shuffle::{SineSource, fisher_yates};

    // Tests index generation respects the bound
    // Verified by removing the upper clamp
    #[test]
    fn test_next_index_bounds() {
        let mut source = SineSource::new(1234.5);

        assert_eq!(source.next_index(0), 0);
        for bound in 1..50 {
            assert!(source.next_index(bound) < bound);
        }
    }

    // Tests unit values stay in range
    // Verified by scaling the output
    #[test]
    fn test_next_unit_range() {
        let mut source = SineSource::new(99.0);

        for _ in 0..1000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    // Tests the shuffle is a permutation
    // Verified by overwriting instead of swapping
    #[test]
    fn test_fisher_yates_preserves_elements() {
        let mut items: Vec<u32> = (0..40).collect();
        fisher_yates(&mut items, &mut SineSource::new(77.0));

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..40).collect::<Vec<_>>());
    }

    // Tests equal seeds give equal orders
    // Verified by seeding from the clock
    #[test]
    fn test_fisher_yates_reproducible() {
        let mut first: Vec<u32> = (0..30).collect();
        let mut second = first.clone();
        fisher_yates(&mut first, &mut SineSource::new(4321.0));
        fisher_yates(&mut second, &mut SineSource::new(4321.0));

        assert_eq!(first, second);
    }

    // Tests the shuffle actually reorders
    // Verified by returning early from the shuffle
    #[test]
    fn test_fisher_yates_moves_items() {
        let original: Vec<u32> = (0..30).collect();
        let mut items = original.clone();
        fisher_yates(&mut items, &mut SineSource::new(8.5));

        assert_ne!(items, original);
    }

    // Tests empty and single-element slices are untouched
    // Verified by starting the loop at zero
    #[test]
    fn test_fisher_yates_trivial() {
        let mut empty: Vec<u32> = Vec::new();
        fisher_yates(&mut empty, &mut SineSource::new(1.0));
        assert!(empty.is_empty());

        let mut single = vec![5];
        fisher_yates(&mut single, &mut SineSource::new(1.0));
        assert_eq!(single, vec![5]);
    }
}
