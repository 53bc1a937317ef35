#[cfg(test)]
mod tests {
    use photodrift::rotation::SlotMask;

    // Tests insert, contains and remove round out membership
    // Verified by removing the bounds check in insert
    #[test]
    fn test_membership() {
        let mut mask = SlotMask::new(10);
        mask.insert(2);
        mask.insert(7);
        mask.insert(42);

        assert!(mask.contains(2));
        assert!(mask.contains(7));
        assert!(!mask.contains(3));
        assert!(!mask.contains(42));
        assert_eq!(mask.count(), 2);

        mask.remove(2);
        assert!(!mask.contains(2));
        assert_eq!(mask.to_vec(), vec![7]);
    }

    // Tests the full mask and its capacity
    // Verified by starting all bits cleared
    #[test]
    fn test_all() {
        let mask = SlotMask::all(4);

        assert_eq!(mask.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(mask.capacity(), 4);
        assert!(!mask.is_empty());
        assert!(SlotMask::new(4).is_empty());
        assert!(SlotMask::all(0).is_empty());
    }

    // Tests set difference removes the other mask's slots
    // Verified by computing the intersection instead
    #[test]
    fn test_difference() {
        let all = SlotMask::all(5);
        let mut failed = SlotMask::new(5);
        failed.insert(1);
        failed.insert(3);

        assert_eq!(all.difference(&failed).to_vec(), vec![0, 2, 4]);
        assert_eq!(failed.difference(&all).count(), 0);
    }

    // Tests display lists the present slots
    // Verified by printing the capacity instead of the count
    #[test]
    fn test_display() {
        let mut mask = SlotMask::new(8);
        mask.insert(1);
        mask.insert(5);

        assert_eq!(mask.to_string(), "SlotMask(2 slots: [1, 5])");
    }
}
