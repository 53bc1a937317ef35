//! Tests for simulation progress tracking

#[cfg(test)]
mod tests {
    use photodrift::io::progress::SimulationProgress;

    // Tests rotations accumulate across frames
    // Verified by overwriting the tally on each frame
    #[test]
    fn test_rotation_tally() {
        let mut progress = SimulationProgress::new("photos", 10);
        progress.frame(1, 0);
        progress.frame(2, 1);
        progress.frame(3, 2);

        assert_eq!(progress.rotations(), 3);
        progress.finish();
    }

    // Tests an empty simulation finishes cleanly
    // Verified by panicking on zero-length bars
    #[test]
    fn test_zero_frames() {
        let progress = SimulationProgress::new("", 0);

        assert_eq!(progress.rotations(), 0);
        progress.finish();
    }
}
