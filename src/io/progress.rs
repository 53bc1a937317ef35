//! Progress display for collage simulations

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Frame counter with a running rotation tally
pub struct SimulationProgress {
    bar: ProgressBar,
    rotations: usize,
}

impl SimulationProgress {
    /// Progress bar for `frames` simulated frames
    pub fn new(label: &str, frames: u64) -> Self {
        let bar = ProgressBar::new(frames);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar, rotations: 0 }
    }

    /// Report the frame just simulated and any rotations it caused
    pub fn frame(&mut self, frame: u64, rotations: usize) {
        self.rotations += rotations;
        self.bar.set_position(frame);
        if rotations > 0 {
            self.bar.set_message(format!("{} rotations", self.rotations));
        }
    }

    /// Total rotations reported so far
    pub const fn rotations(&self) -> usize {
        self.rotations
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
