//! Self-rescheduling per-frame callback

use crate::schedule::cancel::CancelToken;

/// Recurring frame callback that keeps running until cancelled
///
/// A host calls [`FrameLoop::run`] once per display frame. The loop stays
/// scheduled after each run; it only stops once its token is cancelled.
#[derive(Debug)]
pub struct FrameLoop {
    token: CancelToken,
    frames_run: u64,
    last_timestamp: Option<f64>,
}

impl FrameLoop {
    /// Start a loop and hand back the handle that stops it
    pub fn start() -> (Self, CancelToken) {
        let token = CancelToken::new();
        let frame_loop = Self {
            token: token.clone(),
            frames_run: 0,
            last_timestamp: None,
        };
        (frame_loop, token)
    }

    /// Loop that is already stopped and never runs
    pub fn idle() -> Self {
        let (frame_loop, token) = Self::start();
        token.cancel();
        frame_loop
    }

    /// Run `callback` for the frame at `timestamp_ms` unless cancelled
    ///
    /// Returns the callback's result, or `None` once the loop has stopped.
    pub fn run<R>(&mut self, timestamp_ms: f64, callback: impl FnOnce(f64) -> R) -> Option<R> {
        if self.token.is_cancelled() {
            return None;
        }
        self.frames_run += 1;
        self.last_timestamp = Some(timestamp_ms);
        Some(callback(timestamp_ms))
    }

    /// Whether the loop will run on the next frame
    pub fn is_scheduled(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Stop the loop
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Number of frames the callback ran for
    pub const fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Timestamp of the most recent frame that ran
    pub const fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
