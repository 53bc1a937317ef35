//! Wall-clock interval timer driven by host timestamps

use crate::schedule::cancel::CancelToken;

/// Fires once every `period_ms` until cancelled
#[derive(Debug)]
pub struct IntervalTimer {
    period_ms: f64,
    next_due_ms: f64,
    token: CancelToken,
}

impl IntervalTimer {
    /// Start a timer whose first tick is one period after `now_ms`
    pub fn start(period_ms: f64, now_ms: f64) -> (Self, CancelToken) {
        let token = CancelToken::new();
        let timer = Self {
            period_ms,
            next_due_ms: now_ms + period_ms,
            token: token.clone(),
        };
        (timer, token)
    }

    /// Timer that never fires
    pub fn idle() -> Self {
        let (timer, token) = Self::start(f64::INFINITY, 0.0);
        token.cancel();
        timer
    }

    /// Whether a tick became due by `now_ms`
    ///
    /// Missed ticks are coalesced into one: after a late poll the next tick
    /// is the first period boundary strictly after `now_ms`. Non-finite
    /// timestamps never fire.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.token.is_cancelled()
            || !self.period_ms.is_finite()
            || self.period_ms <= 0.0
            || !now_ms.is_finite()
            || self.next_due_ms > now_ms
        {
            return false;
        }
        let missed = ((now_ms - self.next_due_ms) / self.period_ms).floor() + 1.0;
        self.next_due_ms = missed.mul_add(self.period_ms, self.next_due_ms);
        if self.next_due_ms <= now_ms {
            self.next_due_ms += self.period_ms;
        }
        true
    }

    /// Whether the timer can still fire
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Stop the timer
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Timestamp of the next tick
    pub const fn next_due_ms(&self) -> f64 {
        self.next_due_ms
    }
}
