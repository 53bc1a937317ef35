//! Rate and change limiting for offset commits

use crate::interaction::repulsion::OffsetField;

/// Decides which recomputed offset fields become visible
///
/// A field is committed only when more than `interval_ms` passed since the
/// previous commit and at least one slot moved more than `epsilon_px`.
#[derive(Clone, Debug)]
pub struct CommitThrottle {
    interval_ms: f64,
    epsilon_px: f64,
    last_commit_ms: Option<f64>,
    committed: OffsetField,
    commits: u64,
    skipped_unchanged: u64,
}

impl CommitThrottle {
    /// Throttle for `slots` slots, starting from all-zero committed offsets
    pub fn new(slots: usize, interval_ms: f64, epsilon_px: f64) -> Self {
        Self {
            interval_ms,
            epsilon_px,
            last_commit_ms: None,
            committed: OffsetField::zeros(slots),
            commits: 0,
            skipped_unchanged: 0,
        }
    }

    /// Offer a freshly computed field at `timestamp_ms`
    ///
    /// Returns the committed field when the offer was accepted.
    pub fn offer(&mut self, timestamp_ms: f64, field: OffsetField) -> Option<&OffsetField> {
        if let Some(last) = self.last_commit_ms {
            if timestamp_ms - last <= self.interval_ms {
                return None;
            }
        }
        if field.max_change(&self.committed) <= self.epsilon_px {
            self.skipped_unchanged += 1;
            return None;
        }
        self.last_commit_ms = Some(timestamp_ms);
        self.committed = field;
        self.commits += 1;
        Some(&self.committed)
    }

    /// Offsets currently visible
    pub const fn committed(&self) -> &OffsetField {
        &self.committed
    }

    /// Number of accepted offers
    pub const fn commits(&self) -> u64 {
        self.commits
    }

    /// Number of offers dropped because nothing moved enough
    pub const fn skipped_unchanged(&self) -> u64 {
        self.skipped_unchanged
    }
}
