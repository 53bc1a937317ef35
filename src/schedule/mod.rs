//! Single-threaded scheduling primitives with explicit cancellation

/// Shared cancellation flag
pub mod cancel;
/// Self-rescheduling per-frame callback
pub mod frame;
/// Interval timer polled with host timestamps
pub mod interval;

pub use cancel::CancelToken;
pub use frame::FrameLoop;
pub use interval::IntervalTimer;
