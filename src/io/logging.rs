//! Tracing subscriber setup for the binary

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "photodrift=info";

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Quiet mode lowers the default to warnings. Installing twice is a no-op.
pub fn init(quiet: bool) {
    let fallback = if quiet { "photodrift=warn" } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
