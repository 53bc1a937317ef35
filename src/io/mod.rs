//! Input/output operations, configuration and error handling

/// Local photo directory listing
pub mod catalog;
/// Command-line interface and simulation runner
pub mod cli;
/// Constants and runtime settings
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Simulation progress display
pub mod progress;
/// Snapshot and animation export
pub mod render;
