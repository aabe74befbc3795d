//! Input/output operations and error handling
//!
//! Everything that touches the filesystem, the terminal, or process
//! arguments lives here, keeping the composition core pure.

/// Command-line interface and run orchestration
pub mod cli;
/// Canonical sizes and naming defaults
pub mod configuration;
/// Error types for composition runs
pub mod error;
/// Image loading, resampling, and PNG output
pub mod image;
/// Label sanitization for generated filenames
pub mod naming;
/// Progress display for a generation run
pub mod progress;
