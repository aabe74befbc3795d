//! Quadrant recombination generator for 2D tile textures
//!
//! The system splits two equal-sized square images into four quadrants each
//! and recombines them into twelve fixed composites: vertical and horizontal
//! half splits plus every three-quarter/one-quarter blend, written as PNG
//! files named after the two source labels.

#![forbid(unsafe_code)]

/// Quadrant splitting, recipe enumeration, and composite assembly
pub mod compose;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{CompositionError, Result};
