//! Pure composition pipeline from source images to named composites
//!
//! This module contains the filesystem-independent core:
//! - Quadrant positions and image bisection
//! - Enumeration of the twelve composite recipes
//! - Assembly of four tiles into one composite

/// Composite assembly from four corner tiles
pub mod assemble;
/// Quadrant positions and image bisection
pub mod quadrant;
/// Recipe enumeration for the twelve composite outputs
pub mod recipe;

pub use quadrant::{Quadrant, QuadrantSet};
pub use recipe::{Recipe, SourceId};
