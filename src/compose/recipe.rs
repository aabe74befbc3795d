//! Recipe enumeration for the twelve composite outputs
//!
//! A recipe assigns one of the two source images to each quadrant position
//! and carries the filename stem derived from the source labels. The set of
//! recipes and their order are fixed: two vertical half splits, two
//! horizontal half splits, then the eight three-quarter blends.

use crate::compose::assemble::assemble_composite;
use crate::compose::quadrant::{Quadrant, QuadrantSet};
use crate::io::configuration::RECIPE_COUNT;
use crate::io::error::Result;
use image::RgbaImage;

/// Which of the two source images a tile is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceId {
    /// The first source image
    A,
    /// The second source image
    B,
}

impl SourceId {
    /// The opposite source
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A fixed assignment of a source image to each quadrant position, plus the
/// filename stem of the resulting composite
#[derive(Debug, Clone)]
pub struct Recipe {
    stem: String,
    top_left: SourceId,
    top_right: SourceId,
    bottom_left: SourceId,
    bottom_right: SourceId,
}

impl Recipe {
    /// Filename stem of the composite this recipe produces, without
    /// extension or downscale prefix
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Source image assigned to the given position
    pub const fn source(&self, quadrant: Quadrant) -> SourceId {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomLeft => self.bottom_left,
            Quadrant::BottomRight => self.bottom_right,
        }
    }

    /// Realize this recipe against the two source quadrant sets
    ///
    /// # Errors
    ///
    /// Returns [`crate::CompositionError::DimensionMismatch`] if a selected
    /// tile does not fit the region its position implies for the target
    /// dimensions.
    pub fn compose(
        &self,
        width: u32,
        height: u32,
        set_a: &QuadrantSet,
        set_b: &QuadrantSet,
    ) -> Result<RgbaImage> {
        let tile = |quadrant: Quadrant| match self.source(quadrant) {
            SourceId::A => set_a.tile(quadrant),
            SourceId::B => set_b.tile(quadrant),
        };

        assemble_composite(
            width,
            height,
            tile(Quadrant::TopLeft),
            tile(Quadrant::TopRight),
            tile(Quadrant::BottomLeft),
            tile(Quadrant::BottomRight),
        )
    }

    fn half_vertical(left: SourceId, left_name: &str, right_name: &str) -> Self {
        let right = left.other();
        Self {
            stem: format!("left-{left_name}-right-{right_name}"),
            top_left: left,
            top_right: right,
            bottom_left: left,
            bottom_right: right,
        }
    }

    fn half_horizontal(top: SourceId, top_name: &str, bottom_name: &str) -> Self {
        let bottom = top.other();
        Self {
            stem: format!("top-{top_name}-bottom-{bottom_name}"),
            top_left: top,
            top_right: top,
            bottom_left: bottom,
            bottom_right: bottom,
        }
    }

    fn three_quarter(major: SourceId, odd: Quadrant, major_name: &str, minor_name: &str) -> Self {
        let source_for = |position: Quadrant| {
            if position == odd {
                major.other()
            } else {
                major
            }
        };

        Self {
            stem: format!("threeparts-{major_name}-{}-{minor_name}", odd.label()),
            top_left: source_for(Quadrant::TopLeft),
            top_right: source_for(Quadrant::TopRight),
            bottom_left: source_for(Quadrant::BottomLeft),
            bottom_right: source_for(Quadrant::BottomRight),
        }
    }
}

/// Enumerate the twelve composite recipes for a pair of sanitized labels
///
/// Order is fixed: the two vertical half splits, the two horizontal half
/// splits, the four three-quarter blends majoring on `name_a`, then the four
/// majoring on `name_b`. Within each three-quarter group the odd position is
/// visited in canonical order.
pub fn enumerate_recipes(name_a: &str, name_b: &str) -> Vec<Recipe> {
    let mut recipes = Vec::with_capacity(RECIPE_COUNT);

    recipes.push(Recipe::half_vertical(SourceId::A, name_a, name_b));
    recipes.push(Recipe::half_vertical(SourceId::B, name_b, name_a));
    recipes.push(Recipe::half_horizontal(SourceId::A, name_a, name_b));
    recipes.push(Recipe::half_horizontal(SourceId::B, name_b, name_a));

    for (major, major_name, minor_name) in [
        (SourceId::A, name_a, name_b),
        (SourceId::B, name_b, name_a),
    ] {
        for odd in Quadrant::ALL {
            recipes.push(Recipe::three_quarter(major, odd, major_name, minor_name));
        }
    }

    recipes
}
