//! Composite assembly from four corner tiles

use crate::compose::quadrant::Quadrant;
use crate::io::error::{CompositionError, Result};
use image::RgbaImage;
use image::imageops;

/// Assemble a `width` x `height` composite by pasting one tile at each
/// canonical corner
///
/// Tiles are pasted edge to edge with no blending, leaving a hard seam along
/// both midlines. The inputs are not modified; the composite is a fresh
/// buffer.
///
/// # Errors
///
/// Returns [`CompositionError::DimensionMismatch`] if any tile's size does
/// not match the region its position implies for the target dimensions.
pub fn assemble_composite(
    width: u32,
    height: u32,
    top_left: &RgbaImage,
    top_right: &RgbaImage,
    bottom_left: &RgbaImage,
    bottom_right: &RgbaImage,
) -> Result<RgbaImage> {
    let placements = [
        (Quadrant::TopLeft, top_left),
        (Quadrant::TopRight, top_right),
        (Quadrant::BottomLeft, bottom_left),
        (Quadrant::BottomRight, bottom_right),
    ];

    let mut composite = RgbaImage::new(width, height);
    for (quadrant, tile) in placements {
        let expected = quadrant.tile_dimensions(width, height);
        if tile.dimensions() != expected {
            return Err(CompositionError::DimensionMismatch {
                quadrant,
                expected,
                actual: tile.dimensions(),
            });
        }

        let (x, y) = quadrant.origin(width, height);
        imageops::replace(&mut composite, tile, i64::from(x), i64::from(y));
    }

    Ok(composite)
}
