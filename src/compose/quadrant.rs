//! Quadrant positions and image bisection

use image::RgbaImage;
use image::imageops;

/// One of the four rectangular regions obtained by bisecting a square image
/// along both midlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left region
    TopLeft,
    /// Upper-right region
    TopRight,
    /// Lower-left region
    BottomLeft,
    /// Lower-right region
    BottomRight,
}

impl Quadrant {
    /// All positions in canonical visiting order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position label substituted into generated filenames
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }

    /// Pixel offset of this quadrant's upper-left corner within a
    /// `width` x `height` image
    pub const fn origin(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (width / 2, 0),
            Self::BottomLeft => (0, height / 2),
            Self::BottomRight => (width / 2, height / 2),
        }
    }

    /// Pixel dimensions of this quadrant within a `width` x `height` image
    ///
    /// Midlines are floor-divided, so for odd sizes the right column and
    /// bottom row of quadrants absorb the extra pixels and the four regions
    /// still tile the image exactly.
    pub const fn tile_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        let left = width / 2;
        let top = height / 2;
        let right = width - left;
        let bottom = height - top;
        match self {
            Self::TopLeft => (left, top),
            Self::TopRight => (right, top),
            Self::BottomLeft => (left, bottom),
            Self::BottomRight => (right, bottom),
        }
    }
}

/// The four tiles produced by bisecting one source image
///
/// Tiles are owned copies; the source image can be dropped after splitting.
pub struct QuadrantSet {
    top_left: RgbaImage,
    top_right: RgbaImage,
    bottom_left: RgbaImage,
    bottom_right: RgbaImage,
}

impl QuadrantSet {
    /// Split a source image into its four quadrant tiles
    pub fn split(source: &RgbaImage) -> Self {
        let (width, height) = source.dimensions();
        let crop = |quadrant: Quadrant| {
            let (x, y) = quadrant.origin(width, height);
            let (tile_width, tile_height) = quadrant.tile_dimensions(width, height);
            imageops::crop_imm(source, x, y, tile_width, tile_height).to_image()
        };

        Self {
            top_left: crop(Quadrant::TopLeft),
            top_right: crop(Quadrant::TopRight),
            bottom_left: crop(Quadrant::BottomLeft),
            bottom_right: crop(Quadrant::BottomRight),
        }
    }

    /// Borrow the tile cropped from the given position
    pub const fn tile(&self, quadrant: Quadrant) -> &RgbaImage {
        match quadrant {
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
        }
    }
}
