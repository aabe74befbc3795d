//! Image loading, resampling, and PNG output

use crate::io::configuration::{CANONICAL_SIZE, DOWNSCALE_SIZE};
use crate::io::error::{CompositionError, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Load an image and normalize it to the canonical square resolution
///
/// Decodes any format the `image` crate supports and converts to RGBA. When
/// the decoded size differs from [`CANONICAL_SIZE`] the image is resampled
/// with Lanczos3 to exactly that size.
///
/// # Errors
///
/// Returns [`CompositionError::ImageLoad`] if the file cannot be read or its
/// bytes cannot be decoded as an image.
pub fn load_canonical(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|source| CompositionError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();

    if rgba.dimensions() == (CANONICAL_SIZE, CANONICAL_SIZE) {
        return Ok(rgba);
    }

    Ok(imageops::resize(
        &rgba,
        CANONICAL_SIZE,
        CANONICAL_SIZE,
        FilterType::Lanczos3,
    ))
}

/// Downscale a composite to the reduced output resolution
///
/// Lanczos3 keeps texture detail smooth at the small size.
pub fn downscale(composite: &RgbaImage) -> RgbaImage {
    imageops::resize(
        composite,
        DOWNSCALE_SIZE,
        DOWNSCALE_SIZE,
        FilterType::Lanczos3,
    )
}

/// Write a composite to disk as a PNG file
///
/// # Errors
///
/// Returns [`CompositionError::ImageExport`] if the image cannot be encoded
/// or written to the given path.
pub fn save_png(composite: &RgbaImage, path: &Path) -> Result<()> {
    composite
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CompositionError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
