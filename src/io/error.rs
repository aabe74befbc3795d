//! Error types for composition runs

use crate::compose::quadrant::Quadrant;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all composition operations
#[derive(Debug)]
pub enum CompositionError {
    /// A required input image path is blank or does not point to a file
    InputMissing {
        /// Path that was expected to name a readable image file
        path: PathBuf,
    },

    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A tile's size does not match the region it is pasted into
    ///
    /// The splitter and composer agree on tile geometry, so this indicates
    /// an internal invariant violation; it is checked before every paste.
    DimensionMismatch {
        /// Position whose tile was rejected
        quadrant: Quadrant,
        /// Width and height the target region requires
        expected: (u32, u32),
        /// Width and height of the supplied tile
        actual: (u32, u32),
    },

    /// Failed to encode or save a composite to disk
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMissing { path } => {
                write!(
                    f,
                    "Input image '{}' is missing or not a file",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DimensionMismatch {
                quadrant,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Tile for {} is {}x{} but its target region is {}x{}",
                    quadrant.label(),
                    actual.0,
                    actual.1,
                    expected.0,
                    expected.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export composite to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CompositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InputMissing { .. } | Self::DimensionMismatch { .. } => None,
        }
    }
}

/// Convenience type alias for composition results
pub type Result<T> = std::result::Result<T, CompositionError>;
