//! Canonical sizes and naming defaults

/// Square resolution all source images are normalized to before splitting
pub const CANONICAL_SIZE: u32 = 1024;

/// Reduced square resolution applied when downscaled output is requested
pub const DOWNSCALE_SIZE: u32 = 100;

/// Number of composites produced per run
pub const RECIPE_COUNT: usize = 12;

/// Label used when the first image's sanitized name is empty
pub const FALLBACK_LABEL_A: &str = "imga";

/// Label used when the second image's sanitized name is empty
pub const FALLBACK_LABEL_B: &str = "imgb";
