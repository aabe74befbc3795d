//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use quadtile::io::configuration::{
        CANONICAL_SIZE, DOWNSCALE_SIZE, FALLBACK_LABEL_A, FALLBACK_LABEL_B, RECIPE_COUNT,
    };
    use quadtile::io::naming::sanitize_label;

    // Tests the canonical size splits into equal quadrants
    // Verified by changing to an odd size
    #[test]
    fn test_canonical_size_is_even() {
        assert_eq!(CANONICAL_SIZE, 1024);
        assert_eq!(CANONICAL_SIZE % 2, 0);
    }

    // Tests the downscaled output stays below the canonical size
    // Verified by inverting the relationship
    #[test]
    fn test_downscale_size_is_smaller() {
        assert_eq!(DOWNSCALE_SIZE, 100);
        assert!(DOWNSCALE_SIZE < CANONICAL_SIZE);
    }

    // Tests the fixed output count
    // Verified by changing the recipe count
    #[test]
    fn test_recipe_count() {
        assert_eq!(RECIPE_COUNT, 12);
    }

    // Tests fallback labels are already in sanitized form
    // Verified by adding an uppercase character to a fallback
    #[test]
    fn test_fallback_labels_are_sanitized() {
        assert_eq!(sanitize_label(FALLBACK_LABEL_A, "x"), FALLBACK_LABEL_A);
        assert_eq!(sanitize_label(FALLBACK_LABEL_B, "x"), FALLBACK_LABEL_B);
        assert_ne!(FALLBACK_LABEL_A, FALLBACK_LABEL_B);
    }
}
