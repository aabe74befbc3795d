//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use quadtile::CompositionError;
    use quadtile::compose::quadrant::Quadrant;
    use std::error::Error;
    use std::path::PathBuf;

    fn decode_error() -> image::ImageError {
        image::load_from_memory(&[0, 1, 2, 3]).expect_err("garbage bytes should not decode")
    }

    // Tests the missing-input message names the offending path
    // Verified by removing the path from the message
    #[test]
    fn test_input_missing_display() {
        let error = CompositionError::InputMissing {
            path: PathBuf::from("missing/terra.png"),
        };

        let message = error.to_string();
        assert!(message.contains("missing/terra.png"));
        assert!(message.contains("missing or not a file"));
    }

    // Tests the load failure message carries path and cause
    // Verified by dropping the source from the message
    #[test]
    fn test_image_load_display_and_source() {
        let error = CompositionError::ImageLoad {
            path: PathBuf::from("bad.png"),
            source: decode_error(),
        };

        assert!(error.to_string().contains("bad.png"));
        assert!(error.source().is_some());
    }

    // Tests the mismatch message reports both sizes and the position
    // Verified by swapping expected and actual in the message
    #[test]
    fn test_dimension_mismatch_display() {
        let error = CompositionError::DimensionMismatch {
            quadrant: Quadrant::BottomRight,
            expected: (512, 512),
            actual: (500, 512),
        };

        let message = error.to_string();
        assert!(message.contains("bottomright"));
        assert!(message.contains("500x512"));
        assert!(message.contains("512x512"));
        assert!(error.source().is_none());
    }

    // Tests the export failure message carries the target path
    // Verified by removing the path from the message
    #[test]
    fn test_image_export_display_and_source() {
        let error = CompositionError::ImageExport {
            path: PathBuf::from("out/left-a-right-b.png"),
            source: decode_error(),
        };

        assert!(error.to_string().contains("out/left-a-right-b.png"));
        assert!(error.source().is_some());
    }

    // Tests the filesystem message names the failed operation
    // Verified by dropping the operation from the message
    #[test]
    fn test_file_system_display_and_source() {
        let error = CompositionError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create output directory",
            source: std::io::Error::other("disk full"),
        };

        let message = error.to_string();
        assert!(message.contains("create output directory"));
        assert!(message.contains("out"));
        assert!(error.source().is_some());
    }
}
