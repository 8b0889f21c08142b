//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {

    use std::error::Error;
    use std::path::{Path, PathBuf};
    use tilefixture::io::error::{FixtureError, computation_error, fs_error, invalid_parameter};

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("scale", &3, &"growth factor must be a power of two");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'scale' = '3': growth factor must be a power of two"
        );
    }

    #[test]
    fn test_missing_source_display_names_the_path() {
        let err = FixtureError::MissingSource {
            path: PathBuf::from("tile_primary.png"),
        };
        assert_eq!(err.to_string(), "Source image not found: 'tile_primary.png'");
    }

    #[test]
    fn test_computation_error_display() {
        let err = computation_error("tile_extent", &"4^40 overflows");
        assert_eq!(
            err.to_string(),
            "Computation error in tile_extent: 4^40 overflows"
        );
    }

    #[test]
    fn test_file_system_error_chains_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = fs_error("copy file", Path::new("test_images"), io);

        assert!(err.to_string().contains("copy file"));
        assert!(err.to_string().contains("test_images"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parameter_errors_have_no_source() {
        let err = invalid_parameter("map_size", &0, &"map extent must be positive");
        assert!(err.source().is_none());
    }
}
