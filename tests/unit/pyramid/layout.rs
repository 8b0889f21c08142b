//! Tests for output path derivation of both folder layouts

#[cfg(test)]
mod tests {

    use std::path::{Path, PathBuf};
    use tilefixture::pyramid::layout::Layout;
    use tilefixture::spatial::grid::TileCoord;

    #[test]
    fn test_centered_layout_shares_one_directory_per_level() {
        let root = Path::new("test_images");
        let near = TileCoord { x: -50, z: 10 };
        let far = TileCoord { x: 40, z: -20 };

        assert_eq!(
            Layout::Centered.tile_dir(root, 2, near),
            PathBuf::from("test_images/level_2")
        );
        assert_eq!(
            Layout::Centered.tile_dir(root, 2, far),
            Layout::Centered.tile_dir(root, 2, near)
        );
    }

    #[test]
    fn test_centered_names_encode_signed_coordinates() {
        let coord = TileCoord { x: -50, z: 40 };
        assert_eq!(Layout::Centered.tile_name(coord), "-50_40.png");
    }

    #[test]
    fn test_centered_path_joins_directory_and_name() {
        let root = Path::new("test_images");
        let coord = TileCoord { x: 10, z: -20 };
        assert_eq!(
            Layout::Centered.tile_path(root, 0, coord),
            PathBuf::from("test_images/level_0/10_-20.png")
        );
    }

    #[test]
    fn test_nested_layout_nests_level_then_column() {
        let root = Path::new("test_images");
        let coord = TileCoord { x: 3, z: 5 };
        assert_eq!(
            Layout::Nested.tile_dir(root, 1, coord),
            PathBuf::from("test_images/1/3")
        );
    }

    #[test]
    fn test_nested_names_negate_the_row() {
        assert_eq!(Layout::Nested.tile_name(TileCoord { x: 3, z: 5 }), "-5.png");
        assert_eq!(Layout::Nested.tile_name(TileCoord { x: 3, z: 0 }), "0.png");
    }

    #[test]
    fn test_layout_paths_never_collide_across_conventions() {
        let root = Path::new("test_images");
        let coord = TileCoord { x: 0, z: 0 };
        assert_ne!(
            Layout::Centered.tile_path(root, 0, coord),
            Layout::Nested.tile_path(root, 0, coord)
        );
    }
}
