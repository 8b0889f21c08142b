//! Tests for centered and corner-origin grid enumeration

#[cfg(test)]
mod tests {

    use tilefixture::spatial::grid::{CenteredGrid, CornerGrid, TileCoord};

    #[test]
    fn test_centered_axis_matches_worked_example() {
        // map 100, tile 30: half = 50, coordinates every 30 units from -50
        let grid = CenteredGrid::new(100, 30).unwrap();
        let axis: Vec<i64> = grid.axis().collect();
        assert_eq!(axis, vec![-50, -20, 10, 40]);
    }

    #[test]
    fn test_centered_axis_count_equals_ceiling_for_even_maps() {
        for (map_size, stride, expected) in [(100, 30, 4), (64, 64, 1), (2_048, 256, 8)] {
            let grid = CenteredGrid::new(map_size, stride).unwrap();
            assert_eq!(grid.tiles_per_axis(), expected);
            assert_eq!(expected, map_size.div_ceil(stride));
        }
    }

    #[test]
    fn test_centered_single_tile_starts_at_negative_half() {
        let grid = CenteredGrid::new(64, 128).unwrap();
        let coords: Vec<TileCoord> = grid.coords().collect();
        assert_eq!(coords, vec![TileCoord { x: -32, z: -32 }]);
    }

    #[test]
    fn test_centered_rejects_zero_stride() {
        assert!(CenteredGrid::new(100, 0).is_err());
    }

    #[test]
    fn test_centered_coords_are_row_major() {
        let grid = CenteredGrid::new(4, 2).unwrap();
        let coords: Vec<TileCoord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                TileCoord { x: -2, z: -2 },
                TileCoord { x: -2, z: 0 },
                TileCoord { x: 0, z: -2 },
                TileCoord { x: 0, z: 0 },
            ]
        );
    }

    #[test]
    fn test_centered_total_tiles_squares_the_axis() {
        let grid = CenteredGrid::new(100, 30).unwrap();
        assert_eq!(grid.total_tiles(), Some(16));
    }

    #[test]
    fn test_corner_coords_count_from_zero_row_major() {
        let grid = CornerGrid::new(2);
        let coords: Vec<TileCoord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                TileCoord { x: 0, z: 0 },
                TileCoord { x: 0, z: 1 },
                TileCoord { x: 1, z: 0 },
                TileCoord { x: 1, z: 1 },
            ]
        );
    }

    #[test]
    fn test_corner_grid_totals() {
        assert_eq!(CornerGrid::new(8).tiles_per_axis(), 8);
        assert_eq!(CornerGrid::new(8).total_tiles(), Some(64));
        assert_eq!(CornerGrid::new(0).coords().count(), 0);
    }
}
