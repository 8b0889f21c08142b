//! Tile coordinate types and per-level grid enumeration
//!
//! Two grid conventions cover the map at a level: a centered grid with signed
//! coordinates spanning `-half..half`, and a corner-origin grid counting from
//! zero. Iteration is row-major: the outer axis is `x`, the inner `z`.

use crate::io::error::{Result, invalid_parameter};

/// Position of one tile within a level's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Horizontal position in level units (centered) or column index (corner)
    pub x: i64,
    /// Depth position in level units (centered) or row index (corner)
    pub z: i64,
}

/// Signed grid centered on the map origin
///
/// Coordinates run from `-half` to `half` (exclusive) in steps of the level's
/// tile extent, where `half` is the map's half-extent rounded up. The lowest
/// coordinate on each axis is therefore always exactly `-half`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredGrid {
    half: i64,
    stride: i64,
}

impl CenteredGrid {
    /// Build the grid covering `map_size` units with tiles `stride` units wide
    ///
    /// # Errors
    ///
    /// Returns an error if `stride` is zero (the grid would never advance) or
    /// if either extent does not fit signed coordinates.
    pub fn new(map_size: u64, stride: u64) -> Result<Self> {
        if stride == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &stride,
                &"a zero stride would never advance the grid",
            ));
        }

        let half = map_size.div_ceil(2);
        if half > i64::MAX as u64 {
            return Err(invalid_parameter(
                "map_size",
                &map_size,
                &"extent too large for signed tile coordinates",
            ));
        }
        if stride > i64::MAX as u64 {
            return Err(invalid_parameter(
                "tile_size",
                &stride,
                &"extent too large for signed tile coordinates",
            ));
        }

        Ok(Self {
            half: half as i64,
            stride: stride as i64,
        })
    }

    /// Half-extent of the map, rounded up
    pub const fn half(self) -> i64 {
        self.half
    }

    /// Distance between adjacent coordinates on an axis
    pub const fn stride(self) -> i64 {
        self.stride
    }

    /// Number of tiles along one axis: `ceil(2 * half / stride)`
    pub const fn tiles_per_axis(self) -> u64 {
        ((self.half as u64) * 2).div_ceil(self.stride as u64)
    }

    /// Total number of tiles in the grid, if the count fits a `u64`
    pub const fn total_tiles(self) -> Option<u64> {
        let per_axis = self.tiles_per_axis();
        per_axis.checked_mul(per_axis)
    }

    /// Coordinates along one axis, lowest first
    pub fn axis(self) -> impl Iterator<Item = i64> {
        (0..self.tiles_per_axis()).map(move |step| -self.half + (step as i64) * self.stride)
    }

    /// All coordinates of the grid in row-major order
    pub fn coords(self) -> impl Iterator<Item = TileCoord> {
        self.axis()
            .flat_map(move |x| self.axis().map(move |z| TileCoord { x, z }))
    }
}

/// Corner-origin grid counting tile indices from zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerGrid {
    across: u64,
}

impl CornerGrid {
    /// Build a square grid with `across` tiles along each axis
    pub const fn new(across: u64) -> Self {
        Self { across }
    }

    /// Number of tiles along one axis
    pub const fn tiles_per_axis(self) -> u64 {
        self.across
    }

    /// Total number of tiles in the grid, if the count fits a `u64`
    pub const fn total_tiles(self) -> Option<u64> {
        self.across.checked_mul(self.across)
    }

    /// All coordinates of the grid in row-major order
    pub fn coords(self) -> impl Iterator<Item = TileCoord> {
        (0..self.across).flat_map(move |x| {
            (0..self.across).map(move |z| TileCoord {
                x: x as i64,
                z: z as i64,
            })
        })
    }
}
