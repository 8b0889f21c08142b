//! Integer arithmetic for level counts and per-level tile extents
//!
//! All level geometry derives from two extents: the total map and the base
//! tile. Logarithms are computed by repeated multiplication so the results
//! stay exact and overflow is caught instead of wrapping.

use crate::io::error::{Result, computation_error, invalid_parameter};

/// Smallest exponent `n` such that `base^n >= ratio`
///
/// Integer replacement for `ceil(log_base(ratio))`. A ratio of zero or one
/// needs no levels above the base, so the result is zero.
///
/// # Errors
///
/// Returns an error if `base` is below 2 or the running power overflows
/// before reaching `ratio`.
pub fn ceil_log(ratio: u64, base: u64) -> Result<u32> {
    if base < 2 {
        return Err(invalid_parameter(
            "scale",
            &base,
            &"growth factor must be at least 2",
        ));
    }

    let mut exponent = 0u32;
    let mut reach = 1u64;
    while reach < ratio {
        reach = reach
            .checked_mul(base)
            .ok_or_else(|| computation_error("ceil_log", &format!("{base}^{exponent} overflows")))?;
        exponent += 1;
    }
    Ok(exponent)
}

/// Highest level index for a map covered by tiles growing by `scale` per level
///
/// `ceil(log_scale(ceil(map_size / tile_size)))`; levels run from 0 to this
/// value inclusive, so the apex holds a single tile.
///
/// # Errors
///
/// Returns an error if `tile_size` is zero, `scale` is below 2, or the ratio
/// computation overflows.
pub fn level_count(map_size: u64, tile_size: u64, scale: u64) -> Result<u32> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile extent must be positive",
        ));
    }
    ceil_log(map_size.div_ceil(tile_size), scale)
}

/// Tile extent at `level` for the centered layout: `tile_size * scale^level`
///
/// # Errors
///
/// Returns an error if the extent overflows a `u64`.
pub fn tile_extent(tile_size: u64, scale: u64, level: u32) -> Result<u64> {
    let factor = scale
        .checked_pow(level)
        .ok_or_else(|| computation_error("tile_extent", &format!("{scale}^{level} overflows")))?;
    tile_size.checked_mul(factor).ok_or_else(|| {
        computation_error(
            "tile_extent",
            &format!("{tile_size} * {scale}^{level} overflows"),
        )
    })
}

/// Tiles per axis at `level` of a nested pyramid with `levels` levels
///
/// `pixels_across = tile_size * 2^(levels - level)` and the count is
/// `ceil(pixels_across / tile_size)`, which halves with each level until the
/// apex holds one tile.
///
/// # Errors
///
/// Returns an error if `level` exceeds `levels`, `tile_size` is zero, or the
/// pixel extent overflows.
pub fn tiles_across(levels: u32, level: u32, tile_size: u64) -> Result<u64> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile extent must be positive",
        ));
    }
    let depth = levels.checked_sub(level).ok_or_else(|| {
        invalid_parameter("level", &level, &format!("exceeds level count {levels}"))
    })?;

    let spread = 2u64
        .checked_pow(depth)
        .ok_or_else(|| computation_error("tiles_across", &format!("2^{depth} overflows")))?;
    let pixels_across = tile_size.checked_mul(spread).ok_or_else(|| {
        computation_error("tiles_across", &format!("{tile_size} * 2^{depth} overflows"))
    })?;

    Ok(pixels_across.div_ceil(tile_size))
}
