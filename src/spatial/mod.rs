//! Spatial types for tile grids
//!
//! This module contains coordinate-related functionality:
//! - Tile coordinate representation
//! - Centered and corner-origin grid enumeration

/// Tile coordinates and per-level grid enumeration
pub mod grid;

pub use grid::TileCoord;
