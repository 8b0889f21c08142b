//! Pyramid level arithmetic, folder layouts, and population
//!
//! This module contains the pyramid-shaped half of the tool:
//! - Integer level and extent arithmetic
//! - Path derivation for the two folder layouts
//! - The executor enumerating grids and materializing tiles

/// Pyramid population orchestration and run reports
pub mod executor;
/// Output path derivation for the two folder layouts
pub mod layout;
/// Integer arithmetic for level counts and tile extents
pub mod levels;

pub use executor::{PyramidConfig, PyramidExecutor};
pub use layout::Layout;
