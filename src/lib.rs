//! Placeholder tile pyramid generation for test fixtures
//!
//! Computes how many tiles cover a map at each zoom level given a total map
//! extent and a base tile extent, then copies fixed source images into every
//! tile slot, naming files by coordinate. Tiles are verbatim copies; nothing
//! is resized or resampled.

#![forbid(unsafe_code)]

/// Input/output operations, CLI, and error handling
pub mod io;
/// Pyramid level arithmetic, folder layouts, and population
pub mod pyramid;
/// Spatial grid enumeration and tile coordinates
pub mod spatial;

pub use io::error::{FixtureError, Result};
