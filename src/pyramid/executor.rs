//! Pyramid population: per-level grid enumeration and tile materialization

use crate::io::copy::{copy_preserving_times, ensure_dir, reset_output_root};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::sources::SourcePair;
use crate::pyramid::layout::Layout;
use crate::pyramid::levels;
use crate::spatial::grid::{CenteredGrid, CornerGrid, TileCoord};
use std::path::{Path, PathBuf};

/// Explicit parameters for one pyramid run
#[derive(Debug, Clone)]
pub struct PyramidConfig {
    /// Total map extent in abstract units
    pub map_size: u64,
    /// Extent of one tile at the base level, matching the source image extent
    pub tile_size: u64,
    /// Per-level tile extent growth factor for the centered layout
    /// (power of two, at least 2)
    pub scale: u64,
    /// Folder and filename convention
    pub layout: Layout,
    /// Override for the derived level count; levels always run from 0 to the
    /// count inclusive
    pub levels: Option<u32>,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            map_size: crate::io::configuration::DEFAULT_MAP_SIZE,
            tile_size: crate::io::configuration::DEFAULT_TILE_SIZE,
            scale: crate::io::configuration::DEFAULT_SCALE,
            layout: Layout::Centered,
            levels: None,
        }
    }
}

impl PyramidConfig {
    /// Reject parameter combinations the enumeration cannot handle
    ///
    /// A zero tile extent is the stride of the coordinate loops, so it would
    /// never terminate; it is rejected up front instead.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a zero map extent, a zero tile
    /// extent, or a growth factor that is not a power of two of at least 2.
    pub fn validate(&self) -> Result<()> {
        if self.map_size == 0 {
            return Err(invalid_parameter(
                "map_size",
                &self.map_size,
                &"map extent must be positive",
            ));
        }
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"tile extent must be positive",
            ));
        }
        if self.scale < 2 || !self.scale.is_power_of_two() {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"growth factor must be a power of two of at least 2",
            ));
        }
        Ok(())
    }

    /// Highest level index for this configuration
    ///
    /// Derived from the map/tile ratio unless overridden. The nested layout
    /// always halves per level, so its derivation uses base 2 regardless of
    /// the configured growth factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivation arithmetic overflows or a
    /// parameter is invalid.
    pub fn level_count(&self) -> Result<u32> {
        if let Some(levels) = self.levels {
            return Ok(levels);
        }
        match self.layout {
            Layout::Centered => levels::level_count(self.map_size, self.tile_size, self.scale),
            Layout::Nested => levels::level_count(self.map_size, self.tile_size, 2),
        }
    }
}

/// Result of materializing a single level
#[derive(Debug, Clone)]
pub struct LevelReport {
    /// Level index
    pub level: u32,
    /// Number of tiles written
    pub tiles_written: u64,
    /// Source image copied into every tile of this level
    pub source: PathBuf,
}

/// Result of a whole pyramid run
#[derive(Debug, Clone, Default)]
pub struct PyramidReport {
    /// Per-level reports, ordered by level
    pub levels: Vec<LevelReport>,
}

impl PyramidReport {
    /// Total tiles written across all levels
    pub fn total_tiles(&self) -> u64 {
        self.levels.iter().map(|level| level.tiles_written).sum()
    }
}

/// Enumerates tile grids level by level and materializes source copies
///
/// Owns a validated configuration, the output root, and the source pair.
/// Population is sequential and single-threaded; a failure mid-run leaves
/// the tree partially written.
pub struct PyramidExecutor {
    config: PyramidConfig,
    root: PathBuf,
    sources: SourcePair,
    level_count: u32,
}

impl PyramidExecutor {
    /// Validate the configuration and sources and fix the level count
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or either source
    /// image is missing.
    pub fn new(config: PyramidConfig, root: PathBuf, sources: SourcePair) -> Result<Self> {
        config.validate()?;
        sources.validate()?;
        let level_count = config.level_count()?;

        Ok(Self {
            config,
            root,
            sources,
            level_count,
        })
    }

    /// Highest level index of this run
    pub const fn level_count(&self) -> u32 {
        self.level_count
    }

    /// The validated configuration
    pub const fn config(&self) -> &PyramidConfig {
        &self.config
    }

    /// Output root the pyramid is written below
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of tiles a level will contain, for progress sizing
    ///
    /// # Errors
    ///
    /// Returns an error if the level geometry overflows.
    pub fn tiles_at_level(&self, level: u32) -> Result<u64> {
        let per_axis = self.tiles_per_axis(level)?;
        per_axis
            .checked_mul(per_axis)
            .ok_or_else(|| computation_error("tiles_at_level", &"tile count overflows"))
    }

    /// Delete and recreate the output root
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be removed or recreated.
    pub fn reset_root(&self) -> Result<()> {
        reset_output_root(&self.root)
    }

    /// Materialize every tile of one level
    ///
    /// `on_tile` observes the running count after each write, for progress
    /// display.
    ///
    /// # Errors
    ///
    /// Returns an error if the level geometry overflows or a directory or
    /// copy operation fails; tiles already written stay on disk.
    pub fn populate_level(&self, level: u32, on_tile: &mut dyn FnMut(u64)) -> Result<LevelReport> {
        let source = self.sources.for_level(level);

        let tiles_written = match self.config.layout {
            Layout::Centered => {
                let stride = levels::tile_extent(self.config.tile_size, self.config.scale, level)?;
                let grid = CenteredGrid::new(self.config.map_size, stride)?;
                self.write_tiles(level, source, grid.coords(), on_tile)?
            }
            Layout::Nested => {
                let across = levels::tiles_across(self.level_count, level, self.config.tile_size)?;
                let grid = CornerGrid::new(across);
                self.write_tiles(level, source, grid.coords(), on_tile)?
            }
        };

        Ok(LevelReport {
            level,
            tiles_written,
            source: source.to_path_buf(),
        })
    }

    /// Reset the root, then materialize levels 0 through `level_count`
    /// inclusive
    ///
    /// # Errors
    ///
    /// Returns the first level failure; earlier levels stay on disk.
    pub fn populate(&self) -> Result<PyramidReport> {
        self.reset_root()?;

        let mut report = PyramidReport::default();
        for level in 0..=self.level_count {
            report.levels.push(self.populate_level(level, &mut |_| {})?);
        }
        Ok(report)
    }

    fn tiles_per_axis(&self, level: u32) -> Result<u64> {
        match self.config.layout {
            Layout::Centered => {
                let stride = levels::tile_extent(self.config.tile_size, self.config.scale, level)?;
                Ok(CenteredGrid::new(self.config.map_size, stride)?.tiles_per_axis())
            }
            Layout::Nested => levels::tiles_across(self.level_count, level, self.config.tile_size),
        }
    }

    fn write_tiles(
        &self,
        level: u32,
        source: &Path,
        coords: impl Iterator<Item = TileCoord>,
        on_tile: &mut dyn FnMut(u64),
    ) -> Result<u64> {
        // Directories change at most once per column, so create lazily
        let mut ready_dir: Option<PathBuf> = None;
        let mut written = 0u64;

        for coord in coords {
            let dir = self.config.layout.tile_dir(&self.root, level, coord);
            if ready_dir.as_deref() != Some(dir.as_path()) {
                ensure_dir(&dir)?;
                ready_dir = Some(dir.clone());
            }

            let destination = dir.join(self.config.layout.tile_name(coord));
            copy_preserving_times(source, &destination)?;
            written += 1;
            on_tile(written);
        }

        Ok(written)
    }
}
