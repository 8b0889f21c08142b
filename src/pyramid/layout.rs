//! Output path derivation for the two pyramid folder layouts

use crate::io::configuration::TILE_EXTENSION;
use crate::spatial::grid::TileCoord;
use std::path::{Path, PathBuf};

/// Folder and filename convention for materialized tiles
///
/// The two conventions originate as independent fixture experiments and stay
/// separate: paths from one never collide with paths from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One folder per level with signed, centered coordinates:
    /// `level_<n>/<x>_<z>.png`
    Centered,
    /// Corner-origin coordinates nested one folder per column, filename
    /// negating the row: `<n>/<x>/<-z>.png`
    Nested,
}

impl Layout {
    /// Directory containing the given tile
    ///
    /// The centered layout shares one directory per level, so `coord` only
    /// affects the nested layout's per-column folder.
    pub fn tile_dir(self, root: &Path, level: u32, coord: TileCoord) -> PathBuf {
        match self {
            Self::Centered => root.join(format!("level_{level}")),
            Self::Nested => root.join(level.to_string()).join(coord.x.to_string()),
        }
    }

    /// Filename for the given tile within its directory
    pub fn tile_name(self, coord: TileCoord) -> String {
        match self {
            Self::Centered => format!("{}_{}.{TILE_EXTENSION}", coord.x, coord.z),
            Self::Nested => format!("{}.{TILE_EXTENSION}", -coord.z),
        }
    }

    /// Full path of the given tile below `root`
    pub fn tile_path(self, root: &Path, level: u32, coord: TileCoord) -> PathBuf {
        self.tile_dir(root, level, coord).join(self.tile_name(coord))
    }
}
