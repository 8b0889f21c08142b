//! Source image pairing, parity selection, and placeholder synthesis
//!
//! Every tile is a verbatim copy of one of two fixed source images: even
//! levels use the primary, odd levels the alternate. When synthesis is
//! requested, absent sources are replaced by small generated PNGs so a run
//! can start from an empty working directory. Synthesis is the only image
//! encoding in the tool; tile materialization is always a byte copy.

use crate::io::configuration::{
    PLACEHOLDER_ALTERNATE_RGBA, PLACEHOLDER_CELL, PLACEHOLDER_DARK_RGBA, PLACEHOLDER_EXTENT,
    PLACEHOLDER_LIGHT_RGBA,
};
use crate::io::error::{FixtureError, Result, fs_error};
use image::{ImageBuffer, Rgba};
use std::path::{Path, PathBuf};

/// The pair of fixed source images tiles are copied from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePair {
    primary: PathBuf,
    alternate: PathBuf,
}

impl SourcePair {
    /// Pair a primary (even levels) and alternate (odd levels) source
    pub const fn new(primary: PathBuf, alternate: PathBuf) -> Self {
        Self { primary, alternate }
    }

    /// Path of the primary source
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Path of the alternate source
    pub fn alternate(&self) -> &Path {
        &self.alternate
    }

    /// Source image for a level, alternating by level parity
    pub fn for_level(&self, level: u32) -> &Path {
        if level.is_multiple_of(2) {
            &self.primary
        } else {
            &self.alternate
        }
    }

    /// Verify both source files exist
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::MissingSource`] naming the first absent path.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.primary, &self.alternate] {
            if !path.is_file() {
                return Err(FixtureError::MissingSource { path: path.clone() });
            }
        }
        Ok(())
    }

    /// Write placeholder images for any source that does not exist yet
    ///
    /// The primary gets a checkerboard, the alternate a solid fill, so the
    /// two are distinguishable in generated trees. Returns the paths that
    /// were synthesized.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be encoded or written.
    pub fn synthesize_missing(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if !self.primary.exists() {
            write_checkerboard(&self.primary)?;
            written.push(self.primary.clone());
        }
        if !self.alternate.exists() {
            write_solid(&self.alternate, PLACEHOLDER_ALTERNATE_RGBA)?;
            written.push(self.alternate.clone());
        }

        Ok(written)
    }
}

fn write_checkerboard(path: &Path) -> Result<()> {
    let img = ImageBuffer::from_fn(PLACEHOLDER_EXTENT, PLACEHOLDER_EXTENT, |x, y| {
        let cell = (x / PLACEHOLDER_CELL) + (y / PLACEHOLDER_CELL);
        if cell.is_multiple_of(2) {
            Rgba(PLACEHOLDER_LIGHT_RGBA)
        } else {
            Rgba(PLACEHOLDER_DARK_RGBA)
        }
    });
    save_placeholder(&img, path)
}

fn write_solid(path: &Path, rgba: [u8; 4]) -> Result<()> {
    let img = ImageBuffer::from_pixel(PLACEHOLDER_EXTENT, PLACEHOLDER_EXTENT, Rgba(rgba));
    save_placeholder(&img, path)
}

fn save_placeholder(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| fs_error("create directory", parent, e))?;
        }
    }

    img.save(path).map_err(|e| FixtureError::ImageEncode {
        path: path.to_path_buf(),
        source: e,
    })
}
