//! Progress display for level-by-level pyramid population

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Levels: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a pyramid run
///
/// Shows a batch bar across levels plus a second bar tracking tile writes
/// within the level currently being populated.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    level_bar: Option<ProgressBar>,
    tile_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no bars configured yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            level_bar: None,
            tile_bar: None,
        }
    }

    /// Create the bars for a run covering `level_count` levels
    pub fn initialize(&mut self, level_count: u64) {
        let level_bar = ProgressBar::new(level_count);
        level_bar.set_style(LEVEL_STYLE.clone());
        self.level_bar = Some(self.multi_progress.add(level_bar));

        let tile_bar = ProgressBar::new(0);
        tile_bar.set_style(TILE_STYLE.clone());
        self.tile_bar = Some(self.multi_progress.add(tile_bar));
    }

    /// Configure the tile bar for a new level
    pub fn start_level(&self, level: u32, tile_count: u64) {
        if let Some(ref bar) = self.tile_bar {
            bar.set_length(tile_count);
            bar.set_position(0);
            bar.set_prefix(format!("level {level}"));
            bar.set_message(format!("0/{tile_count}"));
        }
    }

    /// Report tiles written so far within the current level
    pub fn update_tiles(&self, written: u64) {
        if let Some(ref bar) = self.tile_bar {
            bar.set_position(written);
            let total = bar.length().unwrap_or(0);
            let max_width = total.to_string().len();
            bar.set_message(format!("{written:>max_width$}/{total}"));
        }
    }

    /// Mark the current level as completed and advance the batch bar
    pub fn complete_level(&self) {
        if let Some(ref bar) = self.level_bar {
            bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.level_bar {
            bar.finish_with_message("All levels populated");
        }
        let _ = self.multi_progress.clear();
    }
}
