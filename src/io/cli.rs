//! Command-line interface for generating placeholder tile pyramids

use crate::io::configuration::{
    ALTERNATE_SOURCE_NAME, DEFAULT_MAP_SIZE, DEFAULT_OUTPUT_ROOT, DEFAULT_SCALE, DEFAULT_TILE_SIZE,
    PRIMARY_SOURCE_NAME,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::sources::SourcePair;
use crate::pyramid::executor::{PyramidConfig, PyramidExecutor, PyramidReport};
use crate::pyramid::layout::Layout;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Folder layout conventions exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutChoice {
    /// Signed coordinates centered on the map origin, one folder per level
    Centered,
    /// Corner-origin coordinates nested one folder per column
    Nested,
}

impl From<LayoutChoice> for Layout {
    fn from(choice: LayoutChoice) -> Self {
        match choice {
            LayoutChoice::Centered => Self::Centered,
            LayoutChoice::Nested => Self::Nested,
        }
    }
}

#[derive(Parser)]
#[command(name = "tilefixture")]
#[command(
    author,
    version,
    about = "Generate placeholder tile pyramids for test fixtures"
)]
/// Command-line arguments for the fixture generation tool
pub struct Cli {
    /// Output root directory (deleted and recreated on every run)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Total map extent in abstract units
    #[arg(short = 'M', long, default_value_t = DEFAULT_MAP_SIZE)]
    pub map_size: u64,

    /// Base tile extent in the same units, matching the source image extent
    #[arg(short = 't', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u64,

    /// Per-level tile extent growth factor (power of two)
    #[arg(short = 's', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u64,

    /// Folder layout convention
    #[arg(short = 'l', long, value_enum, default_value = "centered")]
    pub layout: LayoutChoice,

    /// Override the derived level count (levels run from 0 to this value
    /// inclusive)
    #[arg(short = 'L', long)]
    pub levels: Option<u32>,

    /// Source image copied into even levels
    #[arg(short = 'p', long, default_value = PRIMARY_SOURCE_NAME)]
    pub primary: PathBuf,

    /// Source image copied into odd levels
    #[arg(short = 'a', long, default_value = ALTERNATE_SOURCE_NAME)]
    pub alternate: PathBuf,

    /// Synthesize placeholder sources for any that are missing
    #[arg(short = 'g', long)]
    pub synthesize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the pyramid configuration described by these arguments
    pub fn pyramid_config(&self) -> PyramidConfig {
        PyramidConfig {
            map_size: self.map_size,
            tile_size: self.tile_size,
            scale: self.scale,
            layout: self.layout.into(),
            levels: self.levels,
        }
    }

    /// Parse arguments from an explicit iterator
    ///
    /// # Errors
    ///
    /// Returns a clap error when the arguments do not match the interface.
    pub fn try_from_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

/// Orchestrates a full fixture-generation run with progress tracking
pub struct FixtureProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FixtureProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run fixture generation according to the CLI arguments
    ///
    /// Resolves (and optionally synthesizes) the source pair, resets the
    /// output root, then populates every level with progress display.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, source resolution, or any filesystem
    /// operation fails.
    // Allow print for user feedback on synthesized sources
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();

        let sources = SourcePair::new(self.cli.primary.clone(), self.cli.alternate.clone());
        if self.cli.synthesize {
            for path in sources.synthesize_missing()? {
                if !self.cli.quiet {
                    eprintln!("Synthesized placeholder source: {}", path.display());
                }
            }
        }

        let executor =
            PyramidExecutor::new(self.cli.pyramid_config(), self.cli.output.clone(), sources)?;
        let level_count = executor.level_count();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(u64::from(level_count) + 1);
        }

        executor.reset_root()?;

        let mut report = PyramidReport::default();
        for level in 0..=level_count {
            let tile_count = executor.tiles_at_level(level)?;
            if let Some(ref pm) = self.progress_manager {
                pm.start_level(level, tile_count);
            }

            let progress = &self.progress_manager;
            let level_report = executor.populate_level(level, &mut |written| {
                if let Some(pm) = progress {
                    pm.update_tiles(written);
                }
            })?;

            if let Some(ref pm) = self.progress_manager {
                pm.complete_level();
            }
            report.levels.push(level_report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        self.print_summary(&report, start_time);
        Ok(())
    }

    // Allow print for user feedback for the run summary
    #[allow(clippy::print_stderr)]
    fn print_summary(&self, report: &PyramidReport, start_time: Instant) {
        if self.cli.quiet {
            return;
        }
        eprintln!(
            "Wrote {} tiles across {} levels to {} in {:.2?}",
            report.total_tiles(),
            report.levels.len(),
            self.cli.output.display(),
            start_time.elapsed()
        );
    }
}
