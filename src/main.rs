//! CLI entry point for the placeholder tile pyramid generator

use clap::Parser;
use tilefixture::io::cli::{Cli, FixtureProcessor};

fn main() -> tilefixture::Result<()> {
    let cli = Cli::parse();
    let mut processor = FixtureProcessor::new(cli);
    processor.process()
}
