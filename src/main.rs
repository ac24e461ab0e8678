//! CLI entry point for classifying character matrices

use charmatch::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> charmatch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
