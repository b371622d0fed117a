//! CLI entry point for shape-constrained word-cloud generation

use clap::Parser;
use wordshape::io::cli::{Cli, FileProcessor};

fn main() -> wordshape::Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
