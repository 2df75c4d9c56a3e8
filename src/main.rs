//! CLI entry point for partition-tree image pruning

use clap::Parser;
use parttree::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> parttree::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_directive().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
