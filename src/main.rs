//! Command-line interface for opfeed
//!
//! # Usage Examples
//!
//! ```bash
//! # Baseline five-year feed with a random seed
//! opfeed > ops.txt
//!
//! # Reproducible feed
//! opfeed --seed 42 > ops.txt
//!
//! # One week from a config file, with progress logs on stderr
//! RUST_LOG=opfeed=debug opfeed --config feed.yaml --days 7
//! ```

use anyhow::Context;
use clap::Parser;
use opfeed::{emit_feed, resolve_seed, FeedArgs, FeedGenerator};

#[derive(Parser)]
#[command(name = "opfeed")]
#[command(about = "Generate a synthetic colon-delimited operation feed on stdout")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    feed: FeedArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the feed itself
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.feed.resolve()?;

    let seed = resolve_seed(&config);
    tracing::info!("Generating {} dates from {}", config.days, config.start_date);

    let mut generator =
        FeedGenerator::seeded(config, seed).context("Failed to set up feed generator")?;

    let stdout = std::io::stdout();
    emit_feed(&mut generator, stdout.lock())?;

    Ok(())
}
