//! CLI argument definitions.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use opfeed_core::FeedConfig;
use std::path::PathBuf;
use tracing::info;

/// Arguments shaping the generated feed.
///
/// All of them are optional: with none given the feed is the baseline
/// five-year run starting 2000-01-01 with a fresh random seed.
#[derive(Args, Clone, Debug, Default)]
pub struct FeedArgs {
    /// Random seed for deterministic generation (same seed = same feed)
    #[arg(long, env = "OPFEED_SEED")]
    pub seed: Option<u64>,

    /// Path to a YAML file overriding the default feed config
    #[arg(long, short = 'c', env = "OPFEED_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First date of the feed (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<NaiveDate>,

    /// Number of consecutive dates to generate
    #[arg(long)]
    pub days: Option<u32>,
}

impl FeedArgs {
    /// Resolve the effective config: flags over config file over defaults.
    pub fn resolve(&self) -> anyhow::Result<FeedConfig> {
        let mut config = match &self.config {
            Some(path) => FeedConfig::from_file(path)
                .with_context(|| format!("Failed to load feed config from {path:?}"))?,
            None => FeedConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(start_date) = self.start_date {
            config = config.with_start_date(start_date);
        }
        if let Some(days) = self.days {
            config = config.with_days(days);
        }

        Ok(config)
    }
}

/// Pick the seed for this run and log it.
///
/// A configured seed is used as is; otherwise one is drawn from entropy. The
/// logged value reproduces the run when passed back through `--seed`.
pub fn resolve_seed(config: &FeedConfig) -> u64 {
    match config.seed {
        Some(seed) => {
            info!("Using configured seed {seed}");
            seed
        }
        None => {
            let seed = rand::random();
            info!("Using random seed {seed} (pass --seed {seed} to reproduce)");
            seed
        }
    }
}
