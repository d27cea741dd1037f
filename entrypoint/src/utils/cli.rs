use std::{path::PathBuf, time::Duration};

use chrono::TimeDelta;
use clap::Parser;
use common::result::enums::RetailerName;
use crawler::unprotected::{DEFAULT_USER_AGENT, PAGE_TIMEOUT_SECONDS};
use price_cache::FreshnessPolicy;

const MAX_FRESHNESS_HOURS: i64 = 24 * 365;

/// Scrapes PC part prices and writes one CSV report per build
#[derive(Parser, Debug, Clone)]
#[command(name = "price_checker", version)]
pub struct Args {
    /// SQLite file holding the price cache
    #[arg(long, default_value = "pc_parts.db")]
    pub database: PathBuf,

    /// JSON file with the builds to price, the built-in build is used otherwise
    #[arg(long)]
    pub builds: Option<PathBuf>,

    /// Directory the CSV reports are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Page load timeout
    #[arg(long, default_value_t = PAGE_TIMEOUT_SECONDS)]
    pub timeout_secs: u64,

    /// How long a scraped price is trusted
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(i64).range(0..=MAX_FRESHNESS_HOURS))]
    pub freshness_hours: i64,

    /// How long a failed scrape is remembered before retrying
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(i64).range(0..=MAX_FRESHNESS_HOURS))]
    pub unknown_freshness_hours: i64,

    /// Retailers to leave out, may be repeated
    #[arg(long = "skip-retailer", value_enum)]
    pub skipped_retailers: Vec<RetailerName>,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn freshness_policy(&self) -> FreshnessPolicy {
        FreshnessPolicy::new(
            TimeDelta::hours(self.freshness_hours),
            TimeDelta::hours(self.unknown_freshness_hours),
        )
    }
}
