use std::process::ExitCode;

use clap::Parser;
use crawler::unprotected::UnprotectedCrawler;
use mimalloc::MiMalloc;
use price_cache::PriceCache;
use pricing::{errors::PricingError, report_writer::write_report, scraper::PriceScraper};
use tracing::{error, info};
use utils::{builds::resolve_builds, cli::Args, logger::configure_logger};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    configure_logger();

    let args = Args::parse();

    let crawler = match UnprotectedCrawler::with_options(args.timeout(), &args.user_agent) {
        Ok(crawler) => crawler,
        Err(err) => {
            error!("Failed to start crawler: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&args, crawler).await;

    metrics::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, crawler: UnprotectedCrawler) -> Result<(), PricingError> {
    let cache = PriceCache::open(&args.database).await?;

    let scraper = PriceScraper::new(crawler, cache)
        .with_policy(args.freshness_policy())
        .with_excluded_retailers(args.skipped_retailers.clone());

    for build in resolve_builds(args.builds.as_deref()).await? {
        let report = build.report(&scraper).await?;
        write_report(&report, &args.output_dir).await?;
    }

    info!("Process complete");

    Ok(())
}
