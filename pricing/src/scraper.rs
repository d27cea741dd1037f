use chrono::{DateTime, Utc};
use common::{
    result::{
        base::Price,
        enums::{RetailerName, domain_label},
    },
    utils::get_current_time,
};
use crawler::traits::Crawler;
use metrics::{Metrics, put_metric};
use price_cache::{FreshnessPolicy, PriceCache, UpsertOutcome};
use retailers::{errors::RetailerError, extractor_for};
use tracing::{debug, info, warn};

use crate::errors::PricingError;

/// Looks up one product URL at a time, going to the network only when the
/// cached row is missing or stale.
///
/// The crawler and the cache are separate collaborators handed in by the
/// caller; the scraper owns no connection of its own.
pub struct PriceScraper<C: Crawler> {
    crawler: C,
    cache: PriceCache,
    policy: FreshnessPolicy,
    excluded_retailers: Vec<RetailerName>,
}

impl<C: Crawler> PriceScraper<C> {
    pub fn new(crawler: C, cache: PriceCache) -> Self {
        Self {
            crawler,
            cache,
            policy: FreshnessPolicy::default(),
            excluded_retailers: Vec::new(),
        }
    }

    pub fn with_policy(mut self, policy: FreshnessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_excluded_retailers(mut self, retailers: Vec<RetailerName>) -> Self {
        self.excluded_retailers = retailers;
        self
    }

    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    pub async fn get_pricing(&self, name: &str, url: Option<&str>) -> Result<Price, PricingError> {
        self.get_pricing_at(name, url, get_current_time()).await
    }

    /// Cached price if still fresh at `now`, otherwise scrapes and stores
    /// the result (including `Price::Unknown` on failure) stamped with `now`
    pub async fn get_pricing_at(
        &self,
        name: &str,
        url: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Price, PricingError> {
        let Some(url) = url else {
            return Ok(Price::Unknown);
        };

        let domain = domain_label(url);
        let retailer = RetailerName::from_url(url);

        if let Some(retailer) = retailer
            && self.excluded_retailers.contains(&retailer)
        {
            debug!("Skipping {name} from {domain}, {retailer} is excluded");
            return Ok(Price::Unknown);
        }

        if let Some(record) = self.cache.lookup(url).await?
            && self.policy.is_fresh(&record, now)
        {
            info!("Price for {name} from {domain} is still recent, skipping");
            put_metric!(Metrics::PriceCacheHit, 1, "retailer" => domain);

            return Ok(record.price);
        }

        let price = match retailer {
            Some(retailer) => self.scrape(retailer, url).await.unwrap_or_else(|err| {
                warn!("Failed to get price for {name} from {domain}: {err}");
                put_metric!(Metrics::ExtractionFailed, 1, "retailer" => domain.clone());

                Price::Unknown
            }),
            None => {
                warn!("Could not get price for {name} from {domain}");
                put_metric!(Metrics::UnsupportedRetailer, 1, "retailer" => domain.clone());

                Price::Unknown
            }
        };

        match self.cache.upsert(url, price, now).await? {
            UpsertOutcome::Updated => {
                info!("Updated price for {name} from {domain} ({price})");
                put_metric!(Metrics::PriceCacheUpdate, 1, "retailer" => domain);
            }
            UpsertOutcome::Inserted => {
                info!("Added price for {name} from {domain} ({price})");
                put_metric!(Metrics::PriceCacheInsert, 1, "retailer" => domain);
            }
        }

        Ok(price)
    }

    async fn scrape(&self, retailer: RetailerName, url: &str) -> Result<Price, RetailerError> {
        let extractor = extractor_for(retailer);
        let request = extractor.build_request(url);

        let response = self.crawler.make_web_request(request).await?;

        extractor.extract_price(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::test_utils::{
        AMAZON_URL, MICROCENTER_URL, StaticCrawler, amazon_page, microcenter_page,
    };

    async fn scraper(crawler: StaticCrawler) -> PriceScraper<StaticCrawler> {
        PriceScraper::new(crawler, PriceCache::open_in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn first_request_scrapes_and_inserts() {
        let crawler = StaticCrawler::new().with_page(MICROCENTER_URL, microcenter_page("409.99"));
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;

        let price = scraper
            .get_pricing("Intel Core i7-13700K", Some(MICROCENTER_URL))
            .await
            .unwrap();

        assert_eq!(price, Price::Resolved(409.99));
        assert_eq!(requests.get(), 1);
        assert_eq!(
            scraper.cache().lookup(MICROCENTER_URL).await.unwrap().unwrap().price,
            Price::Resolved(409.99)
        );
    }

    #[tokio::test]
    async fn fresh_record_is_served_without_fetching() {
        let crawler = StaticCrawler::new().with_page(AMAZON_URL, amazon_page("129", "99"));
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;
        let now = get_current_time();

        let first = scraper.get_pricing_at("Case", Some(AMAZON_URL), now).await.unwrap();
        let second = scraper
            .get_pricing_at("Case", Some(AMAZON_URL), now + TimeDelta::hours(23))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(requests.get(), 1);
    }

    #[tokio::test]
    async fn stale_record_is_scraped_again_and_overwritten() {
        let crawler = StaticCrawler::new().with_page(AMAZON_URL, amazon_page("119", "49"));
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;
        let now = get_current_time();

        scraper
            .cache()
            .upsert(AMAZON_URL, Price::Resolved(129.99), now - TimeDelta::hours(25))
            .await
            .unwrap();

        let price = scraper.get_pricing_at("Case", Some(AMAZON_URL), now).await.unwrap();
        let record = scraper.cache().lookup(AMAZON_URL).await.unwrap().unwrap();

        assert_eq!(price, Price::Resolved(119.49));
        assert_eq!(requests.get(), 1);
        assert_eq!(scraper.cache().count(AMAZON_URL).await.unwrap(), 1);
        assert_eq!(record.price, Price::Resolved(119.49));
        assert_eq!(record.checked_at, now);
    }

    #[tokio::test]
    async fn failures_are_cached_and_not_retried() {
        let crawler = StaticCrawler::new();
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;
        let now = get_current_time();

        let first = scraper
            .get_pricing_at("GPU", Some(MICROCENTER_URL), now)
            .await
            .unwrap();
        let second = scraper
            .get_pricing_at("GPU", Some(MICROCENTER_URL), now + TimeDelta::hours(1))
            .await
            .unwrap();

        assert_eq!(first, Price::Unknown);
        assert_eq!(second, Price::Unknown);
        assert_eq!(requests.get(), 1);
    }

    #[tokio::test]
    async fn shorter_unknown_window_retries_failures() {
        let crawler = StaticCrawler::new();
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await.with_policy(FreshnessPolicy::new(
            TimeDelta::hours(24),
            TimeDelta::minutes(30),
        ));
        let now = get_current_time();

        scraper.get_pricing_at("GPU", Some(MICROCENTER_URL), now).await.unwrap();
        scraper
            .get_pricing_at("GPU", Some(MICROCENTER_URL), now + TimeDelta::hours(1))
            .await
            .unwrap();

        assert_eq!(requests.get(), 2);
    }

    #[tokio::test]
    async fn unsupported_domain_is_cached_without_fetching() {
        let url = "https://www.newegg.com/p/N82E16819118412";
        let crawler = StaticCrawler::new();
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;

        let price = scraper.get_pricing("CPU", Some(url)).await.unwrap();

        assert_eq!(price, Price::Unknown);
        assert_eq!(requests.get(), 0);
        assert_eq!(scraper.cache().count(url).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_url_is_unknown_and_not_cached() {
        let crawler = StaticCrawler::new();
        let requests = crawler.request_counter();
        let scraper = scraper(crawler).await;

        assert_eq!(scraper.get_pricing("GPU", None).await.unwrap(), Price::Unknown);
        assert_eq!(requests.get(), 0);
    }

    #[tokio::test]
    async fn excluded_retailer_is_neither_fetched_nor_cached() {
        let crawler = StaticCrawler::new().with_page(AMAZON_URL, amazon_page("129", "99"));
        let requests = crawler.request_counter();
        let scraper = scraper(crawler)
            .await
            .with_excluded_retailers(vec![RetailerName::Amazon]);

        let price = scraper.get_pricing("Case", Some(AMAZON_URL)).await.unwrap();

        assert_eq!(price, Price::Unknown);
        assert_eq!(requests.get(), 0);
        assert_eq!(scraper.cache().count(AMAZON_URL).await.unwrap(), 0);
    }
}
