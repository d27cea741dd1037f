use std::collections::BTreeMap;

use common::result::base::Price;
use crawler::traits::Crawler;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{errors::PricingError, scraper::PriceScraper};

/// A part and where to buy it, keyed by retailer id (`"amazon"`,
/// `"microcenter"`, ...). A retailer may be listed without a URL.
///
/// Retailers are always visited in sorted id order, whatever order the
/// build file or builder calls listed them in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub urls: BTreeMap<String, Option<String>>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urls: BTreeMap::new(),
        }
    }

    pub fn with_url(mut self, retailer: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.insert(retailer.into(), Some(url.into()));
        self
    }

    pub fn with_missing_url(mut self, retailer: impl Into<String>) -> Self {
        self.urls.insert(retailer.into(), None);
        self
    }

    /// Cheapest price across every listed retailer, `Unknown` if none resolved.
    /// URLs are fetched one at a time in sorted retailer id order.
    pub async fn best_price<C: Crawler>(
        &self,
        scraper: &PriceScraper<C>,
    ) -> Result<Price, PricingError> {
        let mut min_price = Price::Unknown;

        for url in self.urls.values() {
            let price = scraper.get_pricing(&self.name, url.as_deref()).await?;
            min_price = min_price.min(price);
        }

        info!("Best price for {} is {}", self.name, min_price);

        Ok(min_price)
    }
}
