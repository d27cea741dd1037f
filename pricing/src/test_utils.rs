use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use crawler::{
    errors::CrawlerError,
    request::Request,
    traits::{Crawler, CrawlerResponse},
};

pub(crate) const MICROCENTER_URL: &str =
    "https://www.microcenter.com/product/652626/intel-core-i7-13700k-raptor-lake";
pub(crate) const AMAZON_URL: &str =
    "https://www.amazon.com/Intel-i7-13700K-Desktop-Processor-P-cores/dp/B0BCF57FL5";

pub(crate) fn microcenter_page(price: &str) -> String {
    format!(r#"<html><body><span id="pricing" content="{price}">${price}</span></body></html>"#)
}

pub(crate) fn amazon_page(whole: &str, fraction: &str) -> String {
    format!(
        r#"<html><body>
            <span class="a-price-whole">{whole}<span class="a-price-decimal">.</span></span>
            <span class="a-price-fraction">{fraction}</span>
        </body></html>"#
    )
}

/// Every URL the crawler was asked for, in request order
#[derive(Clone, Default)]
pub(crate) struct RequestCounter(Arc<Mutex<Vec<String>>>);

impl RequestCounter {
    pub(crate) fn get(&self) -> usize {
        self.urls().len()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.0.lock().map(|urls| urls.clone()).unwrap_or_default()
    }

    fn record(&self, url: &str) {
        if let Ok(mut urls) = self.0.lock() {
            urls.push(url.to_string());
        }
    }
}

/// Serves canned pages by URL and answers 404 for everything else
#[derive(Default)]
pub(crate) struct StaticCrawler {
    pages: HashMap<String, String>,
    requests: RequestCounter,
}

impl StaticCrawler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub(crate) fn request_counter(&self) -> RequestCounter {
        self.requests.clone()
    }
}

#[async_trait]
impl Crawler for StaticCrawler {
    async fn make_web_request(&self, request: Request) -> Result<CrawlerResponse, CrawlerError> {
        self.requests.record(request.url());

        match self.pages.get(request.url()) {
            Some(body) => Ok(CrawlerResponse {
                body: body.clone(),
                status: 200,
            }),
            None => Err(CrawlerError::UnexpectedStatus {
                url: request.url().to_string(),
                status: 404,
            }),
        }
    }
}
