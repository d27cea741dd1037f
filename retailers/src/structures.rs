use common::result::{base::Price, enums::RetailerName};
use crawler::request::{Request, RequestBuilder};
use scraper::Html;

use crate::errors::RetailerError;

/// Reads a price out of one retailer's product page.
///
/// Implementations are pure functions of the page; fetching and caching
/// happen elsewhere.
pub trait PriceExtractor: Send + Sync {
    fn get_retailer_name(&self) -> RetailerName;

    fn build_request(&self, url: &str) -> Request {
        RequestBuilder::new().set_url(url).build()
    }

    fn parse_price(&self, html: &Html) -> Result<Price, RetailerError>;

    fn extract_price(&self, response: &str) -> Result<Price, RetailerError> {
        let html = Html::parse_document(response);

        self.parse_price(&html)
    }
}
