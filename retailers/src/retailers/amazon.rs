use common::result::{base::Price, enums::RetailerName};
use crawler::request::{Request, RequestBuilder};
use scraper::Html;
use tracing::debug;

use crate::{
    errors::RetailerError,
    structures::PriceExtractor,
    utils::{
        conversions::price_to_cents,
        html::{element_to_text, extract_element_from_document},
    },
};

const PRICE_WHOLE_SELECTOR: &str = ".a-price-whole";
const PRICE_FRACTION_SELECTOR: &str = ".a-price-fraction";

pub struct Amazon;

impl Amazon {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Amazon {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceExtractor for Amazon {
    fn get_retailer_name(&self) -> RetailerName {
        RetailerName::Amazon
    }

    fn build_request(&self, url: &str) -> Request {
        // prices are localized otherwise
        let headers = [(
            "Accept-Language".to_string(),
            "en-US,en;q=0.9".to_string(),
        )];

        RequestBuilder::new()
            .set_url(url)
            .set_headers(&headers)
            .build()
    }

    fn parse_price(&self, html: &Html) -> Result<Price, RetailerError> {
        let whole = element_to_text(extract_element_from_document(html, PRICE_WHOLE_SELECTOR)?);
        let fraction =
            element_to_text(extract_element_from_document(html, PRICE_FRACTION_SELECTOR)?);

        // the whole part carries the decimal point in a nested span: "1,299."
        let whole = whole.trim_end_matches('.');

        debug!("Found amazon price {}.{}", whole, fraction);

        Ok(Price::from_cents(price_to_cents(&format!(
            "{whole}.{fraction}"
        ))?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_whole_and_fraction_parts() {
        let page = r#"
            <span class="a-price">
                <span class="a-price-symbol">$</span>
                <span class="a-price-whole">1,299<span class="a-price-decimal">.</span></span>
                <span class="a-price-fraction">99</span>
            </span>
        "#;

        let price = Amazon::new().extract_price(page).unwrap();

        assert_eq!(price, Price::Resolved(1299.99));
    }

    #[test]
    fn uses_first_price_on_the_page() {
        let page = r#"
            <span class="a-price-whole">129</span><span class="a-price-fraction">99</span>
            <span class="a-price-whole">5</span><span class="a-price-fraction">00</span>
        "#;

        assert_eq!(
            Amazon::new().extract_price(page).unwrap(),
            Price::Resolved(129.99)
        );
    }

    #[test]
    fn missing_fraction_is_an_error() {
        let page = "<span class='a-price-whole'>129</span>";

        assert!(matches!(
            Amazon::new().extract_price(page),
            Err(RetailerError::HtmlMissingElement(_))
        ));
    }

    #[test]
    fn request_asks_for_english_prices() {
        let request = Amazon::new().build_request("https://www.amazon.com/dp/B09HZ2NCNT");

        assert_eq!(request.url(), "https://www.amazon.com/dp/B09HZ2NCNT");
        assert_eq!(request.headers()[0].0, "Accept-Language");
    }
}
