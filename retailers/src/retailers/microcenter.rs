use common::result::{base::Price, enums::RetailerName};
use scraper::Html;
use tracing::debug;

use crate::{
    errors::RetailerError,
    structures::PriceExtractor,
    utils::{
        conversions::price_to_cents,
        html::{element_extract_attr, extract_element_from_document},
    },
};

const PRICE_SELECTOR: &str = "span#pricing";
const PRICE_ATTRIBUTE: &str = "content";

pub struct Microcenter;

impl Microcenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Microcenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceExtractor for Microcenter {
    fn get_retailer_name(&self) -> RetailerName {
        RetailerName::Microcenter
    }

    fn parse_price(&self, html: &Html) -> Result<Price, RetailerError> {
        let pricing = extract_element_from_document(html, PRICE_SELECTOR)?;
        let raw_price = element_extract_attr(pricing, PRICE_ATTRIBUTE)?;

        debug!("Found microcenter price {}", raw_price);

        Ok(Price::from_cents(price_to_cents(&raw_price)?))
    }
}
