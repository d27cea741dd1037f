pub mod amazon;
pub mod microcenter;

use common::result::enums::RetailerName;

use crate::{
    retailers::{amazon::Amazon, microcenter::Microcenter},
    structures::PriceExtractor,
};

/// Every supported retailer has exactly one arm here; a new site is a new
/// `RetailerName` variant plus its extractor
pub fn extractor_for(retailer: RetailerName) -> Box<dyn PriceExtractor> {
    match retailer {
        RetailerName::Microcenter => Box::new(Microcenter::new()),
        RetailerName::Amazon => Box::new(Amazon::new()),
    }
}
