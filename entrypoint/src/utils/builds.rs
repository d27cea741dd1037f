use std::path::Path;

use pricing::{
    build_report::{Build, load_builds},
    errors::PricingError,
    product::Product,
};
use tracing::info;

/// Builds from `path` when given, otherwise the built-in list
pub async fn resolve_builds(path: Option<&Path>) -> Result<Vec<Build>, PricingError> {
    match path {
        Some(path) => {
            info!("Loading builds from {}", path.display());
            load_builds(path).await
        }
        None => Ok(default_builds()),
    }
}

pub fn default_builds() -> Vec<Build> {
    vec![Build::new(
        "Intel Build",
        vec![
            Product::new("Intel Core i7-13700K")
                .with_url(
                    "microcenter",
                    "https://www.microcenter.com/product/652626/intel-core-i7-13700k-raptor-lake-34ghz-sixteen-core-lga-1700-boxed-processor-heatsink-not-included",
                )
                .with_url(
                    "amazon",
                    "https://www.amazon.com/Intel-i7-13700K-Desktop-Processor-P-cores/dp/B0BCF57FL5",
                ),
            Product::new("EVGA Nvidia GTX 3080Ti FTW3 Ultra"),
            Product::new("Asus ROG STRIX B550-I GAMING")
                .with_url(
                    "microcenter",
                    "https://www.microcenter.com/product/648356/gigabyte-b660i-aorus-pro-ddr4-intel-lga-1700-mini-itx-motherboard?ob=1",
                )
                .with_url(
                    "amazon",
                    "https://www.amazon.com/B660I-AORUS-PRO-DDR4-Motherboard/dp/B083NLX6G3",
                ),
        ],
    )]
}
