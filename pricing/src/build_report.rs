use std::path::Path;

use common::result::base::Price;
use crawler::traits::Crawler;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{errors::PricingError, product::Product, scraper::PriceScraper};

/// A named list of parts to price together
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Build {
    pub name: String,
    pub products: Vec<Product>,
}

impl Build {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            products,
        }
    }

    pub async fn report<C: Crawler>(
        &self,
        scraper: &PriceScraper<C>,
    ) -> Result<BuildReport, PricingError> {
        info!("Price breakdown for {}:", self.name);

        let mut items: Vec<(String, Price)> = Vec::new();

        for product in &self.products {
            items.push((product.name.clone(), product.best_price(scraper).await?));
        }

        let report = BuildReport::from_prices(&self.name, items);

        for name in report.unresolved() {
            warn!("No price found for {name}, it is left out of the total");
        }

        info!("Total for {} is ${:.2}", report.name, report.total);

        Ok(report)
    }
}

/// Reads a JSON array of builds
pub async fn load_builds(path: impl AsRef<Path>) -> Result<Vec<Build>, PricingError> {
    let path = path.as_ref();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PricingError::InvalidBuildFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    serde_json::from_str(&raw).map_err(|e| PricingError::InvalidBuildFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Best price per product plus their sum.
///
/// Unknown prices add 0 to `total`; `unresolved()` lists them so a low total
/// can be told apart from a cheap build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub name: String,
    pub items: Vec<(String, Price)>,
    pub total: f64,
}

impl BuildReport {
    pub fn from_prices(name: impl Into<String>, items: Vec<(String, Price)>) -> Self {
        let total: f64 = items.iter().map(|(_, price)| price.or_zero()).sum();

        Self {
            name: name.into(),
            items,
            total,
        }
    }

    pub fn unresolved(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, price)| price.is_unknown())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// `Intel Build` -> `intel_build.csv`
    pub fn file_name(&self) -> String {
        let mut slug = String::new();

        for c in self.name.trim().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('_') {
                slug.push('_');
            }
        }

        let slug = slug.trim_matches('_');

        match slug.is_empty() {
            true => "build.csv".into(),
            false => format!("{slug}.csv"),
        }
    }
}
