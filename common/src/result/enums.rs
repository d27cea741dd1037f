use std::str::FromStr;

use clap::ValueEnum;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Closed set of retailers with a price extractor.
///
/// The variant is chosen from the host of a product URL: `www.amazon.com`
/// and `amazon.ca` both resolve to `Amazon`.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    ValueEnum,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RetailerName {
    Microcenter,
    Amazon,
}

impl RetailerName {
    pub fn from_url(url: &str) -> Option<Self> {
        let Ok(parsed) = Url::parse(url) else {
            debug!("Unparsable product url: {url}");
            return None;
        };

        let host = parsed.host_str()?;

        <Self as FromStr>::from_str(second_level_label(host)).ok()
    }
}

/// Second level label of a URL host (`www.microcenter.com` -> `microcenter`),
/// used to name the site in log lines even when it is unsupported
pub fn domain_label(url: &str) -> String {
    let host = Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string));

    let Some(host) = host else {
        return url.to_string();
    };

    second_level_label(&host).to_string()
}

// hosts are already lowercased by Url
fn second_level_label(host: &str) -> &str {
    let labels: Vec<&str> = host.split('.').collect();

    match labels.len() {
        0 | 1 => host,
        len => labels[len - 2],
    }
}
