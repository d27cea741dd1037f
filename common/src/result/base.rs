use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scraped price in dollars.
///
/// `Unknown` stands in for every failure (timeout, missing element,
/// unsupported retailer) and always sorts after a resolved price, so it
/// loses every `min` comparison.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Resolved(f64),
    Unknown,
}

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self::Resolved(cents as f64 / 100.0)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Price::Unknown)
    }

    pub fn as_dollars(&self) -> Option<f64> {
        match self {
            Price::Resolved(dollars) => Some(*dollars),
            Price::Unknown => None,
        }
    }

    /// Unknown prices add nothing to a total
    pub fn or_zero(&self) -> f64 {
        self.as_dollars().unwrap_or(0.0)
    }

    pub fn min(self, other: Price) -> Price {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            _ => self,
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Price::Resolved(lhs), Price::Resolved(rhs)) => lhs.partial_cmp(rhs),
            (Price::Resolved(_), Price::Unknown) => Some(Ordering::Less),
            (Price::Unknown, Price::Resolved(_)) => Some(Ordering::Greater),
            (Price::Unknown, Price::Unknown) => Some(Ordering::Equal),
        }
    }
}

impl From<Option<f64>> for Price {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(dollars) => Price::Resolved(dollars),
            None => Price::Unknown,
        }
    }
}

impl Display for Price {
    fn fmt(&self, format: &mut Formatter) -> Result {
        match self {
            Price::Resolved(dollars) => write!(format, "${dollars:.2}"),
            Price::Unknown => write!(format, "unknown"),
        }
    }
}

/// One cached row per URL
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub url: String,
    pub price: Price,
    pub checked_at: DateTime<Utc>,
}

impl PriceRecord {
    pub fn new(url: impl Into<String>, price: Price, checked_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            price,
            checked_at,
        }
    }
}
