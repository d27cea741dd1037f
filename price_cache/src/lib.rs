//! SQLite-backed price cache.
//!
//! One row per product URL holding the last scraped price and when it was
//! checked. Rows are inserted on first lookup and updated in place after
//! that; nothing is ever deleted.

pub mod connector;
pub mod errors;
pub mod freshness;
mod migrations;
pub mod prices;

pub(crate) mod constants;

pub use connector::PriceCache;
pub use errors::CacheError;
pub use freshness::{FreshnessPolicy, is_fresh};
pub use prices::UpsertOutcome;
