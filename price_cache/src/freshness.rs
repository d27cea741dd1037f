use chrono::{DateTime, TimeDelta, Utc};
use common::{result::base::PriceRecord, utils::freshness_window};

/// A record is fresh while `now - checked_at` stays within the window
pub fn is_fresh(record: &PriceRecord, now: DateTime<Utc>) -> bool {
    now - record.checked_at <= freshness_window()
}

/// Freshness windows for resolved prices and for the unknown sentinel.
///
/// Both default to 24 hours, which means a failed scrape is remembered as
/// long as a successful one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    pub window: TimeDelta,
    pub unknown_window: TimeDelta,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            window: freshness_window(),
            unknown_window: freshness_window(),
        }
    }
}

impl FreshnessPolicy {
    pub fn new(window: TimeDelta, unknown_window: TimeDelta) -> Self {
        Self {
            window,
            unknown_window,
        }
    }

    pub fn is_fresh(&self, record: &PriceRecord, now: DateTime<Utc>) -> bool {
        let window = match record.price.is_unknown() {
            true => self.unknown_window,
            false => self.window,
        };

        now - record.checked_at <= window
    }
}
