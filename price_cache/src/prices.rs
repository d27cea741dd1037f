use chrono::{DateTime, Utc};
use common::{
    result::base::{Price, PriceRecord},
    utils::{format_timestamp, parse_timestamp},
};
use tokio_rusqlite::{params, rusqlite::OptionalExtension};
use tracing::debug;

use crate::{connector::PriceCache, constants::TABLE_PRICES_NAME, errors::CacheError};

/// Whether an upsert created the row or overwrote an existing one.
/// Both leave the table in the same state; the distinction is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl PriceCache {
    pub async fn lookup(&self, url: &str) -> Result<Option<PriceRecord>, CacheError> {
        let url = url.to_string();

        self.conn
            .call(move |conn| -> Result<Option<PriceRecord>, CacheError> {
                let row: Option<(Option<f64>, String)> = conn
                    .query_row(
                        &format!("SELECT price, time FROM {TABLE_PRICES_NAME} WHERE url = ?1"),
                        params![url],
                        |row| Ok((row.get(0)?, row.get(1)?)),
                    )
                    .optional()?;

                let Some((price, time)) = row else {
                    return Ok(None);
                };

                let Some(checked_at) = parse_timestamp(&time) else {
                    return Err(CacheError::InvalidTimestamp {
                        url,
                        timestamp: time,
                    });
                };

                // older databases stored the failure sentinel as a huge number
                let price = match price {
                    Some(dollars) if dollars < 0.0 => {
                        return Err(CacheError::InvalidPrice {
                            url,
                            price: dollars,
                        });
                    }
                    Some(dollars) if dollars.is_finite() && dollars < f64::MAX => {
                        Price::Resolved(dollars)
                    }
                    _ => Price::Unknown,
                };

                Ok(Some(PriceRecord::new(url, price, checked_at)))
            })
            .await
            .map_err(CacheError::from)
    }

    /// Inserts the record if the URL is new, otherwise overwrites its price
    /// and timestamp. A timestamp older than the stored one is ignored so
    /// `checked_at` never moves backwards.
    pub async fn upsert(
        &self,
        url: &str,
        price: Price,
        now: DateTime<Utc>,
    ) -> Result<UpsertOutcome, CacheError> {
        let url = url.to_string();
        let time = format_timestamp(&now);
        let stored_price = price.as_dollars();

        self.conn
            .call(move |conn| -> Result<UpsertOutcome, CacheError> {
                let tx = conn.transaction()?;

                let existed: bool = tx.query_row(
                    &format!("SELECT EXISTS(SELECT 1 FROM {TABLE_PRICES_NAME} WHERE url = ?1)"),
                    params![url],
                    |row| row.get(0),
                )?;

                tx.execute(
                    &format!(
                        "INSERT INTO {TABLE_PRICES_NAME} (url, price, time) VALUES (?1, ?2, ?3)
                        ON CONFLICT(url) DO UPDATE SET
                            price = excluded.price,
                            time = MAX(time, excluded.time)"
                    ),
                    params![url, stored_price, time],
                )?;

                tx.commit()?;

                debug!("Stored {url} at {time} (existed: {existed})");

                Ok(match existed {
                    true => UpsertOutcome::Updated,
                    false => UpsertOutcome::Inserted,
                })
            })
            .await
            .map_err(CacheError::from)
    }

    /// Rows stored for `url`; the unique index keeps this at 0 or 1
    pub async fn count(&self, url: &str) -> Result<u64, CacheError> {
        let url = url.to_string();

        self.conn
            .call(move |conn| -> Result<u64, CacheError> {
                let count: i64 = conn.query_row(
                    &format!("SELECT COUNT(*) FROM {TABLE_PRICES_NAME} WHERE url = ?1"),
                    params![url],
                    |row| row.get(0),
                )?;

                Ok(count as u64)
            })
            .await
            .map_err(CacheError::from)
    }
}
