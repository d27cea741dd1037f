use std::path::Path;

use tokio_rusqlite::Connection;
use tracing::debug;

use crate::{errors::CacheError, migrations};

/// Handle to the price table.
///
/// The underlying connection runs on its own thread and is cheap to clone;
/// clones share the same database.
#[derive(Clone, Debug)]
pub struct PriceCache {
    pub(crate) conn: Connection,
}

impl PriceCache {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        debug!("Opening price cache at {}", path.as_ref().display());

        let conn = Connection::open(path)
            .await
            .map_err(|e| CacheError::Database(e.into()))?;

        Self::initialize(conn).await
    }

    pub async fn open_in_memory() -> Result<Self, CacheError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| CacheError::Database(e.into()))?;

        Self::initialize(conn).await
    }

    async fn initialize(conn: Connection) -> Result<Self, CacheError> {
        migrations::run(&conn).await?;

        Ok(Self { conn })
    }
}

#[cfg(test)]
mod tests {
    use common::{result::base::Price, utils::get_current_time};

    use super::*;

    #[tokio::test]
    async fn opens_in_memory() {
        let cache = PriceCache::open_in_memory().await.unwrap();

        assert!(cache.lookup("https://www.amazon.com/dp/1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn records_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pc_parts.db");
        let now = get_current_time();

        {
            let cache = PriceCache::open(&path).await.unwrap();
            cache
                .upsert("https://www.amazon.com/dp/1", Price::Resolved(12.5), now)
                .await
                .unwrap();
        }

        let cache = PriceCache::open(&path).await.unwrap();
        let record = cache.lookup("https://www.amazon.com/dp/1").await.unwrap().unwrap();

        assert_eq!(record.price, Price::Resolved(12.5));
        assert_eq!(record.checked_at, now);
    }
}
