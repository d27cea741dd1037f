use tokio_rusqlite::{Connection, params};

use crate::{constants::TABLE_MIGRATIONS_NAME, errors::CacheError};

/// Applied in order, each exactly once.
///
/// The table may already exist without a key (older databases kept the
/// bare `url, price, time` layout), so uniqueness comes from an index
/// rather than the `CREATE TABLE`.
const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        "CREATE TABLE IF NOT EXISTS prices (
            url TEXT PRIMARY KEY,
            price REAL,
            time TEXT NOT NULL
        );",
    ),
    (
        2,
        "CREATE UNIQUE INDEX IF NOT EXISTS prices_url_unique ON prices (url);",
    ),
];

pub(crate) async fn run(conn: &Connection) -> Result<(), CacheError> {
    conn.call(|conn| -> Result<(), CacheError> {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {TABLE_MIGRATIONS_NAME} (
                    version INTEGER PRIMARY KEY,
                    applied_at TEXT NOT NULL
                )"
            ),
            [],
        )?;

        let current: i64 = conn.query_row(
            &format!("SELECT COALESCE(MAX(version), 0) FROM {TABLE_MIGRATIONS_NAME}"),
            [],
            |row| row.get(0),
        )?;

        for (version, sql) in MIGRATIONS {
            if *version <= current {
                continue;
            }

            conn.execute_batch(sql)
                .map_err(|e| CacheError::MigrationFailed(format!("version {version}: {e}")))?;

            conn.execute(
                &format!(
                    "INSERT INTO {TABLE_MIGRATIONS_NAME} (version, applied_at) VALUES (?1, CURRENT_TIMESTAMP)"
                ),
                params![version],
            )?;
        }

        Ok(())
    })
    .await
    .map_err(CacheError::from)
}
