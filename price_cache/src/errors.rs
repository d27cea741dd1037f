use thiserror::Error;
use tokio_rusqlite::rusqlite;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Price cache database error: {0}")]
    Database(tokio_rusqlite::Error),
    #[error("Price cache migration failed: {0}")]
    MigrationFailed(String),
    #[error("Stored timestamp {timestamp} for {url} is not valid")]
    InvalidTimestamp { url: String, timestamp: String },
    #[error("Stored price {price} for {url} is negative")]
    InvalidPrice { url: String, price: f64 },
}

impl From<tokio_rusqlite::Error<CacheError>> for CacheError {
    fn from(err: tokio_rusqlite::Error<CacheError>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => {
                CacheError::Database(tokio_rusqlite::Error::ConnectionClosed)
            }
            tokio_rusqlite::Error::Close(c) => CacheError::Database(tokio_rusqlite::Error::Close(c)),
            _ => CacheError::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for CacheError {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        CacheError::Database(err)
    }
}

impl From<rusqlite::Error> for CacheError {
    fn from(err: rusqlite::Error) -> Self {
        CacheError::Database(tokio_rusqlite::Error::Error(err))
    }
}
