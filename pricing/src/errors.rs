use price_cache::CacheError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Price cache failed")]
    CacheFailed(#[from] CacheError),
    #[error("Failed to write report {path}: {source}")]
    ReportWriteFailed {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to read builds from {path}: {reason}")]
    InvalidBuildFile { path: String, reason: String },
}
