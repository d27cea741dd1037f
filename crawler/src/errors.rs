use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error("Page load timed out for {0}")]
    PageTimeout(String),
    #[error("Unprotected crawler general error")]
    UnprotectedClientGeneralError(#[from] reqwest::Error),
    #[error("Unprotected crawler failed to create header")]
    UnprotectedClientInvalidHeader,
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl From<InvalidHeaderName> for CrawlerError {
    fn from(_err: InvalidHeaderName) -> Self {
        Self::UnprotectedClientInvalidHeader
    }
}

impl From<InvalidHeaderValue> for CrawlerError {
    fn from(_err: InvalidHeaderValue) -> Self {
        Self::UnprotectedClientInvalidHeader
    }
}
