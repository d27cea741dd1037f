use async_trait::async_trait;

use crate::{errors::CrawlerError, request::Request};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpMethod {
    GET,
}

#[derive(Debug, Clone)]
pub struct CrawlerResponse {
    pub body: String,
    pub status: u16,
}

/// Anything that can turn a `Request` into a page body.
///
/// Price lookups only depend on this trait, so the network client can be
/// swapped out without touching the cache.
#[async_trait]
pub trait Crawler: Send + Sync {
    async fn make_web_request(&self, request: Request) -> Result<CrawlerResponse, CrawlerError>;
}
