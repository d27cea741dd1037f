use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{debug, info};

use crate::{
    errors::CrawlerError,
    request::Request,
    traits::{Crawler, CrawlerResponse, HttpMethod},
};

pub const PAGE_TIMEOUT_SECONDS: u64 = 10;

// retailers serve a stripped or blocked page to obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Plain HTTP crawler: one attempt per page, bounded by a fixed timeout
#[derive(Clone)]
pub struct UnprotectedCrawler {
    client: Client,
    timeout: Duration,
}

impl UnprotectedCrawler {
    pub fn new() -> Result<Self, CrawlerError> {
        Self::with_options(
            Duration::from_secs(PAGE_TIMEOUT_SECONDS),
            DEFAULT_USER_AGENT,
        )
    }

    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, CrawlerError> {
        let client = ClientBuilder::new()
            .gzip(true)
            .http1_ignore_invalid_headers_in_responses(true)
            .timeout(timeout)
            .user_agent(user_agent)
            .https_only(true)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Crawler for UnprotectedCrawler {
    async fn make_web_request(&self, request: Request) -> Result<CrawlerResponse, CrawlerError> {
        let mut request_builder = match request.method {
            HttpMethod::GET => self.client.get(request.url.clone()),
        };

        if let Some(headers) = &request.headers {
            let mut header_map = HeaderMap::new();

            for (key, value) in headers.iter() {
                header_map.append(HeaderName::from_str(key)?, HeaderValue::from_str(value)?);
            }

            request_builder = request_builder.headers(header_map);
        }

        info!("Sending request to {}", request.url);

        let response = match request_builder.send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return Err(CrawlerError::PageTimeout(request.url)),
            Err(err) => return Err(err.into()),
        };

        debug!("{response:?}");

        let status = response.status();

        if !status.is_success() {
            return Err(CrawlerError::UnexpectedStatus {
                url: request.url,
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if err.is_timeout() => return Err(CrawlerError::PageTimeout(request.url)),
            Err(err) => return Err(err.into()),
        };

        Ok(CrawlerResponse {
            body,
            status: status.as_u16(),
        })
    }
}
