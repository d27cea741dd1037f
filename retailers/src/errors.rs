use crawler::errors::CrawlerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetailerError {
    #[error("Failed to fetch page")]
    CrawlerFailed(#[from] CrawlerError),
    #[error("Failed to parse price: {0}")]
    InvalidNumber(String),
    #[error("Missing attribute {0} from element {1}")]
    HtmlElementMissingAttribute(String, String),
    #[error("Missing element {0} from HTML")]
    HtmlMissingElement(String),
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
