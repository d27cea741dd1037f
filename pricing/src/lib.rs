pub mod build_report;
pub mod errors;
pub mod product;
pub mod report_writer;
pub mod scraper;

#[cfg(test)]
pub(crate) mod test_utils;
