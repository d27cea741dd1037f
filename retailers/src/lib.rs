pub mod errors;
pub mod retailers;
pub mod structures;
pub(crate) mod utils;

pub use retailers::extractor_for;
