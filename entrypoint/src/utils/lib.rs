pub mod builds;
pub mod cli;
pub mod logger;
