pub mod metrics;
pub mod parse;
pub mod report;
