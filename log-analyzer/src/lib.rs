pub mod analytics;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parse;
pub mod report;

pub use analytics::StatusCounters;
pub use error::AnalyzerError;
pub use ingest::count_recent_http_codes;
pub use report::Report;
