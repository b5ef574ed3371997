pub mod error;
pub mod files;
pub mod generator;

pub use error::GeneratorError;
pub use files::{LOG_FILE_PATTERN, log_file_name, purge_log_files, write_log_files};
