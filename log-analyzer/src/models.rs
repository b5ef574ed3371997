use chrono::{DateTime, Utc};

use crate::invariants::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub status: StatusCode,
}
