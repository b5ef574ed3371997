use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::models::LogRecord;

// Timestamp format for log entries: [25/Jul/2025:23:59:59 +0000]
pub const TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S +0000";

// First bracketed field, then the last `" NNN` token on the line.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[(.*?)\].*" (\d{3})\b"#).expect("valid line pattern")
});

/// Pulls the timestamp and status code out of an access-log line. Lines that
/// do not fit the pattern, or whose timestamp does not parse, yield `None`.
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let caps = LINE_PATTERN.captures(line)?;
    let timestamp = NaiveDateTime::parse_from_str(caps.get(1)?.as_str(), TS_FORMAT)
        .ok()?
        .and_utc();
    let status = caps.get(2)?.as_str().parse().ok()?;
    Some(LogRecord { timestamp, status })
}
