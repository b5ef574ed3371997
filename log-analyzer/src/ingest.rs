use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::{analytics::StatusCounters, error::AnalyzerError, parse::parse_log_line};

pub const LOG_FILE_PATTERN: &str = "Http-*.log";

/// Trailing interval ending at a fixed `now`. The lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    threshold: DateTime<Utc>,
}

impl Window {
    pub fn new(now: DateTime<Utc>, minutes: u32) -> Self {
        Self {
            threshold: now - TimeDelta::minutes(i64::from(minutes)),
        }
    }
    pub fn threshold(&self) -> DateTime<Utc> {
        self.threshold
    }
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.threshold
    }
}

/// What happened to the lines of one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileTally {
    pub lines: usize,
    pub counted: usize,
    pub unparsed: usize,
    pub stale: usize,
}

/// Lists the regular files in `dir` matching [`LOG_FILE_PATTERN`].
pub fn discover_log_files(dir: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
    let meta = fs::metadata(dir).map_err(AnalyzerError::io(dir))?;
    if !meta.is_dir() {
        return Err(AnalyzerError::io(dir)(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }
    let dir_str = dir
        .to_str()
        .ok_or_else(|| AnalyzerError::NonUtf8Path(dir.to_path_buf()))?;
    let pattern = Path::new(&glob::Pattern::escape(dir_str)).join(LOG_FILE_PATTERN);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Feeds every line of `path` through the parser and records the ones
/// inside `window`. Unparseable lines are skipped; I/O errors are not.
pub fn scan_file(
    path: &Path,
    window: Window,
    counters: &mut StatusCounters,
) -> Result<FileTally, AnalyzerError> {
    let file = File::open(path).map_err(AnalyzerError::io(path))?;
    let mut reader = BufReader::new(file);
    let mut tally = FileTally::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(AnalyzerError::io(path))?;
        if read == 0 {
            break;
        }
        tally.lines += 1;
        let line = String::from_utf8_lossy(&buf);
        match parse_log_line(line.trim_end_matches(['\r', '\n'])) {
            Some(record) if window.contains(record.timestamp) => {
                counters.record(record.status);
                tally.counted += 1;
            }
            Some(_) => tally.stale += 1,
            None => tally.unparsed += 1,
        }
    }
    Ok(tally)
}

/// Counts status codes of all `Http-*.log` records in `dir` dated within
/// `minutes` of `now`.
pub fn count_recent_http_codes(
    dir: &Path,
    minutes: u32,
    now: DateTime<Utc>,
) -> Result<StatusCounters, AnalyzerError> {
    let window = Window::new(now, minutes);
    info!(threshold = %window.threshold(), "counting records at or after threshold");

    let files = discover_log_files(dir)?;
    debug!(count = files.len(), dir = %dir.display(), "discovered log files");

    let mut counters = StatusCounters::default();
    for path in files {
        let FileTally {
            lines,
            counted,
            unparsed,
            stale,
        } = scan_file(&path, window, &mut counters)?;
        debug!(path = %path.display(), lines, counted, unparsed, stale, "scanned log file");
    }
    Ok(counters)
}
