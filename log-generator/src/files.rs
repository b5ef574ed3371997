use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::{error::GeneratorError, generator::generate_access_log};

/// Name pattern the analyzer scans for.
pub const LOG_FILE_PATTERN: &str = "Http-*.log";

pub fn log_file_name(index: usize) -> String {
    format!("Http-{index:02}.log")
}

// `dir` is escaped so glob metacharacters in it match literally.
fn log_file_glob(dir: &Path) -> Result<String, GeneratorError> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| GeneratorError::NonUtf8Path(dir.to_path_buf()))?;
    let escaped = glob::Pattern::escape(dir_str);
    Ok(Path::new(&escaped)
        .join(LOG_FILE_PATTERN)
        .to_string_lossy()
        .into_owned())
}

/// Removes every regular file in `dir` matching [`LOG_FILE_PATTERN`].
pub fn purge_log_files(dir: &Path) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut removed = Vec::new();
    for entry in glob::glob(&log_file_glob(dir)?)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        fs::remove_file(&path).map_err(GeneratorError::io(&path))?;
        debug!(path = %path.display(), "removed old log file");
        removed.push(path);
    }
    Ok(removed)
}

/// Writes `files` log files of `entries` lines each into `dir`, numbered
/// from 1. Every entry is dated relative to the same `now`.
pub fn write_log_files<R: Rng + ?Sized>(
    dir: &Path,
    files: usize,
    entries: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let mut created = Vec::with_capacity(files);
    for index in 1..=files {
        let path = dir.join(log_file_name(index));
        let file = File::create(&path).map_err(GeneratorError::io(&path))?;
        write_entries(&path, BufWriter::new(file), entries, rng, now)?;
        info!(path = %path.display(), entries, "wrote log file");
        created.push(path);
    }
    Ok(created)
}

fn write_entries<W: Write, R: Rng + ?Sized>(
    path: &Path,
    mut writer: W,
    entries: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<(), GeneratorError> {
    for _ in 0..entries {
        let line = generate_access_log(rng, now)?;
        writeln!(writer, "{line}").map_err(|e| GeneratorError::io(path)(e))?;
    }
    writer.flush().map_err(GeneratorError::io(path))
}
