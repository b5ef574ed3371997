use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot list log files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("directory path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
