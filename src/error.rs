use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that abort a scan.
///
/// Per-entry failures during the walk never surface here; they are logged and
/// the entry is skipped.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Failed to resolve scan root {path}: {source}")]
    RootUnavailable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan root is not valid UTF-8: {0}")]
    NonUtf8Root(String),

    #[error("Failed to read ignore file {path}: {source}")]
    IgnoreFileRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern on line {line}: {pattern}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to build ignore matcher: {0}")]
    MatcherBuild(#[from] ignore::Error),

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
