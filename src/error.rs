use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Base-path validation
    #[error("path not found")]
    NotFound(PathBuf),

    #[error("not a directory")]
    NotADirectory(PathBuf),

    // Rule construction
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    // Traversal & metadata
    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FindError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p) | Self::NotADirectory(p) | Self::Io { path: p, .. } => Some(p),
            Self::InvalidPattern(_) => None,
        }
    }

    /// Whether the search can continue after this error.
    ///
    /// Metadata reads that fail mid-traversal (permission denied, a file
    /// removed between listing and stat) are recoverable — the executor's
    /// ignore policy decides whether they become non-matches or abort.
    ///
    /// Bad base paths and unparseable patterns are configuration errors and
    /// always fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Wrap an `io::Error` with the path it occurred at.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
