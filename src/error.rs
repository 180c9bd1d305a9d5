use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeverError {
    // Traversal
    #[error("cannot open directory {}: {source}", path.display())]
    ScanOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read directory {}: {source}", path.display())]
    ScanRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config
    #[error("invalid type filter `{0}` (expected any, file or dir)")]
    InvalidTypeFilter(String),
}

impl HeverError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ScanOpen { path, .. }
            | Self::ScanRead { path, .. }
            | Self::Metadata { path, .. } => Some(path),
            Self::InvalidTypeFilter(_) => None,
        }
    }

    /// The underlying I/O error, if this error came from the filesystem.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::ScanOpen { source, .. }
            | Self::ScanRead { source, .. }
            | Self::Metadata { source, .. } => Some(source),
            Self::InvalidTypeFilter(_) => None,
        }
    }
}
