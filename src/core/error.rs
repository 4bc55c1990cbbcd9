//! Registry error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by registration and aggregation.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Unsupported scope: '{0}'")]
    UnsupportedScope(String),

    #[error("directory not found: `{0}`")]
    DirectoryNotFound(PathBuf, #[source] io::Error),

    #[error("file not found: `{0}`")]
    FileNotFound(PathBuf, #[source] io::Error),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

impl StyleError {
    /// Classify an error from listing a directory.
    pub(crate) fn from_dir(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::DirectoryNotFound(path.to_path_buf(), err),
            _ => Self::Io(path.to_path_buf(), err),
        }
    }

    /// Classify an error from reading a file.
    pub(crate) fn from_file(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound(path.to_path_buf(), err),
            _ => Self::Io(path.to_path_buf(), err),
        }
    }

    /// Path involved in a filesystem failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::UnsupportedScope(_) => None,
            Self::DirectoryNotFound(path, _) | Self::FileNotFound(path, _) | Self::Io(path, _) => {
                Some(path)
            }
        }
    }
}
