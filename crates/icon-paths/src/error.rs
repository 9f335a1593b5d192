//! Error types for path operations.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors from filesystem primitives.
#[derive(Debug, Error)]
pub enum PathError {
    /// Failed to remove a file.
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a symbolic link.
    ///
    /// Kept distinct from [`PathError::Write`] so callers can treat a stale
    /// published link differently from a failed real-file write.
    #[error("failed to link {link} -> {target}: {source}")]
    Symlink {
        link: Utf8PathBuf,
        target: Utf8PathBuf,
        source: std::io::Error,
    },
}
