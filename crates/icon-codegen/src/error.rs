//! Error types for code generation.

use camino::Utf8PathBuf;
use icon_paths::PathError;
use thiserror::Error;

/// Errors raised while materializing generated files.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A filesystem primitive failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The options object could not be serialized.
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read an existing file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}
