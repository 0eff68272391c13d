//! Errors raised while writing ignore files to disk.

use std::io;
use std::path::PathBuf;

/// Error produced when an ignore file cannot be written.
///
/// Pattern operations never fail; only synthesis to the filesystem does.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// I/O error while creating directories or writing file contents.
    #[error("failed to write ignore file {path}: {source}")]
    Io {
        /// The path being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The ignore file path is empty, absolute, or escapes the output root.
    #[error("invalid ignore file path '{}'", .0.display())]
    InvalidPath(PathBuf),
}

impl SynthError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Maps I/O results to [`SynthError`] with path context.
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, SynthError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, SynthError> {
        self.map_err(|e| SynthError::io(path, e))
    }
}
