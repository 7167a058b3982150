//! Error types for dataset staging operations.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `StageError`.
pub type Result<T> = std::result::Result<T, StageError>;

/// Errors that can occur while staging a dataset archive.
#[derive(Error, Debug)]
pub enum StageError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The conventional source archive does not exist in the landing
    /// directory.
    #[error("archive not found: {path}")]
    ArchiveNotFound {
        /// The archive path that was probed.
        path: PathBuf,
    },

    /// The source file exists but the ZIP reader refused it.
    #[error("invalid archive {path}: {reason}")]
    InvalidArchive {
        /// Path of the offending archive.
        path: PathBuf,
        /// What the ZIP reader rejected.
        reason: String,
    },
}

impl StageError {
    /// Classifies a ZIP-crate error against the archive being read.
    ///
    /// I/O failures keep their `std::io::Error` identity; everything else
    /// the reader rejects (bad magic, truncated central directory, entries
    /// that cannot be contained in the destination) becomes
    /// [`StageError::InvalidArchive`].
    pub(crate) fn from_zip(err: zip::result::ZipError, path: &Path) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }

    /// Classifies the error from opening the source archive.
    ///
    /// `NotFound` is the missing-source case of the staging convention;
    /// every other kind (permissions, hardware) stays an I/O error.
    pub(crate) fn from_open(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::ArchiveNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }

    /// Returns a reason string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use destage_core::StageError;
    /// use std::path::PathBuf;
    ///
    /// let err = StageError::InvalidArchive {
    ///     path: PathBuf::from("data/landing/broken.zip"),
    ///     reason: "invalid Zip archive".to_string(),
    /// };
    /// assert_eq!(err.reason(), Some("invalid Zip archive"));
    ///
    /// let err = StageError::ArchiveNotFound {
    ///     path: PathBuf::from("data/landing/missing.zip"),
    /// };
    /// assert_eq!(err.reason(), None);
    /// ```
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
