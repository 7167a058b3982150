//! Staging operation reporting.

use std::time::Duration;

/// Report of a dataset staging operation.
///
/// Contains statistics about what a single staging call wrote to the
/// dataset directory.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    /// Number of files written into the dataset directory.
    pub files_extracted: usize,

    /// Number of explicit directory members created from the archive.
    ///
    /// Only directories the archive lists as members are counted; the
    /// dataset directory itself and parents created implicitly for file
    /// members are not.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the staging operation.
    pub duration: Duration,
}

impl StageReport {
    /// Creates a new empty staging report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of archive members materialized.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}
