//! Error conversion utilities for CLI.
//!
//! Converts destage-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use destage_core::DatasetName;
use destage_core::StageError;
use destage_core::StageLayout;
use std::io::ErrorKind;

/// Converts `StageError` to user-friendly anyhow error with context
pub fn convert_stage_error(
    err: StageError,
    dataset: &DatasetName,
    layout: &StageLayout,
) -> anyhow::Error {
    match err {
        StageError::ArchiveNotFound { path } => {
            anyhow!(
                "No archive found for dataset '{dataset}': {}\n\
                 HINT: Expected '{dataset}.zip' under '{}'. Check the dataset name or pass --landing-root.",
                path.display(),
                layout.landing_root.display()
            )
        }
        StageError::InvalidArchive { path, reason } => {
            anyhow!(
                "Invalid archive for dataset '{dataset}' at '{}': {reason}\n\
                 HINT: The file may be truncated or not a ZIP archive. Re-download it into the landing directory.",
                path.display()
            )
        }
        StageError::Io(io_err) if io_err.kind() == ErrorKind::PermissionDenied => {
            anyhow!(
                "Permission denied while staging dataset '{dataset}': {io_err}\n\
                 HINT: Check write access to '{}' or pass --raw-root.",
                layout.raw_root.display()
            )
        }
        StageError::Io(io_err) => {
            anyhow!("I/O error while staging dataset '{dataset}': {io_err}")
        }
    }
}

/// Adds context to a staging error for one dataset
pub fn add_dataset_context<T>(
    result: Result<T, StageError>,
    dataset: &DatasetName,
    layout: &StageLayout,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_stage_error(e, dataset, layout))
}
