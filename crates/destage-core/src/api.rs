//! High-level public API for staging dataset archives.

use std::fs;
use std::fs::File;
use std::time::Instant;

use crate::Result;
use crate::StageError;
use crate::StageLayout;
use crate::StageReport;
use crate::extract::extract_members;
use crate::types::DatasetName;

/// Stages one dataset from the landing area into raw storage.
///
/// Unpacks `<landing_root>/<name>.zip` into `<raw_root>/<name>/`. The
/// destination directory, including any missing parents, is created before
/// the archive is opened, and files already present in it are overwritten
/// by same-named archive members; everything else there is left alone.
/// Re-running the same staging call is therefore harmless.
///
/// # Arguments
///
/// * `name` - Dataset whose archive to stage
/// * `layout` - Landing and raw roots to derive paths from
///
/// # Errors
///
/// Returns an error if:
/// - No `<name>.zip` exists under the landing root
///   ([`ArchiveNotFound`](StageError::ArchiveNotFound))
/// - The file exists but the ZIP reader rejects it, or a member name
///   escapes the destination
///   ([`InvalidArchive`](StageError::InvalidArchive))
/// - Filesystem operations fail ([`Io`](StageError::Io))
///
/// The destination directory is created before the archive is touched, so
/// a failed call can leave an empty dataset directory behind.
///
/// # Examples
///
/// ```no_run
/// use destage_core::DatasetName;
/// use destage_core::StageLayout;
/// use destage_core::extract_dataset;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let layout = StageLayout::default();
/// let report = extract_dataset(&DatasetName::from("HHP_release3"), &layout)?;
/// println!("Staged {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_dataset(name: &DatasetName, layout: &StageLayout) -> Result<StageReport> {
    let started = Instant::now();

    let dest_dir = layout.dataset_dir(name);
    fs::create_dir_all(&dest_dir)?;

    let archive_path = layout.archive_path(name);
    let file = File::open(&archive_path).map_err(|e| StageError::from_open(e, &archive_path))?;

    let mut report = extract_members(file, &archive_path, &dest_dir)?;
    report.duration = started.elapsed();

    Ok(report)
}
