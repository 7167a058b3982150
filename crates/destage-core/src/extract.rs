//! ZIP member extraction into a dataset directory.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::error::StageError;
use crate::report::StageReport;

/// Unpacks every member of `file` under `dest_dir`.
///
/// Member paths are interpreted relative to `dest_dir`, and files that
/// already exist at a member's target path are overwritten in place. An
/// entry whose name cannot be contained under the destination (absolute
/// path or a `..` component) fails the whole operation as an invalid
/// archive before anything is written for it.
pub fn extract_members(file: File, archive_path: &Path, dest_dir: &Path) -> Result<StageReport> {
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| StageError::from_zip(e, archive_path))?;

    let mut report = StageReport::new();

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| StageError::from_zip(e, archive_path))?;

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| StageError::InvalidArchive {
                path: archive_path.to_path_buf(),
                reason: format!("entry escapes destination: {}", entry.name()),
            })?;
        let target = dest_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            report.directories_created += 1;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = File::create(&target)?;
            let written = io::copy(&mut entry, &mut out)?;
            report.files_extracted += 1;
            report.bytes_written += written;
        }
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::test_utils::ZipFixtureBuilder;
    use crate::test_utils::create_test_zip;

    fn open_fixture(temp: &TempDir, bytes: &[u8]) -> File {
        let path = temp.path().join("fixture.zip");
        fs::write(&path, bytes).unwrap();
        File::open(path).unwrap()
    }

    #[test]
    fn test_escaping_entry_fails_as_invalid_archive() {
        let temp = TempDir::new().unwrap();
        let bytes = create_test_zip(vec![("../evil.txt", b"gotcha")]);
        let file = open_fixture(&temp, &bytes);

        let dest = temp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();

        let err = extract_members(file, Path::new("fixture.zip"), &dest).unwrap_err();
        assert!(matches!(err, StageError::InvalidArchive { .. }));
        assert!(!temp.path().join("evil.txt").exists());
    }

    #[test]
    fn test_directory_members_are_counted() {
        let temp = TempDir::new().unwrap();
        let bytes = ZipFixtureBuilder::new()
            .add_directory("models/")
            .add_file("models/readme.txt", b"hello")
            .build();
        let file = open_fixture(&temp, &bytes);

        let dest = temp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();

        let report = extract_members(file, Path::new("fixture.zip"), &dest).unwrap();
        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_extracted, 1);
        assert!(dest.join("models").is_dir());
        assert!(dest.join("models/readme.txt").is_file());
    }

    #[test]
    fn test_existing_files_are_overwritten() {
        let temp = TempDir::new().unwrap();
        let bytes = create_test_zip(vec![("a.txt", b"new contents")]);
        let file = open_fixture(&temp, &bytes);

        let dest = temp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("a.txt"), "old contents").unwrap();

        let report = extract_members(file, Path::new("fixture.zip"), &dest).unwrap();
        assert_eq!(report.files_extracted, 1);
        assert_eq!(
            fs::read_to_string(dest.join("a.txt")).unwrap(),
            "new contents"
        );
    }

    #[test]
    fn test_parents_of_nested_members_are_created() {
        let temp = TempDir::new().unwrap();
        let bytes = create_test_zip(vec![("deep/er/still/b.txt", b"beta")]);
        let file = open_fixture(&temp, &bytes);

        let dest = temp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();

        let report = extract_members(file, Path::new("fixture.zip"), &dest).unwrap();
        // Implicit parents come from the file member, not directory members.
        assert_eq!(report.directories_created, 0);
        assert_eq!(report.files_extracted, 1);
        assert_eq!(
            fs::read_to_string(dest.join("deep/er/still/b.txt")).unwrap(),
            "beta"
        );
    }
}
