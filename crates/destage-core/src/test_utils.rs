//! Test fixtures for staging scenarios.
//!
//! This module provides reusable helpers for creating landing-zone ZIP
//! fixtures in memory and on disk, reducing duplication across unit,
//! integration, and CLI tests.
//!
//! # Panics
//!
//! All helpers in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Options for file members: deflate-compressed, mode 0o644.
fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644)
}

/// Options for directory members: mode 0o755.
fn dir_options() -> SimpleFileOptions {
    SimpleFileOptions::default().unix_permissions(0o755)
}

/// Creates an in-memory ZIP archive from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are deflate-compressed
/// with mode 0o644, matching how upstream providers package dataset
/// releases.
///
/// # Examples
///
/// ```
/// use destage_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("a.txt", b"alpha"), ("sub/b.txt", b"beta")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(ZipFixtureBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Writes a ZIP archive with the given entries to `path`.
///
/// Missing parent directories of `path` are created, so fixtures can be
/// dropped straight into a fresh landing root.
///
/// # Examples
///
/// ```no_run
/// use destage_core::test_utils::write_zip_fixture;
/// use std::path::Path;
///
/// write_zip_fixture(
///     Path::new("data/landing/HHP_release3.zip"),
///     vec![("a.txt", b"alpha")],
/// );
/// ```
pub fn write_zip_fixture(path: &Path, entries: Vec<(&str, &[u8])>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, create_test_zip(entries)).unwrap();
}

/// Writes bytes at `path` that no ZIP reader will accept.
pub fn write_invalid_fixture(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"this is not a zip archive").unwrap();
}

/// Builder for ZIP fixtures that need explicit directory members.
///
/// # Examples
///
/// ```
/// use destage_core::test_utils::ZipFixtureBuilder;
///
/// let zip_data = ZipFixtureBuilder::new()
///     .add_file("a.txt", b"alpha")
///     .add_directory("sub/")
///     .build();
/// ```
pub struct ZipFixtureBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipFixtureBuilder {
    /// Creates a new ZIP fixture builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file to the archive.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        self.writer.start_file(path, file_options()).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Adds a directory member to the archive.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        self.writer.add_directory(path, dir_options()).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }

    /// Builds the archive and writes it to `path`, creating parents.
    pub fn write_to(self, path: &Path) {
        let bytes = self.build();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
    }
}

impl Default for ZipFixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_create_test_zip_is_readable() {
        let zip_data = create_test_zip(vec![("file.txt", b"hello")]);

        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.by_index(0).unwrap().name(), "file.txt");
    }

    #[test]
    fn test_write_zip_fixture_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("landing").join("d.zip");
        write_zip_fixture(&path, vec![("file.txt", b"hello")]);
        assert!(path.is_file());
    }

    #[test]
    fn test_builder_records_both_member_kinds() {
        let zip_data = ZipFixtureBuilder::new()
            .add_file("readme.txt", b"notes")
            .add_directory("models/")
            .build();

        let mut archive = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive.by_name("models/").unwrap().is_dir());
    }

    #[test]
    fn test_invalid_fixture_is_rejected_by_reader() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.zip");
        write_invalid_fixture(&path);

        let file = std::fs::File::open(&path).unwrap();
        assert!(zip::ZipArchive::new(file).is_err());
    }
}
