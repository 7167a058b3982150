//! Filesystem layout conventions for staged datasets.

use std::path::PathBuf;

use crate::types::DatasetName;

/// Directory layout for the landing and raw staging areas.
///
/// The layout fixes where source archives are picked up and where extracted
/// datasets land:
///
/// - source archive: `<landing_root>/<dataset>.zip`
/// - destination directory: `<raw_root>/<dataset>/`
///
/// Both roots can be repointed; the per-dataset naming convention under them
/// cannot.
///
/// # Examples
///
/// ```
/// use destage_core::DatasetName;
/// use destage_core::StageLayout;
/// use std::path::PathBuf;
///
/// let layout = StageLayout::default()
///     .with_landing_root("/mnt/ingest/landing")
///     .with_raw_root("/mnt/ingest/raw");
///
/// let name = DatasetName::from("HHP_release3");
/// assert_eq!(
///     layout.archive_path(&name),
///     PathBuf::from("/mnt/ingest/landing/HHP_release3.zip")
/// );
/// assert_eq!(
///     layout.dataset_dir(&name),
///     PathBuf::from("/mnt/ingest/raw/HHP_release3")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLayout {
    /// Directory where source archives are dropped.
    pub landing_root: PathBuf,

    /// Directory under which extracted datasets are written.
    pub raw_root: PathBuf,
}

impl Default for StageLayout {
    /// Creates the conventional relative layout.
    ///
    /// Default values:
    /// - `landing_root`: `data/landing`
    /// - `raw_root`: `data/raw`
    fn default() -> Self {
        Self {
            landing_root: PathBuf::from("data/landing"),
            raw_root: PathBuf::from("data/raw"),
        }
    }
}

impl StageLayout {
    /// Creates a layout with explicit landing and raw roots.
    #[must_use]
    pub fn new(landing_root: impl Into<PathBuf>, raw_root: impl Into<PathBuf>) -> Self {
        Self {
            landing_root: landing_root.into(),
            raw_root: raw_root.into(),
        }
    }

    /// Replaces the landing root, keeping the raw root.
    #[must_use]
    pub fn with_landing_root(mut self, landing_root: impl Into<PathBuf>) -> Self {
        self.landing_root = landing_root.into();
        self
    }

    /// Replaces the raw root, keeping the landing root.
    #[must_use]
    pub fn with_raw_root(mut self, raw_root: impl Into<PathBuf>) -> Self {
        self.raw_root = raw_root.into();
        self
    }

    /// Path of the source archive for `name` under the landing root.
    #[must_use]
    pub fn archive_path(&self, name: &DatasetName) -> PathBuf {
        self.landing_root.join(format!("{}.zip", name.as_str()))
    }

    /// Destination directory for `name` under the raw root.
    #[must_use]
    pub fn dataset_dir(&self, name: &DatasetName) -> PathBuf {
        self.raw_root.join(name.as_str())
    }
}
