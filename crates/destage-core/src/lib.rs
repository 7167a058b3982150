//! Dataset staging library for landing-zone ZIP archives.
//!
//! `destage-core` unpacks each dataset's archive from the landing area into
//! its own directory under raw storage, following the fixed convention
//! `<landing_root>/<name>.zip` -> `<raw_root>/<name>/`. The destination
//! directory is created on demand, and re-staging a dataset overwrites its
//! files in place.
//!
//! # Examples
//!
//! ```no_run
//! use destage_core::DatasetName;
//! use destage_core::StageLayout;
//! use destage_core::extract_dataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = StageLayout::default();
//! let report = extract_dataset(&DatasetName::from("HHP_release3"), &layout)?;
//! println!("Staged {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
mod extract;
pub mod report;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_dataset;
pub use config::StageLayout;
pub use error::Result;
pub use error::StageError;
pub use report::StageReport;
pub use types::DatasetName;
