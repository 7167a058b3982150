//! Output formatter trait for CLI results.

use anyhow::Result;
use destage_core::StageReport;
use serde::Serialize;
use std::path::PathBuf;

/// Staging result for one dataset, ready for display.
pub struct DatasetOutcome {
    /// Dataset name as given on the command line.
    pub dataset: String,
    /// Directory the dataset was extracted into.
    pub dataset_dir: PathBuf,
    /// Statistics from the staging call.
    pub report: StageReport,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the results of staging one or more datasets
    fn format_extract_results(&self, outcomes: &[DatasetOutcome]) -> Result<()>;

    /// Format error message
    #[allow(dead_code)]
    fn format_error(&self, error: &anyhow::Error);

    /// Format success message
    #[allow(dead_code)]
    fn format_success(&self, message: &str);
}

/// Envelope wrapped around every JSON payload the CLI emits.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome marker in the JSON envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    #[allow(dead_code)]
    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> Envelope<()> {
        Envelope {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
