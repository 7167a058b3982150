//! JSON output formatter for machine-readable results.

use super::formatter::DatasetOutcome;
use super::formatter::Envelope;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extract_results(&self, outcomes: &[DatasetOutcome]) -> Result<()> {
        #[derive(Serialize)]
        struct DatasetOutput {
            dataset: String,
            dataset_dir: String,
            files_extracted: usize,
            directories_created: usize,
            bytes_written: u64,
            duration_ms: u128,
        }

        #[derive(Serialize)]
        struct Totals {
            files_extracted: usize,
            directories_created: usize,
            bytes_written: u64,
        }

        #[derive(Serialize)]
        struct ExtractOutput {
            datasets: Vec<DatasetOutput>,
            totals: Totals,
        }

        let datasets: Vec<DatasetOutput> = outcomes
            .iter()
            .map(|o| DatasetOutput {
                dataset: o.dataset.clone(),
                dataset_dir: o.dataset_dir.display().to_string(),
                files_extracted: o.report.files_extracted,
                directories_created: o.report.directories_created,
                bytes_written: o.report.bytes_written,
                duration_ms: o.report.duration.as_millis(),
            })
            .collect();

        let totals = Totals {
            files_extracted: outcomes.iter().map(|o| o.report.files_extracted).sum(),
            directories_created: outcomes.iter().map(|o| o.report.directories_created).sum(),
            bytes_written: outcomes.iter().map(|o| o.report.bytes_written).sum(),
        };

        let output = Envelope::success("extract", ExtractOutput { datasets, totals });
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = Envelope::<()>::error("extract", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_success(&self, message: &str) {
        #[derive(Serialize)]
        struct SuccessData {
            message: String,
        }

        let output = Envelope::success(
            "extract",
            SuccessData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_structure() {
        let output = Envelope::success("extract", vec!["x"]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"operation\":\"extract\""));
        assert!(json.contains("\"status\":\"success\""));
    }

    #[test]
    fn test_error_envelope_skips_data() {
        let output = Envelope::<()>::error("extract", "boom");
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("\"error\":\"boom\""));
        assert!(!json.contains("\"data\""));
    }
}
