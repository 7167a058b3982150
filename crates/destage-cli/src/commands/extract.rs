//! Staging command implementation.

use crate::cli::Cli;
use crate::error::add_dataset_context;
use crate::output::DatasetOutcome;
use crate::output::OutputFormatter;
use crate::progress::StageSpinner;
use anyhow::Result;
use destage_core::DatasetName;
use destage_core::StageLayout;
use destage_core::extract_dataset;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let layout = StageLayout::new(&cli.landing_root, &cli.raw_root);

    let mut outcomes = Vec::with_capacity(cli.datasets.len());

    for raw_name in &cli.datasets {
        let dataset = DatasetName::from(raw_name.as_str());

        // Show a spinner on interactive terminals (not quiet, not JSON)
        let report = if StageSpinner::should_show(cli.quiet, cli.json) {
            let _spinner = StageSpinner::new(format!("Staging {dataset}"));
            add_dataset_context(extract_dataset(&dataset, &layout), &dataset, &layout)?
        } else {
            add_dataset_context(extract_dataset(&dataset, &layout), &dataset, &layout)?
        };

        outcomes.push(DatasetOutcome {
            dataset: dataset.to_string(),
            dataset_dir: layout.dataset_dir(&dataset),
            report,
        });
    }

    formatter.format_extract_results(&outcomes)?;

    Ok(())
}
