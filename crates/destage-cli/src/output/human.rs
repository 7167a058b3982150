//! Human-readable output formatter with colors and styling.

use super::formatter::DatasetOutcome;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::time::Duration;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;
        const TB: u64 = GB * 1024;

        if bytes >= TB {
            format!("{:.1} TB", bytes as f64 / TB as f64)
        } else if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extract_results(&self, outcomes: &[DatasetOutcome]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for outcome in outcomes {
            let line = if self.use_colors {
                format!(
                    "{} Staged {} -> {}",
                    style("✓").green().bold(),
                    outcome.dataset,
                    outcome.dataset_dir.display()
                )
            } else {
                format!(
                    "Staged {} -> {}",
                    outcome.dataset,
                    outcome.dataset_dir.display()
                )
            };
            let _ = self.term.write_line(&line);
        }

        let files: usize = outcomes.iter().map(|o| o.report.files_extracted).sum();
        let dirs: usize = outcomes.iter().map(|o| o.report.directories_created).sum();
        let bytes: u64 = outcomes.iter().map(|o| o.report.bytes_written).sum();

        let _ = self.term.write_line(&format!("  Files extracted: {files}"));
        let _ = self.term.write_line(&format!("  Directories: {dirs}"));
        let _ = self
            .term
            .write_line(&format!("  Total size: {}", Self::format_size(bytes)));

        if self.verbose {
            let duration: Duration = outcomes.iter().map(|o| o.report.duration).sum();
            let _ = self.term.write_line(&format!("  Duration: {duration:?}"));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Errors go to stderr and are shown even in quiet mode
        let line = if self.use_colors {
            format!("{} {error:?}", style("ERROR:").red().bold())
        } else {
            format!("ERROR: {error:?}")
        };
        let _ = Term::stderr().write_line(&line);
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let line = if self.use_colors {
            format!("{} {message}", style("✓").green().bold())
        } else {
            message.to_string()
        };
        let _ = self.term.write_line(&line);
    }
}
