//! Progress spinner for staging operations.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::time::Duration;

/// Spinner shown while a dataset archive is being unpacked.
///
/// Member counts are not known before the archive is opened, so a spinner
/// is shown rather than a bar. Automatically cleans up on drop.
pub struct StageSpinner {
    bar: ProgressBar,
}

impl StageSpinner {
    /// Creates a new spinner with the given message.
    #[must_use]
    pub fn new(message: String) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Checks if the spinner should be shown (not quiet, not JSON, TTY).
    #[must_use]
    pub fn should_show(quiet: bool, json: bool) -> bool {
        !quiet && !json && Term::stdout().is_term()
    }
}

impl Drop for StageSpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_show_gating() {
        // Quiet and JSON silence the spinner regardless of TTY state.
        assert!(!StageSpinner::should_show(true, false));
        assert!(!StageSpinner::should_show(false, true));
        assert!(!StageSpinner::should_show(true, true));
    }

    #[test]
    fn test_spinner_create_and_drop() {
        let spinner = StageSpinner::new("Staging test".to_string());
        drop(spinner);
    }
}
