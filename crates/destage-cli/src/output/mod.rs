//! Output formatting module.

mod formatter;
mod human;
mod json;

pub use formatter::DatasetOutcome;
pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;

/// Creates an output formatter based on CLI flags
pub fn create_formatter(json: bool, verbose: bool, quiet: bool) -> Box<dyn OutputFormatter> {
    // Quiet wins over JSON; the human formatter silences itself when quiet.
    if json && !quiet {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(verbose, quiet))
    }
}
