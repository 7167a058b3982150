//! CLI argument parsing using clap.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "destage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Datasets to stage, in the order given
    #[arg(value_name = "DATASET", required_unless_present = "completions")]
    pub datasets: Vec<String>,

    /// Directory containing landing-zone archives
    #[arg(long, value_name = "DIR", default_value = "data/landing")]
    pub landing_root: PathBuf,

    /// Directory under which datasets are extracted
    #[arg(long, value_name = "DIR", default_value = "data/raw")]
    pub raw_root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_dataset() {
        let cli = Cli::try_parse_from(["destage", "HHP_release3"]).unwrap();
        assert_eq!(cli.datasets, vec!["HHP_release3".to_string()]);
        assert_eq!(cli.landing_root, PathBuf::from("data/landing"));
        assert_eq!(cli.raw_root, PathBuf::from("data/raw"));
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_multiple_datasets_with_roots() {
        let cli = Cli::try_parse_from([
            "destage",
            "--landing-root",
            "/srv/landing",
            "--raw-root",
            "/srv/raw",
            "claims_2024",
            "members_2024",
        ])
        .unwrap();
        assert_eq!(cli.datasets.len(), 2);
        assert_eq!(cli.landing_root, PathBuf::from("/srv/landing"));
        assert_eq!(cli.raw_root, PathBuf::from("/srv/raw"));
    }

    #[test]
    fn test_requires_at_least_one_dataset() {
        assert!(Cli::try_parse_from(["destage"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["destage", "-q", "-v", "d"]).is_err());
    }

    #[test]
    fn test_completions_without_datasets() {
        let cli = Cli::try_parse_from(["destage", "--completions", "bash"]).unwrap();
        assert!(cli.datasets.is_empty());
        assert_eq!(cli.completions, Some(Shell::Bash));
    }
}
