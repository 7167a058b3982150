//! Destage CLI - Command-line utility for staging landing-zone dataset
//! archives into raw storage.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(shell) = cli.completions {
        commands::completion::execute(shell);
        return Ok(());
    }

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    commands::extract::execute(&cli, &*formatter)
}
