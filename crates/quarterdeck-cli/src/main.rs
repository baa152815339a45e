mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let outcome = commands::run(&cli)?;
    output::render(&outcome, cli.format, cli.pretty)?;

    if cli.strict
        && (!outcome.envelope.meta.warnings.is_empty() || !outcome.envelope.errors.is_empty())
    {
        return Err(CliError::StrictModeViolation {
            warning_count: outcome.envelope.meta.warnings.len(),
            error_count: outcome.envelope.errors.len(),
        });
    }

    Ok(())
}
