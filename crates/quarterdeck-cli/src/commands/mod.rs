mod highlights;
mod metrics;
mod segments;
mod summary;
mod trend;

use quarterdeck_core::{bundled, Envelope, EnvelopeError, EnvelopeMeta};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Payload produced by a command before envelope assembly.
pub struct CommandResult {
    pub data: Value,
    pub table: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            table: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Vec<String>) -> Self {
        self.table = table;
        self
    }
}

/// Envelope plus the pre-rendered table lines for `--format table`.
pub struct Outcome {
    pub envelope: Envelope<Value>,
    pub table: Vec<String>,
}

pub fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let mut view = bundled::dashboard_view()?;

    let command_result = match &cli.command {
        Command::Summary => summary::run(&view)?,
        Command::Trend(args) => trend::run(&mut view, args)?,
        Command::Segments(args) => segments::run(&mut view, args)?,
        Command::Highlights => highlights::run()?,
        Command::Metrics => metrics::run()?,
    };

    let CommandResult {
        data,
        table,
        warnings,
        errors,
    } = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), "v1.0.0")?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    let envelope = Envelope::with_errors(meta, data, errors)?;

    Ok(Outcome { envelope, table })
}
