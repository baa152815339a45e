use serde::Serialize;

use quarterdeck_core::bundled;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct HighlightsResponseData {
    highlights: &'static [&'static str],
}

pub fn run() -> Result<CommandResult, CliError> {
    let highlights = bundled::key_highlights();

    let table = highlights
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>();

    let data = HighlightsResponseData { highlights };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_table(table))
}
