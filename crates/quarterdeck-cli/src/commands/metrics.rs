use serde::Serialize;

use quarterdeck_core::{MetricKey, MetricUnit, SegmentMetricKey};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct MetricOption {
    key: &'static str,
    label: &'static str,
    unit: MetricUnit,
}

#[derive(Debug, Serialize)]
struct MetricsResponseData {
    company: Vec<MetricOption>,
    segments: Vec<MetricOption>,
}

pub fn run() -> Result<CommandResult, CliError> {
    let company: Vec<MetricOption> = MetricKey::ALL
        .into_iter()
        .map(|key| MetricOption {
            key: key.as_str(),
            label: key.label(),
            unit: key.unit(),
        })
        .collect();

    let segments: Vec<MetricOption> = SegmentMetricKey::ALL
        .into_iter()
        .map(|key| MetricOption {
            key: key.as_str(),
            label: key.label(),
            unit: key.unit(),
        })
        .collect();

    let mut table = vec![String::from("company metrics:")];
    for option in &company {
        table.push(format!("  {:<18} {}", option.key, option.label));
    }
    table.push(String::from("segment metrics:"));
    for option in &segments {
        table.push(format!("  {:<18} {}", option.key, option.label));
    }

    let data = MetricsResponseData { company, segments };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_table(table))
}
