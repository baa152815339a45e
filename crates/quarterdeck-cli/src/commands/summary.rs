use serde::Serialize;

use quarterdeck_core::{DashboardView, MetricKey, PeriodLabel, QuarterlyRecord};

use crate::error::CliError;
use crate::output::format_metric_value;

use super::CommandResult;

/// Metrics shown as headline cards, in display order.
const CARD_METRICS: [MetricKey; 3] = [
    MetricKey::Revenue,
    MetricKey::OperatingIncome,
    MetricKey::NetIncome,
];

#[derive(Debug, Serialize)]
struct SummaryCard {
    metric: MetricKey,
    label: &'static str,
    value: f64,
}

#[derive(Debug, Serialize)]
struct SummaryResponseData {
    quarter: PeriodLabel,
    cards: Vec<SummaryCard>,
    record: QuarterlyRecord,
}

pub fn run(view: &DashboardView) -> Result<CommandResult, CliError> {
    let latest = view.summary()?.clone();

    let cards: Vec<SummaryCard> = CARD_METRICS
        .into_iter()
        .map(|metric| SummaryCard {
            metric,
            label: metric.label(),
            value: latest.metric(metric),
        })
        .collect();

    let mut table = vec![format!("quarter          : {}", latest.period)];
    for card in &cards {
        table.push(format!(
            "{:<17}: {}",
            card.label,
            format_metric_value(card.value, card.metric.unit())
        ));
    }

    let data = SummaryResponseData {
        quarter: latest.period,
        cards,
        record: latest,
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_table(table))
}
