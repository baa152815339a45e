use serde::Serialize;

use quarterdeck_core::{DashboardView, MetricKey, ProjectedPoint};

use crate::cli::TrendArgs;
use crate::error::CliError;
use crate::output::format_metric_value;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct TrendResponseData {
    metric: MetricKey,
    label: &'static str,
    points: Vec<ProjectedPoint>,
}

pub fn run(view: &mut DashboardView, args: &TrendArgs) -> Result<CommandResult, CliError> {
    let metric = args.metric.parse::<MetricKey>()?;
    view.select_metric(metric);

    let points = view.company_trend();

    let mut table = vec![format!("metric  : {} ({})", metric.label(), metric)];
    for point in &points {
        table.push(format!(
            "{:<8} {}",
            point.period.to_string(),
            format_metric_value(point.value, metric.unit())
        ));
    }

    let data = TrendResponseData {
        metric,
        label: metric.label(),
        points,
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_table(table))
}
