use serde::Serialize;

use quarterdeck_core::{DashboardView, ProjectedPoint, SegmentMetricKey};

use crate::cli::SegmentsArgs;
use crate::error::CliError;
use crate::output::format_metric_value;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SegmentsResponseData {
    metric: SegmentMetricKey,
    label: &'static str,
    points: Vec<ProjectedPoint>,
}

pub fn run(view: &mut DashboardView, args: &SegmentsArgs) -> Result<CommandResult, CliError> {
    let metric = args.metric.parse::<SegmentMetricKey>()?;
    view.select_segment_metric(metric);

    let points = view.segment_trend();

    let mut table = vec![format!("segment : {} ({})", metric.label(), metric)];
    for point in &points {
        table.push(format!(
            "{:<8} {}",
            point.period.to_string(),
            format_metric_value(point.value, metric.unit())
        ));
    }

    let data = SegmentsResponseData {
        metric,
        label: metric.label(),
        points,
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_table(table))
}
