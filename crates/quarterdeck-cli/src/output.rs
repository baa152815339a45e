use quarterdeck_core::MetricUnit;

use crate::cli::OutputFormat;
use crate::commands::Outcome;
use crate::error::CliError;

pub fn render(outcome: &Outcome, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&outcome.envelope)?
            } else {
                serde_json::to_string(&outcome.envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(outcome)?,
    }

    Ok(())
}

/// Display-time money formatting; stored values stay unit-free.
pub fn format_metric_value(value: f64, unit: MetricUnit) -> String {
    match unit {
        MetricUnit::UsdMillions => format!("${value:.1}M"),
        MetricUnit::UsdPerShare => format!("${value:.2}"),
    }
}

fn render_table(outcome: &Outcome) -> Result<(), CliError> {
    let envelope = &outcome.envelope;

    println!("request_id  : {}", envelope.meta.request_id);
    println!("schema      : {}", envelope.meta.schema_version);
    println!("generated_at: {}", envelope.meta.generated_at);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    if outcome.table.is_empty() {
        println!("data:");
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        for line in pretty_data.lines() {
            println!("  {line}");
        }
    } else {
        for line in &outcome.table {
            println!("{line}");
        }
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_millions_to_one_decimal() {
        assert_eq!(
            format_metric_value(2264.5, MetricUnit::UsdMillions),
            "$2264.5M"
        );
    }

    #[test]
    fn formats_per_share_to_two_decimals() {
        assert_eq!(
            format_metric_value(1.71, MetricUnit::UsdPerShare),
            "$1.71"
        );
    }
}
