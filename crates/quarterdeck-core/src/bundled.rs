//! Bundled TFI International reference dataset, Q2 2022 through Q2 2024.
//!
//! Figures are the published quarterly results; units are USD millions
//! except adjusted EPS (USD per diluted share). The segment series covers a
//! shorter window than the company series, which is permitted; the two are
//! independent.

use crate::dataset::{QuarterlySeries, SegmentSeries};
use crate::domain::{PeriodLabel, QuarterlyRecord, SegmentRecord};
use crate::view::DashboardView;
use crate::ValidationError;

const QUARTERLY: [(&str, f64, f64, f64, f64, f64); 9] = [
    ("Q2 2022", 2422.3, 391.0, 276.8, 2.61, 309.6),
    ("Q3 2022", 2242.0, 318.4, 245.2, 2.01, 191.7),
    ("Q4 2022", 1956.7, 216.9, 153.5, 1.72, 120.3),
    ("Q1 2023", 1850.2, 166.4, 111.9, 1.33, 195.7),
    ("Q2 2023", 1791.3, 192.4, 128.2, 1.59, 138.1),
    ("Q3 2023", 1911.0, 200.6, 133.3, 1.57, 191.8),
    ("Q4 2023", 1968.7, 198.3, 131.4, 1.71, 191.5),
    ("Q1 2024", 1870.8, 151.6, 92.8, 1.24, 137.2),
    ("Q2 2024", 2264.5, 208.1, 117.8, 1.71, 151.4),
];

const SEGMENTS: [(&str, f64, f64, f64, f64); 2] = [
    ("Q1 2024", 18.2, 66.9, 41.5, 40.2),
    ("Q2 2024", 24.0, 109.9, 83.3, 50.6),
];

const KEY_HIGHLIGHTS: [&str; 5] = [
    "Q2 2024 revenue increased to $2,264.5M, up from $1,791.3M in Q2 2023.",
    "Operating income grew to $208.1M from $192.4M in the same quarter last year.",
    "Net income slightly decreased to $117.8M compared to $128.2M in Q2 2023.",
    "Adjusted earnings per share (diluted) were $1.71, compared to $1.59 in Q2 2023.",
    "Free cash flow improved to $151.4M from $138.1M in Q2 2023.",
];

/// The nine-quarter company-wide series.
pub fn quarterly_series() -> Result<QuarterlySeries, ValidationError> {
    let records = QUARTERLY
        .iter()
        .map(
            |&(label, revenue, operating_income, net_income, adjusted_eps, free_cash_flow)| {
                QuarterlyRecord::new(
                    PeriodLabel::parse(label)?,
                    revenue,
                    operating_income,
                    net_income,
                    adjusted_eps,
                    free_cash_flow,
                )
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    QuarterlySeries::new(records)
}

/// The two-quarter business-segment series.
pub fn segment_series() -> Result<SegmentSeries, ValidationError> {
    let records = SEGMENTS
        .iter()
        .map(
            |&(label, package_and_courier, less_than_truckload, truckload, logistics)| {
                SegmentRecord::new(
                    PeriodLabel::parse(label)?,
                    package_and_courier,
                    less_than_truckload,
                    truckload,
                    logistics,
                )
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    SegmentSeries::new(records)
}

/// Narrative highlights accompanying the latest quarter.
pub const fn key_highlights() -> &'static [&'static str] {
    &KEY_HIGHLIGHTS
}

/// A fresh view over the bundled datasets with default selections.
pub fn dashboard_view() -> Result<DashboardView, ValidationError> {
    Ok(DashboardView::new(quarterly_series()?, segment_series()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_series_validate() {
        let quarterly = quarterly_series().expect("quarterly series must validate");
        let segments = segment_series().expect("segment series must validate");

        assert_eq!(quarterly.len(), 9);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn latest_quarter_is_q2_2024() {
        let quarterly = quarterly_series().expect("quarterly series");
        let latest = quarterly.latest().expect("latest");

        assert_eq!(latest.period.to_string(), "Q2 2024");
        assert_eq!(latest.revenue, 2264.5);
    }

    #[test]
    fn highlights_cover_five_items() {
        assert_eq!(key_highlights().len(), 5);
    }
}
