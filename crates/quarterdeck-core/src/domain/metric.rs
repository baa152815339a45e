use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Unit a metric is denominated in. Applied at display time only; stored
/// values never carry units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    /// Millions of US dollars.
    UsdMillions,
    /// US dollars per diluted share.
    UsdPerShare,
}

/// Selectable company-level metric for the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "revenue")]
    Revenue,
    #[serde(rename = "operatingIncome")]
    OperatingIncome,
    #[serde(rename = "netIncome")]
    NetIncome,
    #[serde(rename = "adjustedEPS")]
    AdjustedEps,
    #[serde(rename = "freeCashFlow")]
    FreeCashFlow,
}

impl MetricKey {
    pub const ALL: [Self; 5] = [
        Self::Revenue,
        Self::OperatingIncome,
        Self::NetIncome,
        Self::AdjustedEps,
        Self::FreeCashFlow,
    ];

    /// Wire key as it appears in the published dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::OperatingIncome => "operatingIncome",
            Self::NetIncome => "netIncome",
            Self::AdjustedEps => "adjustedEPS",
            Self::FreeCashFlow => "freeCashFlow",
        }
    }

    /// Human-readable label for selection controls.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::OperatingIncome => "Operating Income",
            Self::NetIncome => "Net Income",
            Self::AdjustedEps => "Adjusted EPS",
            Self::FreeCashFlow => "Free Cash Flow",
        }
    }

    pub const fn unit(self) -> MetricUnit {
        match self {
            Self::AdjustedEps => MetricUnit::UsdPerShare,
            _ => MetricUnit::UsdMillions,
        }
    }
}

impl Display for MetricKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "revenue" => Ok(Self::Revenue),
            "operatingIncome" => Ok(Self::OperatingIncome),
            "netIncome" => Ok(Self::NetIncome),
            "adjustedEPS" => Ok(Self::AdjustedEps),
            "freeCashFlow" => Ok(Self::FreeCashFlow),
            other => Err(ValidationError::InvalidMetricKey {
                value: other.to_owned(),
            }),
        }
    }
}

/// Selectable business-segment metric for the segment chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentMetricKey {
    PackageAndCourier,
    LessThanTruckload,
    Truckload,
    Logistics,
}

impl SegmentMetricKey {
    pub const ALL: [Self; 4] = [
        Self::PackageAndCourier,
        Self::LessThanTruckload,
        Self::Truckload,
        Self::Logistics,
    ];

    /// Wire key as it appears in the published dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PackageAndCourier => "packageAndCourier",
            Self::LessThanTruckload => "lessThanTruckload",
            Self::Truckload => "truckload",
            Self::Logistics => "logistics",
        }
    }

    /// Human-readable label for selection controls.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PackageAndCourier => "Package and Courier",
            Self::LessThanTruckload => "Less-Than-Truckload",
            Self::Truckload => "Truckload",
            Self::Logistics => "Logistics",
        }
    }

    pub const fn unit(self) -> MetricUnit {
        MetricUnit::UsdMillions
    }
}

impl Display for SegmentMetricKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentMetricKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "packageAndCourier" => Ok(Self::PackageAndCourier),
            "lessThanTruckload" => Ok(Self::LessThanTruckload),
            "truckload" => Ok(Self::Truckload),
            "logistics" => Ok(Self::Logistics),
            other => Err(ValidationError::InvalidSegmentMetricKey {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_metric_key() {
        let key = MetricKey::from_str("operatingIncome").expect("must parse");
        assert_eq!(key, MetricKey::OperatingIncome);
        assert_eq!(key.label(), "Operating Income");
    }

    #[test]
    fn rejects_unknown_metric_key() {
        let err = MetricKey::from_str("ebitda").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidMetricKey { .. }));
    }

    #[test]
    fn eps_is_per_share_everything_else_millions() {
        assert_eq!(MetricKey::AdjustedEps.unit(), MetricUnit::UsdPerShare);
        assert_eq!(MetricKey::Revenue.unit(), MetricUnit::UsdMillions);
        assert_eq!(SegmentMetricKey::Truckload.unit(), MetricUnit::UsdMillions);
    }

    #[test]
    fn parses_segment_metric_key() {
        let key = SegmentMetricKey::from_str("lessThanTruckload").expect("must parse");
        assert_eq!(key, SegmentMetricKey::LessThanTruckload);
    }

    #[test]
    fn rejects_unknown_segment_metric_key() {
        let err = SegmentMetricKey::from_str("intermodal").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSegmentMetricKey { .. }));
    }
}
