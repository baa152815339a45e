use serde::{Deserialize, Serialize};

use crate::domain::{MetricKey, PeriodLabel, SegmentMetricKey};
use crate::projection::MetricSource;
use crate::ValidationError;

/// Company-wide figures for one fiscal quarter, as published.
///
/// Values are USD millions except `adjusted_eps` (USD per diluted share).
/// Negative values are legal; net income and free cash flow can go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyRecord {
    #[serde(rename = "quarter")]
    pub period: PeriodLabel,
    pub revenue: f64,
    pub operating_income: f64,
    pub net_income: f64,
    #[serde(rename = "adjustedEPS")]
    pub adjusted_eps: f64,
    pub free_cash_flow: f64,
}

impl QuarterlyRecord {
    pub fn new(
        period: PeriodLabel,
        revenue: f64,
        operating_income: f64,
        net_income: f64,
        adjusted_eps: f64,
        free_cash_flow: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("revenue", revenue)?;
        validate_finite("operating_income", operating_income)?;
        validate_finite("net_income", net_income)?;
        validate_finite("adjusted_eps", adjusted_eps)?;
        validate_finite("free_cash_flow", free_cash_flow)?;

        Ok(Self {
            period,
            revenue,
            operating_income,
            net_income,
            adjusted_eps,
            free_cash_flow,
        })
    }

    /// Value of the field addressed by `key`, exactly as stored.
    pub const fn metric(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Revenue => self.revenue,
            MetricKey::OperatingIncome => self.operating_income,
            MetricKey::NetIncome => self.net_income,
            MetricKey::AdjustedEps => self.adjusted_eps,
            MetricKey::FreeCashFlow => self.free_cash_flow,
        }
    }
}

impl MetricSource for QuarterlyRecord {
    type Key = MetricKey;

    fn period(&self) -> PeriodLabel {
        self.period
    }

    fn metric(&self, key: MetricKey) -> f64 {
        QuarterlyRecord::metric(self, key)
    }
}

/// Per-business-segment figures for one fiscal quarter, USD millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    #[serde(rename = "quarter")]
    pub period: PeriodLabel,
    pub package_and_courier: f64,
    pub less_than_truckload: f64,
    pub truckload: f64,
    pub logistics: f64,
}

impl SegmentRecord {
    pub fn new(
        period: PeriodLabel,
        package_and_courier: f64,
        less_than_truckload: f64,
        truckload: f64,
        logistics: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("package_and_courier", package_and_courier)?;
        validate_finite("less_than_truckload", less_than_truckload)?;
        validate_finite("truckload", truckload)?;
        validate_finite("logistics", logistics)?;

        Ok(Self {
            period,
            package_and_courier,
            less_than_truckload,
            truckload,
            logistics,
        })
    }

    /// Value of the field addressed by `key`, exactly as stored.
    pub const fn metric(&self, key: SegmentMetricKey) -> f64 {
        match key {
            SegmentMetricKey::PackageAndCourier => self.package_and_courier,
            SegmentMetricKey::LessThanTruckload => self.less_than_truckload,
            SegmentMetricKey::Truckload => self.truckload,
            SegmentMetricKey::Logistics => self.logistics,
        }
    }
}

impl MetricSource for SegmentRecord {
    type Key = SegmentMetricKey;

    fn period(&self) -> PeriodLabel {
        self.period
    }

    fn metric(&self, key: SegmentMetricKey) -> f64 {
        SegmentRecord::metric(self, key)
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}
