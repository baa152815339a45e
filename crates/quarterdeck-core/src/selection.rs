//! Per-view chart selection state.

use serde::{Deserialize, Serialize};

use crate::domain::{MetricKey, SegmentMetricKey};

/// Which field each chart is currently displaying.
///
/// Owned by one view instance for its lifetime; never persisted. The two
/// selections are independent: replacing one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    metric: MetricKey,
    segment_metric: SegmentMetricKey,
}

impl SelectionState {
    pub const fn new() -> Self {
        Self {
            metric: MetricKey::Revenue,
            segment_metric: SegmentMetricKey::PackageAndCourier,
        }
    }

    pub const fn metric(&self) -> MetricKey {
        self.metric
    }

    pub const fn segment_metric(&self) -> SegmentMetricKey {
        self.segment_metric
    }

    /// Replace the company-chart selection.
    pub fn set_metric(&mut self, key: MetricKey) {
        self.metric = key;
    }

    /// Replace the segment-chart selection.
    pub fn set_segment_metric(&mut self, key: SegmentMetricKey) {
        self.segment_metric = key;
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_revenue_and_package_and_courier() {
        let selection = SelectionState::default();
        assert_eq!(selection.metric(), MetricKey::Revenue);
        assert_eq!(selection.segment_metric(), SegmentMetricKey::PackageAndCourier);
    }

    #[test]
    fn selections_are_independent() {
        let mut selection = SelectionState::default();
        selection.set_metric(MetricKey::NetIncome);

        assert_eq!(selection.metric(), MetricKey::NetIncome);
        assert_eq!(selection.segment_metric(), SegmentMetricKey::PackageAndCourier);

        selection.set_segment_metric(SegmentMetricKey::Logistics);
        assert_eq!(selection.metric(), MetricKey::NetIncome);
    }
}
