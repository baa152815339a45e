//! Dashboard view root: datasets plus selection, projected on demand.

use crate::dataset::{QuarterlySeries, SegmentSeries};
use crate::domain::{MetricKey, QuarterlyRecord, SegmentMetricKey};
use crate::projection::{project, ProjectedPoint};
use crate::selection::SelectionState;
use crate::ValidationError;

/// Owns the two datasets and the chart selections for one view session.
///
/// Projections are re-derived from the full series on every read; no derived
/// state is cached, so a selection change can never serve stale points. The
/// two trend reads are fully independent of each other.
#[derive(Debug, Clone)]
pub struct DashboardView {
    quarterly: QuarterlySeries,
    segments: SegmentSeries,
    selection: SelectionState,
}

impl DashboardView {
    pub fn new(quarterly: QuarterlySeries, segments: SegmentSeries) -> Self {
        Self {
            quarterly,
            segments,
            selection: SelectionState::default(),
        }
    }

    pub fn quarterly(&self) -> &QuarterlySeries {
        &self.quarterly
    }

    pub fn segments(&self) -> &SegmentSeries {
        &self.segments
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Replace the company-chart metric selection.
    pub fn select_metric(&mut self, key: MetricKey) {
        self.selection.set_metric(key);
    }

    /// Replace the segment-chart metric selection.
    pub fn select_segment_metric(&mut self, key: SegmentMetricKey) {
        self.selection.set_segment_metric(key);
    }

    /// Company-wide trend for the currently selected metric.
    pub fn company_trend(&self) -> Vec<ProjectedPoint> {
        project(self.quarterly.records(), self.selection.metric())
    }

    /// Per-segment trend for the currently selected segment metric.
    pub fn segment_trend(&self) -> Vec<ProjectedPoint> {
        project(self.segments.records(), self.selection.segment_metric())
    }

    /// Latest reported quarter, the source for the headline cards.
    pub fn summary(&self) -> Result<&QuarterlyRecord, ValidationError> {
        self.quarterly.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundled;

    #[test]
    fn trend_follows_metric_selection() {
        let mut view = bundled::dashboard_view().expect("bundled view");

        view.select_metric(MetricKey::OperatingIncome);
        let points = view.company_trend();

        assert_eq!(points.len(), 9);
        let last = points.last().expect("nine points");
        assert_eq!(last.period.to_string(), "Q2 2024");
        assert_eq!(last.value, 208.1);
    }

    #[test]
    fn reselecting_previous_metric_restores_identical_projection() {
        let mut view = bundled::dashboard_view().expect("bundled view");
        let original = view.company_trend();

        view.select_metric(MetricKey::AdjustedEps);
        view.select_metric(MetricKey::Revenue);
        let restored = view.company_trend();

        assert_eq!(original.len(), restored.len());
        for (before, after) in original.iter().zip(&restored) {
            assert_eq!(before.period, after.period);
            assert_eq!(before.value.to_bits(), after.value.to_bits());
        }
    }

    #[test]
    fn segment_selection_does_not_disturb_company_trend() {
        let mut view = bundled::dashboard_view().expect("bundled view");
        let before = view.company_trend();

        view.select_segment_metric(SegmentMetricKey::Truckload);

        assert_eq!(view.company_trend(), before);
        let segment_points = view.segment_trend();
        assert_eq!(segment_points.len(), 2);
        assert_eq!(segment_points[0].value, 41.5);
        assert_eq!(segment_points[1].value, 83.3);
    }
}
