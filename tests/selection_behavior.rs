//! Behavior-driven tests for selection state.
//!
//! These tests verify HOW selection changes drive re-projection: defaults,
//! independence of the two selectors, and round-trip stability.

use quarterdeck_core::{bundled, MetricKey, SegmentMetricKey, SelectionState, ValidationError};

// =============================================================================
// Selection: Defaults and Independence
// =============================================================================

#[test]
fn when_a_view_starts_the_default_selections_apply() {
    // Given: A fresh selection state
    let selection = SelectionState::default();

    // Then: Company chart defaults to revenue, segment chart to packageAndCourier
    assert_eq!(selection.metric(), MetricKey::Revenue);
    assert_eq!(
        selection.segment_metric(),
        SegmentMetricKey::PackageAndCourier
    );
}

#[test]
fn when_one_selection_changes_the_other_is_untouched() {
    // Given: A fresh selection state
    let mut selection = SelectionState::default();

    // When: Only the company metric is replaced
    selection.set_metric(MetricKey::FreeCashFlow);

    // Then: The segment selection still holds its default
    assert_eq!(selection.metric(), MetricKey::FreeCashFlow);
    assert_eq!(
        selection.segment_metric(),
        SegmentMetricKey::PackageAndCourier
    );
}

// =============================================================================
// Selection: Round-Trip Stability
// =============================================================================

#[test]
fn when_a_selection_round_trips_the_projection_is_bit_identical() {
    // Given: A view with the default revenue projection captured
    let mut view = bundled::dashboard_view().expect("bundled view");
    let original = view.company_trend();

    // When: The metric changes and the previous one is re-selected
    view.select_metric(MetricKey::NetIncome);
    view.select_metric(MetricKey::Revenue);
    let restored = view.company_trend();

    // Then: The restored projection matches the original bit for bit
    assert_eq!(original.len(), restored.len());
    for (before, after) in original.iter().zip(&restored) {
        assert_eq!(before.period, after.period);
        assert_eq!(before.value.to_bits(), after.value.to_bits());
    }
}

#[test]
fn when_the_segment_selection_changes_the_company_chart_is_not_reprojected_differently() {
    // Given: A view with the company trend captured
    let mut view = bundled::dashboard_view().expect("bundled view");
    let before = view.company_trend();

    // When: Only the segment selection changes
    view.select_segment_metric(SegmentMetricKey::LessThanTruckload);

    // Then: The company projection is unchanged and the segment one follows
    assert_eq!(view.company_trend(), before);
    let segment_points = view.segment_trend();
    assert_eq!(segment_points[0].value, 66.9);
    assert_eq!(segment_points[1].value, 109.9);
}

// =============================================================================
// Selection: Out-of-Domain Input
// =============================================================================

#[test]
fn when_an_unknown_metric_key_arrives_it_is_rejected() {
    // Given: A selection string outside the enumerated domain
    let result = "ebitda".parse::<MetricKey>();

    // Then: A clear validation error is returned instead of a silent default
    let err = result.expect_err("unknown key should fail");
    assert!(matches!(err, ValidationError::InvalidMetricKey { .. }));
}

#[test]
fn when_an_unknown_segment_key_arrives_it_is_rejected() {
    // Given: A segment selection string outside the enumerated domain
    let result = "intermodal".parse::<SegmentMetricKey>();

    // Then: A clear validation error is returned
    let err = result.expect_err("unknown key should fail");
    assert!(matches!(err, ValidationError::InvalidSegmentMetricKey { .. }));
}
