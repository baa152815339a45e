//! Selection-driven reduction of record series to chart points.

use serde::{Deserialize, Serialize};

use crate::domain::PeriodLabel;

/// A record whose numeric fields are addressable by a closed key set.
///
/// The key type is an enum, so addressing a field that does not exist on the
/// record is a compile error rather than a runtime lookup failure.
pub trait MetricSource {
    /// Closed set of chartable field keys for this record type.
    type Key: Copy;

    /// Period label the record belongs to.
    fn period(&self) -> PeriodLabel;

    /// Value of the field addressed by `key`, exactly as stored.
    fn metric(&self, key: Self::Key) -> f64;
}

/// One chart point: a period label and the selected field's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub period: PeriodLabel,
    pub value: f64,
}

/// Reduce `records` to one point per record for the field addressed by `key`.
///
/// Order and length are preserved exactly; no sorting, filtering, rounding,
/// or deduplication. The input is never mutated.
pub fn project<R: MetricSource>(records: &[R], key: R::Key) -> Vec<ProjectedPoint> {
    records
        .iter()
        .map(|record| ProjectedPoint {
            period: record.period(),
            value: record.metric(key),
        })
        .collect()
}
