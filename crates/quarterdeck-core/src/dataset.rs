//! Immutable, chronologically ordered record series.

use serde::Serialize;

use crate::domain::{QuarterlyRecord, SegmentRecord};
use crate::projection::MetricSource;
use crate::ValidationError;

/// Company-wide quarterly dataset.
pub type QuarterlySeries = Series<QuarterlyRecord>;

/// Business-segment quarterly dataset.
pub type SegmentSeries = Series<SegmentRecord>;

/// An ordered series of quarterly records.
///
/// Construction enforces exactly one record per period label, sorted
/// ascending. The series is read-only afterwards; projections and summaries
/// borrow it and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series<R> {
    records: Vec<R>,
}

impl<R: MetricSource> Series<R> {
    pub fn new(records: Vec<R>) -> Result<Self, ValidationError> {
        for pair in records.windows(2) {
            let previous = pair[0].period();
            let current = pair[1].period();

            if current == previous {
                return Err(ValidationError::DuplicatePeriod {
                    value: current.to_string(),
                });
            }
            if current < previous {
                return Err(ValidationError::OutOfOrderPeriod {
                    value: current.to_string(),
                });
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, the headline-card source.
    ///
    /// Fails on an empty series instead of inventing a default record.
    pub fn latest(&self) -> Result<&R, ValidationError> {
        self.records.last().ok_or(ValidationError::EmptyDataset)
    }
}
