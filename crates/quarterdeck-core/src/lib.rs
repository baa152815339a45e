//! Core contracts for quarterdeck.
//!
//! This crate contains:
//! - Validated domain records and the closed metric key sets
//! - Ordered dataset series with uniqueness invariants
//! - The pure projection engine and per-view selection state
//! - Bundled reference data and the response envelope
//!
//! The projection layer is deliberately free of presentation concerns:
//! stored values carry no units or formatting, and nothing here caches a
//! derived view. Renderers consume [`ProjectedPoint`] sequences and the
//! latest summary record, and feed selection changes back through
//! [`DashboardView`].

pub mod bundled;
pub mod dataset;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod projection;
pub mod selection;
pub mod view;

pub use dataset::{QuarterlySeries, SegmentSeries, Series};
pub use domain::{
    MetricKey, MetricUnit, PeriodLabel, QuarterlyRecord, SegmentMetricKey, SegmentRecord,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, UtcDateTime};
pub use error::{CoreError, ValidationError};
pub use projection::{project, MetricSource, ProjectedPoint};
pub use selection::SelectionState;
pub use view::DashboardView;
