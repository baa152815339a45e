use thiserror::Error;

/// Validation and contract errors exposed by `quarterdeck-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("period label cannot be empty")]
    EmptyPeriod,
    #[error("period label must match 'Qn YYYY': '{value}'")]
    InvalidPeriodFormat { value: String },
    #[error("quarter must be between 1 and 4: '{value}'")]
    InvalidQuarter { value: String },

    #[error("invalid metric '{value}', expected one of revenue, operatingIncome, netIncome, adjustedEPS, freeCashFlow")]
    InvalidMetricKey { value: String },
    #[error("invalid segment metric '{value}', expected one of packageAndCourier, lessThanTruckload, truckload, logistics")]
    InvalidSegmentMetricKey { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("duplicate period '{value}' in dataset")]
    DuplicatePeriod { value: String },
    #[error("period '{value}' is out of chronological order")]
    OutOfOrderPeriod { value: String },
    #[error("dataset must contain at least one record")]
    EmptyDataset,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
