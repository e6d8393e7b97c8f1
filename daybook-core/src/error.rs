use thiserror::Error;

/// Errors produced by the computation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A record's date or time-of-day could not be turned into an instant.
    #[error("invalid timestamp '{value}' on record {record_id}: {reason}")]
    InvalidTimestamp {
        record_id: String,
        value: String,
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid_timestamp(
        record_id: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CoreError::InvalidTimestamp {
            record_id: record_id.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoreError>;
