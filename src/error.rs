//! Error types for calbucket

use thiserror::Error;

/// Errors surfaced by the calendar API.
///
/// Only the CSV codec, scale parsing, zone parsing and instant construction
/// can fail. Everything else is total over its input domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Bucketing scale is not one of day, week or month
    #[error("invalid scale: {scale:?} (expected day, week or month)")]
    InvalidScale { scale: String },

    /// Text did not match the expected date pattern or named an impossible date
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    /// Zone identifier is not UTC, local or a fixed offset
    #[error("invalid time zone: {zone:?} (expected UTC, local or +HH:MM)")]
    InvalidZone { zone: String },

    /// Epoch milliseconds outside the representable range
    #[error("timestamp {millis} ms is outside the representable range")]
    OutOfRange { millis: i64 },
}

impl CalendarError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        CalendarError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
