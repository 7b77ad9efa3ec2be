//! calbucket - calendar normalization and time-window bucketing
//!
//! Day boundaries, UTC-date relabeling, inclusive window tests, bucket
//! sequences for chart axes and a fixed-pattern CSV date codec. Every call
//! is pure and takes its zone explicitly.

pub mod calendar;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;
pub mod zone;

pub use calendar::{
    bucket_sequence, decode, decompose, encode, encode_simple, end_of_day, fake_buckets,
    in_window, recompose, start_of_day, utc_to_local_midnight, FAKE_REFERENCE_YEAR,
};
pub use error::{CalendarError, Result};
pub use types::{CalendarFields, Instant, OutputFormat, Scale, TimeWindow};
pub use zone::TimeZoneId;
