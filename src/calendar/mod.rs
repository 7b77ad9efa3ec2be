//! Calendar normalization and time-window bucketing
//!
//! Every operation takes the zone it reads or writes wall-clock fields in as
//! an explicit [`TimeZoneId`](crate::zone::TimeZoneId); nothing consults the
//! host zone unless handed `TimeZoneId::Local`.

pub mod buckets;
pub mod csv;
pub mod day;
pub mod fields;
pub mod shift;
pub mod window;

pub use buckets::{bucket_sequence, fake_buckets, FAKE_REFERENCE_YEAR};
pub use csv::{decode, encode, encode_simple};
pub use day::{end_of_day, start_of_day};
pub use fields::{decompose, recompose};
pub use shift::utc_to_local_midnight;
pub use window::in_window;
