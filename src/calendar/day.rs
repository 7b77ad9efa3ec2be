//! Day boundaries on a zone's wall clock

use super::fields::{decompose, recompose};
use crate::types::Instant;
use crate::zone::TimeZoneId;

/// Local 00:00:00.000 of the day containing `instant`.
pub fn start_of_day(instant: Instant, zone: TimeZoneId) -> Instant {
    let fields = decompose(instant, zone).with_time(0, 0, 0, 0);
    recompose(fields, zone)
}

/// Local 23:59:59.999 of the day containing `instant`.
pub fn end_of_day(instant: Instant, zone: TimeZoneId) -> Instant {
    let fields = decompose(instant, zone).with_time(23, 59, 59, 999);
    recompose(fields, zone)
}
