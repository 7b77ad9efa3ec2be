//! UTC date relabeling onto a local zone

use super::fields::{decompose, recompose};
use crate::types::{CalendarFields, Instant};
use crate::zone::TimeZoneId;

/// Local midnight, in `local`, of the calendar date `utc_instant` falls on in UTC.
///
/// This is a relabel, not a zone conversion: the UTC (year, month, day) is
/// kept and the time of day is dropped, so the instant generally moves by
/// the zone's offset. Date-only values stored as UTC midnight come back as
/// the same date on the local wall clock.
pub fn utc_to_local_midnight(utc_instant: Instant, local: TimeZoneId) -> Instant {
    let utc = decompose(utc_instant, TimeZoneId::Utc);
    recompose(CalendarFields::date(utc.year, utc.month, utc.day), local)
}
