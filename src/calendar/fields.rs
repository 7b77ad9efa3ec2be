//! Decomposition of instants into calendar fields and back

use crate::types::{CalendarFields, Instant};
use crate::zone::TimeZoneId;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Reads `instant` as calendar fields on the wall clock of `zone`.
pub fn decompose(instant: Instant, zone: TimeZoneId) -> CalendarFields {
    let local = zone.to_local(instant.to_datetime());
    CalendarFields {
        year: local.year(),
        month: local.month(),
        day: local.day(),
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
        // leap-second readings carry nanos >= 1e9
        millisecond: (local.nanosecond() / 1_000_000).min(999),
    }
}

/// Builds the instant `fields` name on the wall clock of `zone`.
///
/// Out-of-range fields roll over the way a lenient calendar does: month 13
/// becomes January of the following year, day 0 the last day of the previous
/// month, hour 24 midnight of the next day. Results past the representable
/// range clamp to [`Instant::MIN`] or [`Instant::MAX`].
pub fn recompose(fields: CalendarFields, zone: TimeZoneId) -> Instant {
    let clamp = if fields.year < 0 {
        Instant::MIN
    } else {
        Instant::MAX
    };
    try_recompose(fields, zone).unwrap_or(clamp)
}

/// [`recompose`] without the clamp: `None` when the result is unrepresentable.
pub(crate) fn try_recompose(fields: CalendarFields, zone: TimeZoneId) -> Option<Instant> {
    wall_clock(&fields)
        .and_then(|local| zone.from_local(local))
        .map(Instant::from)
}

fn wall_clock(fields: &CalendarFields) -> Option<NaiveDateTime> {
    let months = i64::from(fields.year) * 12 + i64::from(fields.month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let date = match fields.day {
        0 => first.checked_sub_days(Days::new(1))?,
        day => first.checked_add_days(Days::new(u64::from(day - 1)))?,
    };

    let millis = i64::from(fields.hour) * 3_600_000
        + i64::from(fields.minute) * 60_000
        + i64::from(fields.second) * 1_000
        + i64::from(fields.millisecond);
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(fields: CalendarFields) -> Instant {
        recompose(fields, TimeZoneId::Utc)
    }

    #[test]
    fn decompose_reads_fixed_zone_wall_clock() {
        // 2024-03-01T01:30:15.250Z
        let instant = Instant::from_millis(1_709_256_615_250).unwrap();
        let fields = decompose(instant, TimeZoneId::hours(-5).unwrap());
        assert_eq!(
            fields,
            CalendarFields::date(2024, 2, 29).with_time(20, 30, 15, 250)
        );
    }

    #[test]
    fn recompose_inverts_decompose() {
        let zone = TimeZoneId::east(9 * 3600 + 30 * 60).unwrap();
        for millis in [0, 951_782_400_123, 1_709_256_615_250, -86_400_001] {
            let instant = Instant::from_millis(millis).unwrap();
            assert_eq!(recompose(decompose(instant, zone), zone), instant);
        }
    }

    #[test]
    fn month_thirteen_rolls_into_next_year() {
        assert_eq!(
            utc(CalendarFields::date(2024, 13, 5)),
            utc(CalendarFields::date(2025, 1, 5))
        );
    }

    #[test]
    fn month_zero_is_previous_december() {
        assert_eq!(
            utc(CalendarFields::date(2024, 0, 10)),
            utc(CalendarFields::date(2023, 12, 10))
        );
    }

    #[test]
    fn february_thirtieth_normalizes_forward() {
        assert_eq!(
            utc(CalendarFields::date(2023, 2, 30)),
            utc(CalendarFields::date(2023, 3, 2))
        );
        assert_eq!(
            utc(CalendarFields::date(2024, 2, 30)),
            utc(CalendarFields::date(2024, 3, 1))
        );
    }

    #[test]
    fn day_zero_is_last_day_of_previous_month() {
        assert_eq!(
            utc(CalendarFields::date(2024, 3, 0)),
            utc(CalendarFields::date(2024, 2, 29))
        );
    }

    #[test]
    fn time_fields_carry_into_date() {
        assert_eq!(
            utc(CalendarFields::date(2024, 12, 31).with_time(24, 0, 0, 0)),
            utc(CalendarFields::date(2025, 1, 1))
        );
        assert_eq!(
            utc(CalendarFields::date(2024, 1, 1).with_time(0, 0, 59, 1_000)),
            utc(CalendarFields::date(2024, 1, 1).with_time(0, 1, 0, 0))
        );
    }

    #[test]
    fn recompose_respects_zone_offset() {
        let fields = CalendarFields::date(2025, 6, 1);
        let tokyo = recompose(fields, TimeZoneId::hours(9).unwrap());
        assert_eq!(tokyo.as_millis(), utc(fields).as_millis() - 9 * 3_600_000);
    }

    #[test]
    fn decompose_is_total_at_range_edges() {
        let east = TimeZoneId::hours(14).unwrap();
        let west = TimeZoneId::hours(-12).unwrap();
        let top = decompose(Instant::MAX, east);
        assert_eq!((top.month, top.day, top.hour), (12, 31, 23));
        let bottom = decompose(Instant::MIN, west);
        assert_eq!((bottom.month, bottom.day, bottom.hour), (1, 1, 0));
        assert_eq!(decompose(Instant::MAX, TimeZoneId::Utc).year, top.year);
    }

    #[test]
    fn overflow_clamps_to_bounds() {
        assert_eq!(utc(CalendarFields::date(i32::MAX, 1, 1)), Instant::MAX);
        assert_eq!(utc(CalendarFields::date(i32::MIN, 1, 1)), Instant::MIN);
    }

    #[test]
    fn try_recompose_reports_overflow() {
        let fields = CalendarFields::date(i32::MAX, 1, 1);
        assert_eq!(try_recompose(fields, TimeZoneId::Utc), None);
        let fields = CalendarFields::date(2024, 2, 30);
        assert_eq!(try_recompose(fields, TimeZoneId::Utc), Some(utc(fields)));
    }
}
