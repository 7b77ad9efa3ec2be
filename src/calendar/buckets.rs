//! Bucket boundary sequences for chart axes

use super::day::{end_of_day, start_of_day};
use super::fields::{decompose, recompose, try_recompose};
use crate::types::{CalendarFields, Instant, Scale};
use crate::zone::TimeZoneId;

/// Year the placeholder axis is drawn for in fake mode.
pub const FAKE_REFERENCE_YEAR: i32 = 2024;

/// Day-aligned bucket boundaries from the day of `start` through the day of `end`.
///
/// The first boundary is local midnight of `start`'s day and is always
/// emitted. Later boundaries are emitted while they do not pass local
/// 23:59:59.999 of `end`'s day, so `start` after `end` yields exactly one
/// bucket. A boundary that lands later in the final day than `end`'s
/// midnight is still emitted, but one on a later day is not: Jan 15 to
/// Mar 10 by month gives Jan 15 and Feb 15 only, since Mar 15 is past the
/// end of Mar 10. The k-th boundary is the first shifted by k calendar units on the
/// wall clock of `zone`; month steps that land on a missing day roll over
/// (Jan 31 + 1 month is early March).
///
/// With `fake`, the inputs are ignored and the twelve month starts of
/// [`FAKE_REFERENCE_YEAR`] are returned instead.
pub fn bucket_sequence(
    start: Instant,
    end: Instant,
    scale: Scale,
    fake: bool,
    zone: TimeZoneId,
) -> Vec<Instant> {
    if fake {
        tracing::debug!(year = FAKE_REFERENCE_YEAR, "fake mode, returning placeholder axis");
        return fake_buckets(FAKE_REFERENCE_YEAR, zone);
    }

    let lo = start_of_day(start, zone);
    let hi = end_of_day(end, zone);
    let origin = decompose(lo, zone);

    let mut buckets = vec![lo];
    let mut current = lo;
    for k in 1u32.. {
        // a step past the representable range ends the axis instead of clamping
        let Some(next) = offset(origin, scale, k).and_then(|fields| try_recompose(fields, zone))
        else {
            break;
        };
        if next <= current || next > hi {
            break;
        }
        buckets.push(next);
        current = next;
    }

    tracing::trace!(%scale, %lo, %hi, count = buckets.len(), "generated bucket sequence");
    buckets
}

/// Local midnight of the 1st of every month of `year`, January first.
pub fn fake_buckets(year: i32, zone: TimeZoneId) -> Vec<Instant> {
    (1..=12)
        .map(|month| recompose(CalendarFields::date(year, month, 1), zone))
        .collect()
}

fn offset(origin: CalendarFields, scale: Scale, k: u32) -> Option<CalendarFields> {
    let mut fields = origin;
    match scale {
        Scale::Day => fields.day = fields.day.checked_add(k)?,
        Scale::Week => fields.day = fields.day.checked_add(k.checked_mul(7)?)?,
        Scale::Month => fields.month = fields.month.checked_add(k)?,
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> TimeZoneId {
        TimeZoneId::hours(-3).unwrap()
    }

    fn local(year: i32, month: u32, day: u32, hour: u32) -> Instant {
        recompose(CalendarFields::date(year, month, day).with_time(hour, 0, 0, 0), zone())
    }

    fn dates(buckets: &[Instant]) -> Vec<(i32, u32, u32)> {
        buckets
            .iter()
            .map(|b| {
                let f = decompose(*b, zone());
                assert_eq!((f.hour, f.minute, f.second, f.millisecond), (0, 0, 0, 0));
                (f.year, f.month, f.day)
            })
            .collect()
    }

    #[test]
    fn same_day_yields_single_bucket() {
        let buckets = bucket_sequence(
            local(2024, 5, 10, 8),
            local(2024, 5, 10, 22),
            Scale::Day,
            false,
            zone(),
        );
        assert_eq!(buckets, vec![local(2024, 5, 10, 0)]);
    }

    #[test]
    fn daily_buckets_cross_month_and_year() {
        let buckets = bucket_sequence(
            local(2024, 12, 30, 15),
            local(2025, 1, 2, 1),
            Scale::Day,
            false,
            zone(),
        );
        assert_eq!(
            dates(&buckets),
            vec![(2024, 12, 30), (2024, 12, 31), (2025, 1, 1), (2025, 1, 2)]
        );
    }

    #[test]
    fn weekly_buckets_step_seven_days() {
        let buckets = bucket_sequence(
            local(2024, 2, 20, 12),
            local(2024, 3, 12, 0),
            Scale::Week,
            false,
            zone(),
        );
        assert_eq!(
            dates(&buckets),
            vec![(2024, 2, 20), (2024, 2, 27), (2024, 3, 5), (2024, 3, 12)]
        );
    }

    #[test]
    fn monthly_buckets_stop_before_passing_end_of_day() {
        let buckets = bucket_sequence(
            local(2024, 1, 15, 9),
            local(2024, 3, 10, 9),
            Scale::Month,
            false,
            zone(),
        );
        // March 15 is past the end of March 10
        assert_eq!(dates(&buckets), vec![(2024, 1, 15), (2024, 2, 15)]);
    }

    #[test]
    fn monthly_buckets_include_end_day() {
        let buckets = bucket_sequence(
            local(2024, 1, 15, 9),
            local(2024, 3, 15, 0),
            Scale::Month,
            false,
            zone(),
        );
        assert_eq!(
            dates(&buckets),
            vec![(2024, 1, 15), (2024, 2, 15), (2024, 3, 15)]
        );
    }

    #[test]
    fn month_end_rolls_over_without_drift() {
        let buckets = bucket_sequence(
            local(2023, 1, 31, 0),
            local(2023, 4, 30, 0),
            Scale::Month,
            false,
            zone(),
        );
        assert_eq!(
            dates(&buckets),
            vec![(2023, 1, 31), (2023, 3, 3), (2023, 3, 31)]
        );
    }

    #[test]
    fn start_after_end_still_yields_first_bucket() {
        let buckets = bucket_sequence(
            local(2024, 6, 1, 12),
            local(2024, 5, 1, 12),
            Scale::Week,
            false,
            zone(),
        );
        assert_eq!(buckets, vec![local(2024, 6, 1, 0)]);
    }

    #[test]
    fn fake_mode_ignores_range() {
        let buckets = bucket_sequence(
            local(1999, 1, 1, 0),
            local(1999, 1, 1, 0),
            Scale::Day,
            true,
            zone(),
        );
        assert_eq!(buckets.len(), 12);
        let expected: Vec<_> = (1..=12).map(|m| (FAKE_REFERENCE_YEAR, m, 1)).collect();
        assert_eq!(dates(&buckets), expected);
        assert!(buckets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bucket_sequence_stops_at_range_edges() {
        let zones = [
            TimeZoneId::Utc,
            TimeZoneId::hours(14).unwrap(),
            TimeZoneId::hours(-12).unwrap(),
        ];
        for zone in zones {
            for edge in [Instant::MAX, Instant::MIN] {
                for scale in [Scale::Day, Scale::Week, Scale::Month] {
                    let buckets = bucket_sequence(edge, edge, scale, false, zone);
                    assert_eq!(buckets.len(), 1, "{scale} at {edge} in {zone}");
                }
            }
        }
    }
}
