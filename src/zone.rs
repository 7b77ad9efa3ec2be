//! Time zone identifiers threaded explicitly through every calendar call

use crate::error::CalendarError;
use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use std::fmt;
use std::str::FromStr;

/// Identifies the zone a set of calendar fields is read or written in.
///
/// `Local` resolves to the host's zone at call time. Tests pin a `Fixed`
/// offset instead so results do not depend on the machine running them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeZoneId {
    Utc,
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl TimeZoneId {
    /// Fixed offset `seconds` east of UTC. `None` when beyond +/- 24h.
    pub fn east(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(TimeZoneId::Fixed)
    }

    /// Fixed offset of whole hours east of UTC.
    pub fn hours(hours: i32) -> Option<Self> {
        hours.checked_mul(3600).and_then(Self::east)
    }

    /// Wall-clock reading of `utc` in this zone.
    ///
    /// Readings past chrono's range clamp to `NaiveDateTime::MIN`/`MAX`, so
    /// the extreme instants still decompose.
    pub(crate) fn to_local(self, utc: DateTime<Utc>) -> NaiveDateTime {
        let naive = utc.naive_utc();
        let offset = match self {
            TimeZoneId::Utc => return naive,
            TimeZoneId::Local => Local.offset_from_utc_datetime(&naive).fix(),
            TimeZoneId::Fixed(offset) => offset,
        };
        let seconds = i64::from(offset.local_minus_utc());
        naive
            .checked_add_signed(TimeDelta::seconds(seconds))
            .unwrap_or(if seconds < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    /// The instant a wall-clock reading in this zone refers to.
    ///
    /// Readings inside a DST gap take the offset in force before the gap, so
    /// they land after it. Readings inside an overlap take the earlier
    /// instant. `None` only when the result leaves chrono's range.
    pub(crate) fn from_local(self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZoneId::Utc => Some(local.and_utc()),
            TimeZoneId::Local => resolve(&Local, local),
            TimeZoneId::Fixed(offset) => resolve(&offset, local),
        }
    }
}

fn resolve<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let day_before = local.checked_sub_signed(TimeDelta::days(1))?;
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let shift = TimeDelta::seconds(i64::from(before.local_minus_utc()));
            local.checked_sub_signed(shift).map(|utc| utc.and_utc())
        }
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneId::Utc => write!(f, "UTC"),
            TimeZoneId::Local => write!(f, "local"),
            TimeZoneId::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for TimeZoneId {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "utc" | "z" | "gmt" => return Ok(TimeZoneId::Utc),
            "local" => return Ok(TimeZoneId::Local),
            _ => {}
        }

        let invalid = || CalendarError::InvalidZone {
            zone: s.to_string(),
        };

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None if rest.len() == 4 => rest.split_at(2),
            None => (rest, "0"),
        };
        if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 24 || minutes >= 60 {
            return Err(invalid());
        }

        TimeZoneId::east(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
    }
}

impl<'de> serde::Deserialize<'de> for TimeZoneId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for TimeZoneId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
