//! Core types for calbucket

use crate::error::CalendarError;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A timezone-independent point in time with millisecond resolution.
///
/// Serialized as epoch milliseconds. Sub-millisecond precision is dropped on
/// construction so two instants built from the same millis always compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Earliest representable instant
    pub const MIN: Instant = Instant(DateTime::<Utc>::MIN_UTC);
    /// Latest representable instant
    pub const MAX: Instant = Instant(DateTime::<Utc>::MAX_UTC);

    pub fn from_millis(millis: i64) -> Result<Self, CalendarError> {
        DateTime::from_timestamp_millis(millis)
            .map(Instant)
            .ok_or(CalendarError::OutOfRange { millis })
    }

    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn to_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from(Utc::now())
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant(dt.trunc_subsecs(3))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl Serialize for Instant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Instant::from_millis(millis).map_err(serde::de::Error::custom)
    }
}

/// Calendar reading of an instant, valid only relative to one zone.
///
/// Decomposition always yields in-range values. Recomposition accepts
/// anything and carries overflow forward (month 13 is January of the next
/// year, February 30 is early March).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl CalendarFields {
    /// Local midnight of the given date
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }

    pub fn with_time(self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            ..self
        }
    }
}

impl fmt::Display for CalendarFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Time range for membership tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Instant,
    pub end: Instant,
}

impl TimeWindow {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Inclusive at both ends. An inverted window contains nothing.
    pub fn contains(&self, time: Instant) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Bucketing granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Day => write!(f, "day"),
            Scale::Week => write!(f, "week"),
            Scale::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Scale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Scale::Day),
            "week" => Ok(Scale::Week),
            "month" => Ok(Scale::Month),
            _ => Err(CalendarError::InvalidScale {
                scale: s.to_string(),
            }),
        }
    }
}

/// CLI output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
