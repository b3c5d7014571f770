//! Timestamps and half-open time intervals.
//!
//! Calendar instants are local wall-clock times without a zone: the event
//! source has already scoped everything to the business's calendar, and the
//! layout only ever compares instants of the same day.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Accepted textual forms, tried in order.
const FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Error returned when a timestamp string matches none of the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp `{input}`: expected YYYY-MM-DDTHH:MM[:SS]")]
pub struct TimestampError {
    input: String,
}

/// A calendar instant with wall-clock semantics.
///
/// # Examples
///
/// ```
/// use daygrid_core::time::Timestamp;
///
/// let start: Timestamp = "2024-05-06T09:00".parse().unwrap();
/// let later: Timestamp = "2024-05-06 09:30".parse().unwrap();
///
/// assert!(start < later);
/// assert_eq!(start.to_string(), "2024-05-06T09:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a [`NaiveDateTime`].
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Returns the calendar date this instant falls on.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the wrapped [`NaiveDateTime`].
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Adds `delta`, saturating at the representable range.
    pub fn saturating_add(&self, delta: TimeDelta) -> Self {
        let bound = if delta < TimeDelta::zero() {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        };
        Self(self.0.checked_add_signed(delta).unwrap_or(bound))
    }

    /// Signed distance from `earlier` to `self`.
    pub fn since(&self, earlier: Timestamp) -> TimeDelta {
        self.0 - earlier.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| TimestampError {
                input: s.to_owned(),
            })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.second() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open interval `[start, end)`.
///
/// Intervals that merely touch (`a.end == b.start`) do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: Timestamp,
    end: Timestamp,
}

impl Interval {
    /// Creates an interval. `end` is expected to be after `start`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Inclusive start.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive end.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.since(self.start)
    }

    /// Whether the two intervals share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_accepts_all_forms() {
        let expected = ts("2024-05-06T09:15:00");
        assert_eq!(ts("2024-05-06T09:15"), expected);
        assert_eq!(ts("2024-05-06 09:15"), expected);
        assert_eq!(ts("2024-05-06 09:15:00"), expected);
        assert_eq!(ts("  2024-05-06T09:15  "), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "tomorrow at nine".parse::<Timestamp>().unwrap_err();
        assert!(err.to_string().contains("tomorrow at nine"));
        assert!("2024-05-06".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_display_omits_zero_seconds() {
        assert_eq!(ts("2024-05-06T09:15:00").to_string(), "2024-05-06T09:15");
        assert_eq!(ts("2024-05-06T09:15:30").to_string(), "2024-05-06T09:15:30");
    }

    #[test]
    fn test_saturating_add() {
        let start = ts("2024-05-06T23:30");
        assert_eq!(
            start.saturating_add(TimeDelta::minutes(60)),
            ts("2024-05-07T00:30")
        );
        let max = Timestamp::new(NaiveDateTime::MAX);
        assert_eq!(max.saturating_add(TimeDelta::minutes(60)), max);
    }

    #[test]
    fn test_overlap_is_strict_at_boundaries() {
        let a = Interval::new(ts("2024-05-06T09:00"), ts("2024-05-06T10:00"));
        let b = Interval::new(ts("2024-05-06T10:00"), ts("2024-05-06T11:00"));
        let c = Interval::new(ts("2024-05-06T09:59"), ts("2024-05-06T10:01"));

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_duration() {
        let a = Interval::new(ts("2024-05-06T09:00"), ts("2024-05-06T10:30"));
        assert_eq!(a.duration(), TimeDelta::minutes(90));
        assert_eq!(a.start().date(), NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
    }
}
