//! The input unit of a day layout.

use chrono::TimeDelta;

use crate::{
    identifier::EventId,
    time::{Interval, Timestamp},
};

/// Duration assumed for events without a usable end, in minutes.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Returns [`DEFAULT_DURATION_MINUTES`] as a [`TimeDelta`].
pub fn default_duration() -> TimeDelta {
    TimeDelta::minutes(DEFAULT_DURATION_MINUTES)
}

/// A time-ranged entry to be placed on a day column.
///
/// Bookings and synthetic reminders share this shape; anything that tells
/// them apart stays with the caller.
///
/// # Examples
///
/// ```
/// use daygrid_core::{event::{Event, default_duration}, time::Timestamp};
///
/// let start: Timestamp = "2024-05-06T09:00".parse().unwrap();
/// let event = Event::new("svc-1", start, None);
///
/// let interval = event.effective_interval(default_duration());
/// assert_eq!(interval.end(), "2024-05-06T10:00".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    start: Timestamp,
    end: Option<Timestamp>,
}

impl Event {
    /// Creates an event.
    pub fn new(id: impl Into<EventId>, start: Timestamp, end: Option<Timestamp>) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The end as supplied, which may be missing or not after `start`.
    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// The `[start, end)` interval used for every overlap decision.
    ///
    /// An end that is missing, equal to `start` or before it is replaced by
    /// `start + default`, so no event is ever treated as zero-length.
    pub fn effective_interval(&self, default: TimeDelta) -> Interval {
        let end = self
            .end
            .filter(|end| *end > self.start)
            .unwrap_or_else(|| self.start.saturating_add(default));
        Interval::new(self.start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_explicit_end_is_kept() {
        let event = Event::new("a", ts("2024-05-06T09:00"), Some(ts("2024-05-06T09:20")));
        let interval = event.effective_interval(default_duration());
        assert_eq!(interval.end(), ts("2024-05-06T09:20"));
        assert_eq!(interval.duration(), TimeDelta::minutes(20));
    }

    #[test]
    fn test_missing_end_defaults_to_one_hour() {
        let event = Event::new("a", ts("2024-05-06T09:00"), None);
        assert_eq!(
            event.effective_interval(default_duration()).end(),
            ts("2024-05-06T10:00")
        );
    }

    #[test]
    fn test_zero_length_defaults_to_one_hour() {
        let event = Event::new("a", ts("2024-05-06T09:00"), Some(ts("2024-05-06T09:00")));
        assert_eq!(
            event.effective_interval(default_duration()).duration(),
            default_duration()
        );
    }

    #[test]
    fn test_end_before_start_defaults() {
        let event = Event::new("a", ts("2024-05-06T09:00"), Some(ts("2024-05-06T08:00")));
        let interval = event.effective_interval(TimeDelta::minutes(30));
        assert_eq!(interval.start(), ts("2024-05-06T09:00"));
        assert_eq!(interval.end(), ts("2024-05-06T09:30"));
    }

    #[test]
    fn test_caller_event_is_untouched() {
        let event = Event::new("a", ts("2024-05-06T09:00"), None);
        let _ = event.effective_interval(default_duration());
        assert_eq!(event.end(), None);
    }
}
