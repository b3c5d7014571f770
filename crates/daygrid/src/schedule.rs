//! Schedule input: the bookings and reminders to lay out.
//!
//! A schedule is a TOML document with one `[[entry]]` table per booking or
//! synthetic reminder:
//!
//! ```toml
//! [[entry]]
//! id = "svc-1042"
//! start = "2024-05-06T09:00"
//! end = "2024-05-06T10:30"
//! kind = "service"
//! label = "Airport transfer"
//! ```
//!
//! Only `id` and `start` are required. The entry kind and label are carried
//! for reporting; the layout engine sees identifiers and times only.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::{IndexMap, map::Entry as MapEntry};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use toml::Spanned;

use daygrid_core::{event::Event, identifier::EventId, time::Timestamp};

use crate::{
    config::{DuplicateIds, InputConfig},
    error::{DaygridError, InputError},
};

/// What a schedule entry represents on the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A booked transport service.
    #[default]
    Service,
    /// A driver's leave, injected as a reminder.
    DriverLeave,
    /// A vehicle insurance or maintenance due date, injected as a reminder.
    VehicleReminder,
}

impl EntryKind {
    /// Whether the entry was injected by the reminder generator rather than booked.
    pub fn is_reminder(&self) -> bool {
        !matches!(self, Self::Service)
    }
}

/// One booking or reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EventId,
    start: Timestamp,
    end: Option<Timestamp>,
    kind: EntryKind,
    label: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<EventId>, start: Timestamp, end: Option<Timestamp>) -> Self {
        Self {
            id: id.into(),
            start,
            end: normalize_end(start, end),
            kind: EntryKind::default(),
            label: None,
        }
    }

    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The calendar day the entry is shown on.
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// The layout engine's view of this entry.
    pub fn event(&self) -> Event {
        Event::new(self.id, self.start, self.end)
    }
}

/// Drops an end that lies before `start`; the layout engine then applies its
/// default duration.
fn normalize_end(start: Timestamp, end: Option<Timestamp>) -> Option<Timestamp> {
    match end {
        Some(end) if end < start => {
            warn!(
                start:% = start,
                end:% = end;
                "Entry ends before it starts, using the default duration"
            );
            None
        }
        other => other,
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchedule {
    #[serde(default, rename = "entry")]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    id: Spanned<String>,
    start: Timestamp,
    #[serde(default)]
    end: Option<Timestamp>,
    #[serde(default)]
    kind: EntryKind,
    #[serde(default)]
    label: Option<String>,
}

/// The days that need a new layout after an entry was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovedDays {
    origin: NaiveDate,
    destination: NaiveDate,
}

impl MovedDays {
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    pub fn destination(&self) -> NaiveDate {
        self.destination
    }

    /// The affected days, without repeating a day moved within itself.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let destination = (self.destination != self.origin).then_some(self.destination);
        std::iter::once(self.origin).chain(destination)
    }
}

/// An ordered collection of entries with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: IndexMap<EventId, Entry>,
}

impl Schedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schedule from TOML source.
    ///
    /// Entries ending before they start lose their end. Repeated identifiers
    /// are handled according to `config`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] pointing into `source` for malformed TOML,
    /// unparsable timestamps, unknown fields, or rejected duplicate ids.
    pub fn parse(source: &str, config: &InputConfig) -> Result<Self, InputError> {
        let raw: RawSchedule = toml::from_str(source)?;
        let mut schedule = Self::new();

        for raw_entry in raw.entries {
            let span = raw_entry.id.span();
            let entry = Entry::new(
                EventId::new(raw_entry.id.get_ref()),
                raw_entry.start,
                raw_entry.end,
            )
            .with_kind(raw_entry.kind);
            let entry = match raw_entry.label {
                Some(label) => entry.with_label(label),
                None => entry,
            };

            if schedule.entries.contains_key(&entry.id()) {
                match config.duplicate_ids() {
                    DuplicateIds::Reject => {
                        return Err(InputError::new(format!(
                            "duplicate entry id `{}`",
                            entry.id()
                        ))
                        .with_span(span)
                        .with_help(
                            "give every entry its own id, or set \
                             `input.duplicate_ids = \"last_wins\"` to keep the last one",
                        ));
                    }
                    DuplicateIds::LastWins => {
                        debug!(id:% = entry.id(); "Replacing entry with duplicate id");
                    }
                }
            }
            schedule.insert(entry);
        }

        debug!(entries = schedule.len(); "Schedule parsed");
        Ok(schedule)
    }

    /// Add an entry, replacing any entry with the same id in place.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.id(), entry)
    }

    pub fn entry(&self, id: EventId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Entries in input order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Engine input for one day, in input order.
    pub fn events_on(&self, day: NaiveDate) -> Vec<Event> {
        self.entries
            .values()
            .filter(|entry| entry.day() == day)
            .map(Entry::event)
            .collect()
    }

    /// Engine input for every day with at least one entry, keyed by date.
    ///
    /// Entries belong to the day they start on.
    pub fn days(&self) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for entry in self.entries.values() {
            days.entry(entry.day()).or_default().push(entry.event());
        }
        days
    }

    /// Move an entry to a new time range.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::Reschedule`] if no entry has the given id.
    pub fn reschedule(
        &mut self,
        id: EventId,
        start: Timestamp,
        end: Option<Timestamp>,
    ) -> Result<MovedDays, DaygridError> {
        let MapEntry::Occupied(mut slot) = self.entries.entry(id) else {
            return Err(DaygridError::Reschedule(format!("unknown entry id `{id}`")));
        };

        let entry = slot.get_mut();
        let origin = entry.day();
        entry.start = start;
        entry.end = normalize_end(start, end);

        let moved = MovedDays {
            origin,
            destination: entry.day(),
        };
        debug!(
            id:% = id,
            origin:% = moved.origin,
            destination:% = moved.destination;
            "Entry rescheduled"
        );
        Ok(moved)
    }
}
