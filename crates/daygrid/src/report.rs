//! Serialisable summary of a laid-out calendar.

use serde::Serialize;

use daygrid_core::{identifier::EventId, time::Timestamp};

use crate::{CalendarLayout, schedule::EntryKind, schedule::Schedule};

/// Report of every laid-out day, rendered as `[[day]]` tables.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    #[serde(rename = "day", skip_serializing_if = "Vec::is_empty")]
    days: Vec<DayReport>,
}

#[derive(Debug, Clone, Serialize)]
struct DayReport {
    date: String,
    clusters: usize,
    #[serde(rename = "event")]
    events: Vec<EventReport>,
}

#[derive(Debug, Clone, Serialize)]
struct EventReport {
    id: EventId,
    kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    start: Timestamp,
    end: Timestamp,
    column: usize,
    columns: usize,
    left: f64,
    width: f64,
}

/// Rounds a percentage to three decimals for display.
fn round_percent(value: f32) -> f64 {
    (f64::from(value) * 1000.0).round() / 1000.0
}

impl LayoutReport {
    /// Build the report, taking kinds and labels from `schedule`.
    ///
    /// Days are listed in date order and events in layout order.
    pub fn new(schedule: &Schedule, layout: &CalendarLayout) -> Self {
        let days = layout
            .days()
            .map(|(date, day)| DayReport {
                date: date.to_string(),
                clusters: day.clusters().len(),
                events: day
                    .placements()
                    .map(|(id, placement)| {
                        let entry = schedule.entry(id);
                        let position = placement.position();
                        EventReport {
                            id,
                            kind: entry.map(|entry| entry.kind()).unwrap_or_default(),
                            label: entry.and_then(|entry| entry.label()).map(str::to_owned),
                            start: placement.interval().start(),
                            end: placement.interval().end(),
                            column: placement.column(),
                            columns: placement.columns(),
                            left: round_percent(position.left()),
                            width: round_percent(position.width()),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { days }
    }

    /// Number of days in the report.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Render the report as TOML.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the report cannot be represented.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
