//! Daygrid - side-by-side layout for the days of a dispatch calendar.
//!
//! Bookings and synthetic reminders that run at the same time on one day are
//! given separate columns, so a day view can render them next to each other
//! instead of on top of each other. Each day is laid out independently by a
//! pure [`layout::LayoutEngine`]; this crate also reads schedules, applies
//! moves, and reports the result.

pub mod config;
pub mod layout;
pub mod report;
pub mod schedule;

mod error;

pub use daygrid_core::{event, geometry, identifier, time};

pub use error::{DaygridError, InputError};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, info, trace};

use config::AppConfig;
use layout::{DayLayout, LayoutEngine};
use report::LayoutReport;
use schedule::{MovedDays, Schedule};

/// Layouts of every day that has at least one entry, in date order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarLayout {
    days: BTreeMap<NaiveDate, DayLayout>,
}

impl CalendarLayout {
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.get(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &DayLayout)> {
        self.days.iter().map(|(date, day)| (*date, day))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builder for reading schedules and laying out their days.
///
/// # Examples
///
/// ```rust
/// use daygrid::{CalendarBuilder, config::AppConfig, identifier::EventId};
///
/// let source = r#"
///     [[entry]]
///     id = "svc-1"
///     start = "2024-05-06T09:00"
///     end = "2024-05-06T10:00"
///
///     [[entry]]
///     id = "svc-2"
///     start = "2024-05-06T09:00"
///     end = "2024-05-06T10:00"
/// "#;
///
/// let builder = CalendarBuilder::new(AppConfig::default());
/// let schedule = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&schedule);
///
/// let day = layout.day("2024-05-06".parse().unwrap()).unwrap();
/// let second = day.position(EventId::new("svc-2")).unwrap();
/// assert_eq!(second.left(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    config: AppConfig,
}

impl CalendarBuilder {
    /// Create a new calendar builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and input settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The layout engine configured for this builder.
    pub fn engine(&self) -> LayoutEngine {
        LayoutEngine::new().with_default_duration(self.config.layout().default_duration())
    }

    /// Parse schedule source into a [`Schedule`].
    ///
    /// # Errors
    ///
    /// Returns `DaygridError::Input` carrying the source for malformed input
    /// or rejected duplicate identifiers.
    pub fn parse(&self, source: &str) -> Result<Schedule, DaygridError> {
        info!("Parsing schedule");

        let schedule = Schedule::parse(source, self.config.input())
            .map_err(|err| DaygridError::new_input_error(err, source))?;

        debug!(entries = schedule.len(); "Schedule parsed successfully");
        trace!(schedule:?; "Parsed schedule");

        Ok(schedule)
    }

    /// Lay out every day of `schedule`, each as an independent engine run.
    pub fn layout(&self, schedule: &Schedule) -> CalendarLayout {
        let engine = self.engine();
        let days: BTreeMap<_, _> = schedule
            .days()
            .into_iter()
            .map(|(date, events)| (date, engine.compute(&events)))
            .collect();

        info!(days = days.len(); "Calendar laid out");
        CalendarLayout { days }
    }

    /// Recompute the days touched by a move, leaving all other days as they are.
    ///
    /// A day left without entries is removed from `layout`.
    pub fn relayout(&self, schedule: &Schedule, layout: &mut CalendarLayout, moved: MovedDays) {
        let engine = self.engine();
        for date in moved.days() {
            let events = schedule.events_on(date);
            if events.is_empty() {
                debug!(date:% = date; "Day emptied by move");
                layout.days.remove(&date);
            } else {
                debug!(date:% = date, events = events.len(); "Relaying out day");
                layout.days.insert(date, engine.compute(&events));
            }
        }
    }

    /// Render the layout report for `schedule` as TOML.
    ///
    /// # Errors
    ///
    /// Returns `DaygridError::Export` if the report cannot be serialized.
    pub fn render_report(
        &self,
        schedule: &Schedule,
        layout: &CalendarLayout,
    ) -> Result<String, DaygridError> {
        let report = LayoutReport::new(schedule, layout);
        let rendered = report.to_toml()?;
        info!(days = report.len(); "Report rendered successfully");
        Ok(rendered)
    }
}
